use serde::Serialize;
use spotter_core::identity::GuestRecord;
use spotter_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `guest_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestSession {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

impl From<GuestSession> for GuestRecord {
    fn from(g: GuestSession) -> Self {
        GuestRecord { id: g.id, name: g.name }
    }
}
