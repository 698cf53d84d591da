//! Scene entity model.

use serde::Serialize;
use spotter_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `scenes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: DbId,
    pub name: Option<String>,
    #[serde(rename = "url")]
    pub image_url: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub created_at: Timestamp,
}

impl Scene {
    /// Display label; unnamed scenes fall back to `Scene <id>`.
    pub fn label(&self) -> String {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from)
            .unwrap_or_else(|| format!("Scene {}", self.id))
    }
}
