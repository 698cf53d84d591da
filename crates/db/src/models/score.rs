//! Score entity model and leaderboard projection.

use serde::Serialize;
use spotter_core::leaderboard::LeaderboardRow;
use spotter_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `scores` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub id: DbId,
    pub scene_id: DbId,
    pub ms: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// A score joined with its player names, as read for leaderboards.
#[derive(Debug, Clone, FromRow)]
pub struct ScoreWithPlayer {
    pub id: DbId,
    pub ms: i64,
    pub created_at: Timestamp,
    pub user_name: Option<String>,
    pub guest_name: Option<String>,
}

impl From<ScoreWithPlayer> for LeaderboardRow {
    fn from(s: ScoreWithPlayer) -> Self {
        LeaderboardRow {
            score_id: s.id,
            ms: s.ms,
            created_at: s.created_at,
            user_name: s.user_name,
            guest_name: s.guest_name,
        }
    }
}
