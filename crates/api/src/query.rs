//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?limit=` for leaderboard reads. Clamped by
/// [`spotter_core::leaderboard::clamp_limit`].
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardParams {
    pub limit: Option<i64>,
}
