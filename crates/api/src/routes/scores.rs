use axum::routing::{get, post};
use axum::Router;

use crate::handlers::scores;
use crate::state::AppState;

/// Routes mounted at `/scores`.
///
/// ```text
/// POST /              -> submit_score (requires auth)
/// GET  /{scene_id}    -> scene_leaderboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(scores::submit_score))
        .route("/{scene_id}", get(scores::scene_leaderboard))
}
