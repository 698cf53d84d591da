use axum::routing::get;
use axum::Router;

use crate::handlers::players;
use crate::state::AppState;

/// Per-player score listings, merged at the `/api/v1` root.
///
/// ```text
/// GET /users/{id}/scores   -> user_scores (admin or self)
/// GET /guests/{id}/scores  -> guest_scores (admin or self)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/{id}/scores", get(players::user_scores))
        .route("/guests/{id}/scores", get(players::guest_scores))
}
