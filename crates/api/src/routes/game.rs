use axum::routing::post;
use axum::Router;

use crate::handlers::game;
use crate::state::AppState;

/// Routes mounted at `/game`.
pub fn router() -> Router<AppState> {
    Router::new().route("/check", post(game::check_guess))
}
