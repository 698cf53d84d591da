use axum::routing::get;
use axum::Router;

use crate::handlers::leaderboards;
use crate::state::AppState;

/// Routes mounted at `/leaderboards`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(leaderboards::overview))
}
