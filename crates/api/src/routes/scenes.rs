use axum::routing::get;
use axum::Router;

use crate::handlers::scenes;
use crate::state::AppState;

/// Routes mounted at `/scenes`.
///
/// ```text
/// GET /       -> list_scenes
/// GET /{id}   -> get_scene
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(scenes::list_scenes))
        .route("/{id}", get(scenes::get_scene))
}
