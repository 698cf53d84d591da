pub mod auth;
pub mod game;
pub mod health;
pub mod leaderboards;
pub mod players;
pub mod scenes;
pub mod scores;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                  register (public)
/// /auth/login                     login (public)
/// /auth/guest                     start guest session (public)
/// /auth/me                        current identity (requires auth)
///
/// /scenes                         list scenes with characters
/// /scenes/{id}                    one scene
///
/// /game/check                     hit test (POST)
///
/// /scores                         submit score (POST, any player)
/// /scores/{scene_id}              scene leaderboard (GET, ?limit=)
///
/// /leaderboards                   all-scene overview (GET, ?limit=)
///
/// /users/{id}/scores              user's scores (admin or self)
/// /guests/{id}/scores             guest's scores (admin or self)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/scenes", scenes::router())
        .nest("/game", game::router())
        .nest("/scores", scores::router())
        .nest("/leaderboards", leaderboards::router())
        .merge(players::router())
}
