//! Handler for the all-scenes leaderboard overview.

use std::fmt::Display;
use std::future::Future;

use axum::extract::State;
use axum::Json;
use futures::future::join_all;
use serde::Serialize;
use spotter_core::leaderboard::{self, LeaderboardEntry, LeaderboardRow};
use spotter_core::types::DbId;
use spotter_db::models::scene::Scene;
use spotter_db::repositories::{SceneRepo, ScoreRepo};

use crate::error::AppResult;
use crate::extract::ApiQuery;
use crate::query::LeaderboardParams;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneLeaderboard {
    pub scene_id: DbId,
    pub name: String,
    pub entries: Vec<LeaderboardEntry>,
}

/// GET /api/v1/leaderboards?limit=
///
/// Top entries for every scene. A scene whose leaderboard cannot be read is
/// shown empty; only failing to list scenes is an error.
pub async fn overview(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LeaderboardParams>,
) -> AppResult<Json<Vec<SceneLeaderboard>>> {
    let limit = leaderboard::clamp_limit(params.limit);
    let scenes = SceneRepo::list(&state.pool).await?;

    let pool = &state.pool;
    let boards = collect_boards(&scenes, limit, move |scene_id| {
        ScoreRepo::leaderboard(pool, scene_id, limit)
    })
    .await;

    Ok(Json(boards))
}

/// Read every scene's leaderboard concurrently through `read`.
///
/// A failed read is logged and yields an empty board for that scene.
async fn collect_boards<F, Fut, E>(
    scenes: &[Scene],
    limit: i64,
    read: F,
) -> Vec<SceneLeaderboard>
where
    F: Fn(DbId) -> Fut,
    Fut: Future<Output = Result<Vec<LeaderboardRow>, E>>,
    E: Display,
{
    join_all(scenes.iter().map(|scene| {
        let rows = read(scene.id);
        async move {
            let entries = match rows.await {
                Ok(rows) => leaderboard::rank(rows, limit),
                Err(e) => {
                    tracing::warn!(scene_id = scene.id, error = %e, "Leaderboard read failed");
                    Vec::new()
                }
            };
            SceneLeaderboard {
                scene_id: scene.id,
                name: scene.label(),
                entries,
            }
        }
    }))
    .await
}
