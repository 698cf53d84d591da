//! Handlers for score submission and per-scene leaderboards.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use spotter_core::error::CoreError;
use spotter_core::leaderboard::{self, LeaderboardEntry};
use spotter_core::scoring::ScoreSubmission;
use spotter_core::types::DbId;
use spotter_db::models::score::Score;
use spotter_db::repositories::{SceneRepo, ScoreRepo};

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::middleware::rbac::RequirePlayer;
use crate::query::LeaderboardParams;
use crate::state::AppState;

/// POST /api/v1/scores
///
/// Record a completion time for the authenticated player. Users and admins
/// are attributed by user id, guests by guest id.
pub async fn submit_score(
    State(state): State<AppState>,
    RequirePlayer(identity): RequirePlayer,
    ApiJson(body): ApiJson<Value>,
) -> AppResult<(StatusCode, Json<Score>)> {
    let submission = ScoreSubmission::parse(body.get("sceneId"), body.get("ms"))?;

    if !SceneRepo::exists(&state.pool, submission.scene_id).await? {
        return Err(CoreError::not_found("Scene", submission.scene_id).into());
    }

    let score = ScoreRepo::create(&state.pool, &submission.attribute_to(&identity)).await?;

    tracing::info!(
        score_id = score.id,
        scene_id = score.scene_id,
        ms = score.ms,
        player = identity.name(),
        "Score recorded"
    );

    Ok((StatusCode::CREATED, Json(score)))
}

/// GET /api/v1/scores/{scene_id}?limit=
///
/// Fastest times first. Unknown scenes yield an empty list.
pub async fn scene_leaderboard(
    State(state): State<AppState>,
    ApiPath(scene_id): ApiPath<DbId>,
    ApiQuery(params): ApiQuery<LeaderboardParams>,
) -> AppResult<Json<Vec<LeaderboardEntry>>> {
    let limit = leaderboard::clamp_limit(params.limit);
    let rows = ScoreRepo::leaderboard(&state.pool, scene_id, limit).await?;
    Ok(Json(leaderboard::rank(rows, limit)))
}
