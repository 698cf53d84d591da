//! Handler for `POST /game/check`, the server-side hit test.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use spotter_core::error::CoreError;
use spotter_core::hit_test::{evaluate, GuessClaim};
use spotter_db::repositories::AnswerRepo;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub correct: bool,
}

/// POST /api/v1/game/check
///
/// Body: `{sceneId, characterId, click: {x, y}}`. Responds with whether the
/// click lands on the character. The answer itself is never returned.
pub async fn check_guess(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> AppResult<Json<CheckResponse>> {
    let claim = GuessClaim::parse(
        body.get("sceneId"),
        body.get("characterId"),
        body.get("click"),
    )?;

    let answer = AnswerRepo::find(&state.pool, claim.scene_id, claim.character_id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Answer",
            key: format!(
                "for scene {} / character {}",
                claim.scene_id, claim.character_id
            ),
        })?;

    let correct = evaluate(claim.click, answer.point());
    tracing::debug!(
        scene_id = claim.scene_id,
        character_id = claim.character_id,
        correct,
        "Guess checked"
    );

    Ok(Json(CheckResponse { correct }))
}
