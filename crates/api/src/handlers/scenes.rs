//! Handlers for the `/scenes` catalog.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use spotter_core::error::CoreError;
use spotter_core::types::DbId;
use spotter_db::models::character::Character;
use spotter_db::models::scene::Scene;
use spotter_db::repositories::{CharacterRepo, SceneRepo};

use crate::error::AppResult;
use crate::extract::ApiPath;
use crate::state::AppState;

/// A scene with the characters hidden in it. Never carries coordinates.
#[derive(Debug, Serialize)]
pub struct SceneDetail {
    #[serde(flatten)]
    pub scene: Scene,
    pub characters: Vec<Character>,
}

/// GET /api/v1/scenes
pub async fn list_scenes(State(state): State<AppState>) -> AppResult<Json<Vec<SceneDetail>>> {
    let scenes = SceneRepo::list(&state.pool).await?;

    let mut rosters: HashMap<DbId, Vec<Character>> = HashMap::new();
    for sc in CharacterRepo::list_for_all_scenes(&state.pool).await? {
        rosters.entry(sc.scene_id).or_default().push(sc.into());
    }

    let details = scenes
        .into_iter()
        .map(|scene| SceneDetail {
            characters: rosters.remove(&scene.id).unwrap_or_default(),
            scene,
        })
        .collect();

    Ok(Json(details))
}

/// GET /api/v1/scenes/{id}
pub async fn get_scene(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<SceneDetail>> {
    let scene = SceneRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Scene", id))?;
    let characters = CharacterRepo::list_by_scene(&state.pool, id).await?;

    Ok(Json(SceneDetail { scene, characters }))
}
