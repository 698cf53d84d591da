//! HTTP-level integration tests for the scene catalog and the hit test.

mod common;

use axum::http::StatusCode;
use common::{body_json, expect_error, get, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn character_id(pool: &PgPool, name: &str) -> i64 {
    let (id,): (i64,) = sqlx::query_as("SELECT id FROM characters WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap();
    id
}

async fn check(pool: &PgPool, body: serde_json::Value) -> axum::response::Response {
    post_json(common::build_test_app(pool.clone()), "/api/v1/game/check", body).await
}

// ---------------------------------------------------------------------------
// Scene catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_scenes_with_characters(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/scenes").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let scenes = json.as_array().unwrap();
    assert_eq!(scenes.len(), 4);

    let first = &scenes[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["name"], "Scene 1");
    assert_eq!(first["url"], "/static/Scene1.jpeg");
    let names: Vec<_> = first["characters"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Waldo", "Wenda", "Wizard"]);
    assert!(first["characters"][0]["iconUrl"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_scene_payload_never_contains_coordinates(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/scenes/2").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["characters"].as_array().unwrap().len(), 4);
    for character in json["characters"].as_array().unwrap() {
        assert!(character.get("x").is_none());
        assert!(character.get("y").is_none());
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_unknown_scene_is_not_found(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/scenes/99999").await;

    let json = expect_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
    assert_eq!(json["error"], "Scene with id 99999 not found");
}

// ---------------------------------------------------------------------------
// Hit test
// ---------------------------------------------------------------------------

/// Waldo in scene 1 sits at (0.432, 0.755).
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_click_near_answer_is_correct(pool: PgPool) {
    let waldo = character_id(&pool, "Waldo").await;

    let response = check(
        &pool,
        json!({ "sceneId": 1, "characterId": waldo, "click": { "x": 0.44, "y": 0.76 } }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "correct": true }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_click_far_from_answer_is_incorrect(pool: PgPool) {
    let waldo = character_id(&pool, "Waldo").await;

    let response = check(
        &pool,
        json!({ "sceneId": 1, "characterId": waldo, "click": { "x": 0.5, "y": 0.5 } }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "correct": false }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_string_ids_are_accepted(pool: PgPool) {
    let waldo = character_id(&pool, "Waldo").await;

    let response = check(
        &pool,
        json!({
            "sceneId": "1",
            "characterId": waldo.to_string(),
            "click": { "x": 0.432, "y": 0.755 },
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["correct"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_not_in_scene_is_not_found(pool: PgPool) {
    // Oswald is not hidden in scene 1.
    let oswald = character_id(&pool, "Oswald").await;

    let response = check(
        &pool,
        json!({ "sceneId": 1, "characterId": oswald, "click": { "x": 0.5, "y": 0.5 } }),
    )
    .await;

    expect_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_click_is_invalid(pool: PgPool) {
    let response = check(&pool, json!({ "sceneId": 1, "characterId": 1 })).await;

    expect_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_scene_id_is_invalid(pool: PgPool) {
    let response = check(
        &pool,
        json!({ "sceneId": "abc", "characterId": 1, "click": { "x": 0.5, "y": 0.5 } }),
    )
    .await;

    expect_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_click_is_invalid(pool: PgPool) {
    let response = check(
        &pool,
        json!({ "sceneId": 1, "characterId": 1, "click": { "x": "left", "y": 0.5 } }),
    )
    .await;

    expect_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}
