//! Repository for `characters`, read through their scene answers.

use spotter_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::{Character, SceneCharacter};

pub struct CharacterRepo;

impl CharacterRepo {
    /// Characters hidden in one scene, ordered by name. No coordinates.
    pub async fn list_by_scene(
        pool: &PgPool,
        scene_id: DbId,
    ) -> Result<Vec<Character>, sqlx::Error> {
        sqlx::query_as::<_, Character>(
            "SELECT c.id, c.name, c.icon_url
             FROM scene_answers a
             JOIN characters c ON c.id = a.character_id
             WHERE a.scene_id = $1
             ORDER BY c.name ASC",
        )
        .bind(scene_id)
        .fetch_all(pool)
        .await
    }

    /// Rosters for every scene in one query, ordered by scene then name.
    pub async fn list_for_all_scenes(pool: &PgPool) -> Result<Vec<SceneCharacter>, sqlx::Error> {
        sqlx::query_as::<_, SceneCharacter>(
            "SELECT a.scene_id, c.id, c.name, c.icon_url
             FROM scene_answers a
             JOIN characters c ON c.id = a.character_id
             ORDER BY a.scene_id ASC, c.name ASC",
        )
        .fetch_all(pool)
        .await
    }
}
