//! Repository for `scene_answers`, the authoritative answer store.

use spotter_core::types::DbId;
use sqlx::PgPool;

use crate::models::answer::Answer;

pub struct AnswerRepo;

impl AnswerRepo {
    /// Look up the answer for a (scene, character) pair. At most one exists.
    pub async fn find(
        pool: &PgPool,
        scene_id: DbId,
        character_id: DbId,
    ) -> Result<Option<Answer>, sqlx::Error> {
        sqlx::query_as::<_, Answer>(
            "SELECT id, scene_id, character_id, x, y
             FROM scene_answers
             WHERE scene_id = $1 AND character_id = $2",
        )
        .bind(scene_id)
        .bind(character_id)
        .fetch_optional(pool)
        .await
    }
}
