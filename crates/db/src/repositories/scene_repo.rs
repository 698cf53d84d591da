//! Repository for the `scenes` table.

use spotter_core::types::DbId;
use sqlx::PgPool;

use crate::models::scene::Scene;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, image_url, width, height, created_at";

/// Read-only access to scenes. Scenes are loaded by migrations.
pub struct SceneRepo;

impl SceneRepo {
    /// List all scenes ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Scene>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scenes ORDER BY id ASC");
        sqlx::query_as::<_, Scene>(&query).fetch_all(pool).await
    }

    /// Find a scene by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Scene>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scenes WHERE id = $1");
        sqlx::query_as::<_, Scene>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM scenes WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }
}
