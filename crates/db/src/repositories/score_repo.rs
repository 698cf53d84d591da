//! Repository for the `scores` table.

use spotter_core::identity::IdentityKey;
use spotter_core::leaderboard::LeaderboardRow;
use spotter_core::scoring::NewScore;
use spotter_core::types::DbId;
use sqlx::PgPool;

use crate::models::score::{Score, ScoreWithPlayer};

const COLUMNS: &str = "id, scene_id, ms, user_id, guest_id, created_at";

/// Write-once score storage. There is no update or delete.
pub struct ScoreRepo;

impl ScoreRepo {
    /// Insert a score attributed to exactly one of user or guest.
    pub async fn create(pool: &PgPool, input: &NewScore) -> Result<Score, sqlx::Error> {
        let (user_id, guest_id) = input.owner.attribution_columns();
        let query = format!(
            "INSERT INTO scores (scene_id, ms, user_id, guest_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Score>(&query)
            .bind(input.scene_id)
            .bind(input.ms)
            .bind(user_id)
            .bind(guest_id)
            .fetch_one(pool)
            .await
    }

    /// The `limit` fastest scores for a scene with their player names.
    ///
    /// Ties on `ms` are ordered by creation time, then id.
    pub async fn leaderboard(
        pool: &PgPool,
        scene_id: DbId,
        limit: i64,
    ) -> Result<Vec<LeaderboardRow>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ScoreWithPlayer>(
            "SELECT s.id, s.ms, s.created_at, u.name AS user_name, g.name AS guest_name
             FROM scores s
             LEFT JOIN users u ON u.id = s.user_id
             LEFT JOIN guest_sessions g ON g.id = s.guest_id
             WHERE s.scene_id = $1
             ORDER BY s.ms ASC, s.created_at ASC, s.id ASC
             LIMIT $2",
        )
        .bind(scene_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(LeaderboardRow::from).collect())
    }

    /// All scores submitted by one player, newest first.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner: IdentityKey,
    ) -> Result<Vec<Score>, sqlx::Error> {
        let column = match owner {
            IdentityKey::User(_) => "user_id",
            IdentityKey::Guest(_) => "guest_id",
        };
        let query = format!(
            "SELECT {COLUMNS} FROM scores WHERE {column} = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Score>(&query)
            .bind(owner.id())
            .fetch_all(pool)
            .await
    }

    pub async fn count_for_scene(pool: &PgPool, scene_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM scores WHERE scene_id = $1")
            .bind(scene_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
