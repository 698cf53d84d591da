//! Repository for the `guest_sessions` table.

use spotter_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::guest_session::GuestSession;

const COLUMNS: &str = "id, name, created_at";

pub struct GuestSessionRepo;

impl GuestSessionRepo {
    /// Insert a new guest session with the given display name.
    pub async fn create(pool: &PgPool, name: &str) -> Result<GuestSession, sqlx::Error> {
        let query = format!("INSERT INTO guest_sessions (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, GuestSession>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GuestSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guest_sessions WHERE id = $1");
        sqlx::query_as::<_, GuestSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete one guest session. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM guest_sessions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete guest sessions created before `cutoff`. Returns the number removed.
    ///
    /// Their scores survive with `guest_id` nulled.
    pub async fn delete_older_than(pool: &PgPool, cutoff: Timestamp) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM guest_sessions WHERE created_at < $1")
            .bind(cutoff)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
