//! Postgres-backed [`IdentityLookup`].

use async_trait::async_trait;
use spotter_core::error::CoreError;
use spotter_core::identity::{GuestRecord, IdentityLookup, UserRecord};
use spotter_core::types::DbId;
use sqlx::PgPool;

use crate::repositories::{GuestSessionRepo, UserRepo};

/// Resolves identities against the `users` and `guest_sessions` tables.
pub struct PgIdentityLookup<'a> {
    pool: &'a PgPool,
}

impl<'a> PgIdentityLookup<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

fn store_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Identity lookup failed");
    CoreError::Internal(format!("identity lookup failed: {err}"))
}

#[async_trait]
impl IdentityLookup for PgIdentityLookup<'_> {
    async fn find_user(&self, id: DbId) -> Result<Option<UserRecord>, CoreError> {
        let user = UserRepo::find_by_id(self.pool, id).await.map_err(store_error)?;
        user.map(|u| u.to_record()).transpose()
    }

    async fn find_guest(&self, id: DbId) -> Result<Option<GuestRecord>, CoreError> {
        let guest = GuestSessionRepo::find_by_id(self.pool, id)
            .await
            .map_err(store_error)?;
        Ok(guest.map(GuestRecord::from))
    }
}
