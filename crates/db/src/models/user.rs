//! User entity model and DTOs.

use spotter_core::error::CoreError;
use spotter_core::identity::UserRecord;
use spotter_core::roles::Role;
use spotter_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Convert into the identity record used by the resolver.
    ///
    /// Fails if the stored role is not a registered-user role.
    pub fn to_record(&self) -> Result<UserRecord, CoreError> {
        let role: Role = self
            .role
            .parse()
            .map_err(|_| CoreError::Internal(format!("user {} has invalid role", self.id)))?;
        if !role.is_registered() {
            return Err(CoreError::Internal(format!(
                "user {} has non-user role {role}",
                self.id
            )));
        }
        Ok(UserRecord {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role,
        })
    }
}

/// DTO for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
}
