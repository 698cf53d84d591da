//! Domain error taxonomy shared by every layer.

use crate::types::DbId;

/// Errors raised by domain logic.
///
/// The API layer maps each variant onto a stable HTTP status and error code;
/// see `spotter_api::error::AppError`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced scene, character, answer, or player does not exist.
    ///
    /// `key` is whatever identifies the row: a single id, or a composite such
    /// as `scene 1 / character 4` for answers.
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    /// Malformed or missing request fields.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Duplicate unique key (e.g. an email already registered).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing, invalid, or expired credential, or a credential whose backing
    /// identity row no longer exists.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated, but the role or ownership check failed.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// `NotFound` for an entity addressed by a single id.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound {
            entity,
            key: format!("with id {id}"),
        }
    }
}
