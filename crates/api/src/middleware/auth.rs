//! JWT-based identity extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use spotter_core::access::AccessPolicy;
use spotter_core::error::CoreError;
use spotter_core::identity::{resolve_identity, Identity, IdentityKey};
use spotter_db::identity::PgIdentityLookup;

use crate::auth::jwt::validate_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Identity resolved from a JWT Bearer token in the `Authorization` header.
///
/// The token must verify *and* its subject must still exist in the table its
/// role names. A guest token whose session was pruned is rejected even if a
/// user row with the same id exists.
///
/// ```ignore
/// async fn my_handler(AuthIdentity(identity): AuthIdentity) -> AppResult<Json<()>> {
///     tracing::info!(id = identity.id(), role = %identity.role(), "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthIdentity(pub Identity);

impl AuthIdentity {
    /// Apply `policy`, with `target` naming the identity a path addresses.
    pub fn authorize(&self, policy: AccessPolicy, target: Option<IdentityKey>) -> AppResult<()> {
        policy.authorize(&self.0, target).map_err(|e| {
            tracing::info!(
                id = self.0.id(),
                role = %self.0.role(),
                "Access denied by policy"
            );
            AppError::Core(e)
        })
    }
}

impl FromRequestParts<AppState> for AuthIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let lookup = PgIdentityLookup::new(&state.pool);
        let identity = resolve_identity(&lookup, claims.sub, &claims.roles)
            .await
            .map_err(|e| {
                if matches!(e, CoreError::Unauthorized(_)) {
                    tracing::warn!(
                        sub = claims.sub,
                        roles = %claims.roles,
                        jti = %claims.jti,
                        "Token subject did not resolve"
                    );
                }
                AppError::Core(e)
            })?;

        Ok(AuthIdentity(identity))
    }
}
