//! Role-based access control extractors.
//!
//! Each extractor wraps [`AuthIdentity`] and rejects identities whose role is
//! outside the policy.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use spotter_core::access::AccessPolicy;
use spotter_core::identity::Identity;

use super::auth::AuthIdentity;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a role that may submit scores: `USER`, `ADMIN` or `GUEST`.
/// Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn submit(RequirePlayer(identity): RequirePlayer) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequirePlayer(pub Identity);

impl FromRequestParts<AppState> for RequirePlayer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthIdentity::from_request_parts(parts, state).await?;
        auth.authorize(AccessPolicy::PLAYERS, None)?;
        Ok(RequirePlayer(auth.0))
    }
}
