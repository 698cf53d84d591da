//! Handlers listing one player's own submissions.

use axum::extract::State;
use axum::Json;
use spotter_core::access::AccessPolicy;
use spotter_core::identity::IdentityKey;
use spotter_core::types::DbId;
use spotter_db::models::score::Score;
use spotter_db::repositories::ScoreRepo;

use crate::error::AppResult;
use crate::extract::ApiPath;
use crate::middleware::auth::AuthIdentity;
use crate::state::AppState;

/// GET /api/v1/users/{id}/scores
pub async fn user_scores(
    State(state): State<AppState>,
    auth: AuthIdentity,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Vec<Score>>> {
    list_for(&state, &auth, IdentityKey::User(id)).await
}

/// GET /api/v1/guests/{id}/scores
pub async fn guest_scores(
    State(state): State<AppState>,
    auth: AuthIdentity,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Vec<Score>>> {
    list_for(&state, &auth, IdentityKey::Guest(id)).await
}

async fn list_for(
    state: &AppState,
    auth: &AuthIdentity,
    owner: IdentityKey,
) -> AppResult<Json<Vec<Score>>> {
    auth.authorize(AccessPolicy::ADMIN_OR_SELF, Some(owner))?;
    let scores = ScoreRepo::list_by_owner(&state.pool, owner).await?;
    Ok(Json(scores))
}
