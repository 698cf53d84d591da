//! Handlers for the `/auth` resource (register, login, guest, me).

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use spotter_core::account::{normalize_email, Registration};
use spotter_core::error::CoreError;
use spotter_core::guest::generate_guest_name;
use spotter_core::identity::IdentityProfile;
use spotter_core::roles::Role;
use spotter_core::types::DbId;
use spotter_db::models::user::{CreateUser, User};
use spotter_db::repositories::{GuestSessionRepo, UserRepo};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::middleware::auth::AuthIdentity;
use crate::state::AppState;

/// Shared message for unknown emails and wrong passwords.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: Option<String>,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Optional body for `POST /auth/guest`.
#[derive(Debug, Default, Deserialize)]
pub struct GuestRequest {
    pub name: Option<String>,
}

/// Token issued to a registered user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Token issued to a guest.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestResponse {
    pub token: String,
    pub expires_in: i64,
    pub guest: GuestInfo,
}

#[derive(Debug, Serialize)]
pub struct GuestInfo {
    pub id: DbId,
    pub name: String,
    pub role: Role,
}

/// Response for `GET /auth/me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub auth: IdentityProfile,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a `USER` account and return a token for it.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let registration =
        Registration::validate(&input.email, input.name.as_deref(), &input.password)?;

    if UserRepo::find_by_email(&state.pool, &registration.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Email is already registered".into(),
        )));
    }

    let password_hash = hash_password(&registration.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: registration.email,
            name: registration.name,
            password_hash,
            role: Role::User,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    let response = create_auth_response(&state, &user)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let email = normalize_email(&input.email);

    let Some(user) = UserRepo::find_by_email(&state.pool, &email).await? else {
        tracing::warn!("Login attempt for unknown email");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    };

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::warn!(user_id = user.id, "Login failed: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    tracing::info!(user_id = user.id, "User logged in");
    Ok(Json(create_auth_response(&state, &user)?))
}

/// POST /api/v1/auth/guest
///
/// Start a guest session. The body is optional (empty or `null`);
/// `{"name": "Ace"}` replaces the `Guest` prefix of the generated name.
pub async fn guest(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<GuestResponse>)> {
    let input: GuestRequest = if body.iter().all(u8::is_ascii_whitespace) {
        GuestRequest::default()
    } else {
        serde_json::from_slice::<Option<GuestRequest>>(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?
            .unwrap_or_default()
    };

    let name = generate_guest_name(input.name.as_deref())?;
    let session = GuestSessionRepo::create(&state.pool, &name).await?;

    let token = generate_access_token(session.id, Role::Guest, &session.name, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(guest_id = session.id, "Guest session created");

    Ok((
        StatusCode::CREATED,
        Json(GuestResponse {
            token,
            expires_in: state.config.jwt.expires_in_secs(),
            guest: GuestInfo {
                id: session.id,
                name: session.name,
                role: Role::Guest,
            },
        }),
    ))
}

/// GET /api/v1/auth/me
pub async fn me(AuthIdentity(identity): AuthIdentity) -> Json<MeResponse> {
    Json(MeResponse {
        auth: identity.profile(),
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn create_auth_response(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let record = user.to_record()?;

    let token = generate_access_token(record.id, record.role, &record.name, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        token,
        expires_in: state.config.jwt.expires_in_secs(),
        user: UserInfo {
            id: record.id,
            name: record.name,
            email: record.email,
            role: record.role,
        },
    })
}
