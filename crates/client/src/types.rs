//! Wire types as the client sees them. Field names follow the server's
//! camelCase JSON.

use serde::Deserialize;
use spotter_core::leaderboard::LeaderboardEntry;
use spotter_core::roles::Role;
use spotter_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub icon_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: DbId,
    pub name: Option<String>,
    pub url: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    #[serde(default)]
    pub characters: Vec<Character>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub id: DbId,
    pub scene_id: DbId,
    pub ms: i64,
    pub user_id: Option<DbId>,
    pub guest_id: Option<DbId>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneLeaderboard {
    pub scene_id: DbId,
    pub name: String,
    pub entries: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Result of register or login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub token: String,
    pub expires_in: i64,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuestInfo {
    pub id: DbId,
    pub name: String,
    pub role: Role,
}

/// Result of starting a guest session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestSession {
    pub token: String,
    pub expires_in: i64,
    pub guest: GuestInfo,
}

/// The identity behind the current token, from `GET /auth/me`.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub kind: String,
    pub id: DbId,
    pub name: String,
    pub role: Role,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MeResponse {
    pub auth: Profile,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckResponse {
    pub correct: bool,
}
