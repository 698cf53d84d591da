//! REST client for the Spotter `/api/v1` endpoints.
//!
//! Wraps every endpoint with typed request/response handling using
//! [`reqwest`]. The bearer token obtained from register, login or a guest
//! session is kept on the client and attached to authenticated calls.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use spotter_core::hit_test::{clamp_to_margin, NormalizedPoint, DEFAULT_CLICK_MARGIN};
use spotter_core::leaderboard::LeaderboardEntry;
use spotter_core::types::DbId;

use crate::error::ClientError;
use crate::types::{
    CheckResponse, GuestSession, MeResponse, Profile, Scene, SceneLeaderboard, Score,
    UserSession,
};

/// HTTP client for one Spotter server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// * `base_url` - Server root, e.g. `http://localhost:5174`. `/api/v1` is
    ///   appended per call.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Use a previously issued token, e.g. one restored from storage.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    // ---- auth ----

    /// `POST /auth/register`. Keeps the returned token.
    pub async fn register(
        &mut self,
        email: &str,
        name: Option<&str>,
        password: &str,
    ) -> Result<UserSession, ClientError> {
        let body = json!({ "email": email, "name": name, "password": password });
        let session: UserSession = self.post("/auth/register", &body, false).await?;
        self.token = Some(session.token.clone());
        Ok(session)
    }

    /// `POST /auth/login`. Keeps the returned token.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<UserSession, ClientError> {
        let body = json!({ "email": email, "password": password });
        let session: UserSession = self.post("/auth/login", &body, false).await?;
        self.token = Some(session.token.clone());
        Ok(session)
    }

    /// `POST /auth/guest`. Keeps the returned token.
    pub async fn start_guest(
        &mut self,
        name_hint: Option<&str>,
    ) -> Result<GuestSession, ClientError> {
        let body = json!({ "name": name_hint });
        let session: GuestSession = self.post("/auth/guest", &body, false).await?;
        self.token = Some(session.token.clone());
        Ok(session)
    }

    /// `GET /auth/me`.
    pub async fn me(&self) -> Result<Profile, ClientError> {
        let response: MeResponse = self.get("/auth/me", true).await?;
        Ok(response.auth)
    }

    // ---- scenes & game ----

    pub async fn scenes(&self) -> Result<Vec<Scene>, ClientError> {
        self.get("/scenes", false).await
    }

    pub async fn scene(&self, id: DbId) -> Result<Scene, ClientError> {
        self.get(&format!("/scenes/{id}"), false).await
    }

    /// `POST /game/check`. Returns whether `click` finds the character.
    ///
    /// The click is clamped into the board margin before it is sent.
    pub async fn check_guess(
        &self,
        scene_id: DbId,
        character_id: DbId,
        click: NormalizedPoint,
    ) -> Result<bool, ClientError> {
        let body = check_guess_body(scene_id, character_id, click);
        let response: CheckResponse = self.post("/game/check", &body, false).await?;
        Ok(response.correct)
    }

    // ---- scores ----

    /// `POST /scores` as the current identity.
    pub async fn submit_score(&self, scene_id: DbId, ms: i64) -> Result<Score, ClientError> {
        let body = json!({ "sceneId": scene_id, "ms": ms });
        self.post("/scores", &body, true).await
    }

    /// `GET /scores/{scene_id}`. `None` uses the server default limit.
    pub async fn leaderboard(
        &self,
        scene_id: DbId,
        limit: Option<i64>,
    ) -> Result<Vec<LeaderboardEntry>, ClientError> {
        let path = match limit {
            Some(limit) => format!("/scores/{scene_id}?limit={limit}"),
            None => format!("/scores/{scene_id}"),
        };
        self.get(&path, false).await
    }

    /// `GET /leaderboards`.
    pub async fn leaderboards(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<SceneLeaderboard>, ClientError> {
        let path = match limit {
            Some(limit) => format!("/leaderboards?limit={limit}"),
            None => "/leaderboards".to_string(),
        };
        self.get(&path, false).await
    }

    pub async fn user_scores(&self, user_id: DbId) -> Result<Vec<Score>, ClientError> {
        self.get(&format!("/users/{user_id}/scores"), true).await
    }

    pub async fn guest_scores(&self, guest_id: DbId) -> Result<Vec<Score>, ClientError> {
        self.get(&format!("/guests/{guest_id}/scores"), true).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    fn authorize(
        &self,
        request: reqwest::RequestBuilder,
        required: bool,
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        match (&self.token, required) {
            (Some(token), _) => Ok(request.bearer_auth(token)),
            (None, true) => Err(ClientError::MissingToken),
            (None, false) => Ok(request),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, auth: bool) -> Result<T, ClientError> {
        let request = self.authorize(self.http.get(self.url(path)), auth)?;
        Self::parse_response(request.send().await?).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
        auth: bool,
    ) -> Result<T, ClientError> {
        let request = self.authorize(self.http.post(self.url(path)).json(body), auth)?;
        Self::parse_response(request.send().await?).await
    }

    /// Decode a success body as `T`, or turn a failure into
    /// [`ClientError::Api`].
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %body, "API call failed");
            return Err(ClientError::from_error_body(status.as_u16(), &body));
        }
        Ok(response.json::<T>().await?)
    }
}

fn check_guess_body(scene_id: DbId, character_id: DbId, click: NormalizedPoint) -> Value {
    let click = clamp_to_margin(click, DEFAULT_CLICK_MARGIN);
    json!({ "sceneId": scene_id, "characterId": character_id, "click": click })
}
