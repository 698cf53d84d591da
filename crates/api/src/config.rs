use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Default guest session lifetime before the retention job prunes it.
pub const DEFAULT_GUEST_RETENTION_HOURS: i64 = 48;

/// Upper bound on `GUEST_RETENTION_HOURS` (ten years).
pub const MAX_GUEST_RETENTION_HOURS: i64 = 24 * 365 * 10;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5174`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory of scene images served under `/static`, if any.
    pub static_dir: Option<PathBuf>,
    /// Guest sessions older than this are deleted (default: `48`).
    pub guest_retention_hours: i64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `5174`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `STATIC_DIR`            | unset (no static files)    |
    /// | `GUEST_RETENTION_HOURS` | `48` (at most ten years)   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5174".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = std::env::var("STATIC_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let guest_retention_hours: i64 = std::env::var("GUEST_RETENTION_HOURS")
            .unwrap_or_else(|_| DEFAULT_GUEST_RETENTION_HOURS.to_string())
            .parse()
            .expect("GUEST_RETENTION_HOURS must be a valid i64");
        assert!(
            (1..=MAX_GUEST_RETENTION_HOURS).contains(&guest_retention_hours),
            "GUEST_RETENTION_HOURS must be between 1 and {MAX_GUEST_RETENTION_HOURS}"
        );

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_dir,
            guest_retention_hours,
            jwt,
        }
    }
}
