use serde::Deserialize;

/// Errors returned by [`ApiClient`](crate::ApiClient) calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{code} ({status}): {message}")]
    Api {
        status: u16,
        /// Stable error code such as `NOT_FOUND`, or `UNKNOWN` when the body
        /// was not the server's `{error, code}` shape.
        code: String,
        message: String,
    },

    /// An authenticated call was made before any token was obtained.
    #[error("No token; register, log in or start a guest session first")]
    MissingToken,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    code: String,
}

impl ClientError {
    /// Decode a failed response body. Non-JSON bodies are kept verbatim.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => ClientError::Api {
                status,
                code: parsed.code,
                message: parsed.error,
            },
            Err(_) => ClientError::Api {
                status,
                code: "UNKNOWN".to_string(),
                message: body.trim().to_string(),
            },
        }
    }

    /// The server's error code, if this error came from the server.
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// True when the token is missing, invalid, or its identity is gone.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::MissingToken) || self.code() == Some("UNAUTHORIZED")
    }
}
