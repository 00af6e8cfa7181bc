use thiserror::Error;

/// Failure of a REST call, displayed verbatim next to the triggering control.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Non-2xx response. `message` is the server's error text or the
    /// operation's fallback message.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// HTTP 401: the token is missing, expired or revoked.
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,

    /// A protected call was attempted without a token or organization.
    #[error("No organization ID or token available")]
    NoSession,

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the failure should end the session and return to the login page.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::NoSession)
    }

    /// HTTP status of the failed response, if one arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Picks the text surfaced for a failed response body.
///
/// A JSON object yields its `error` string when that is non-blank and
/// `fallback` otherwise. Any other non-empty body is used as-is. An empty
/// body yields `fallback`.
pub fn error_message(body: &str, fallback: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(serde_json::Value::String(msg)) = map.get("error") {
            if !msg.trim().is_empty() {
                return msg.clone();
            }
        }
        return fallback.to_string();
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
