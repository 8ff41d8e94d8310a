//! Request-result type shared by every view.
//!
//! ERROR HANDLING
//! ==============
//! Views never inspect HTTP responses. They receive an [`ApiResult`] and pick
//! a fallback text; [`ApiError::user_message`] decides what is shown.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const NETWORK_ERROR_MESSAGE: &str = "Cannot reach the server, please check your network connection.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Backend { status: u16, message: Option<String> },

    /// No response was received.
    #[error("network error: {0}")]
    Network(String),

    /// The session was rejected; it has already been cleared.
    #[error("session expired")]
    Unauthorized,

    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Backend { status, .. } => Some(*status),
            Self::Unauthorized => Some(401),
            _ => None,
        }
    }

    /// Message from the backend body, if it sent one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Backend { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user; `fallback` covers errors without a message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Backend { message: Some(message), .. } => message.clone(),
            Self::Network(_) => NETWORK_ERROR_MESSAGE.to_owned(),
            Self::Unauthorized => SESSION_EXPIRED_MESSAGE.to_owned(),
            Self::Backend { message: None, .. } | Self::Decode(_) => fallback.to_owned(),
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Checks a JSON `message` field, then `error`, then a bare JSON string, then
/// any non-empty non-JSON text.
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => ["message", "error"]
            .iter()
            .filter_map(|key| map.get(*key).and_then(serde_json::Value::as_str))
            .map(str::trim)
            .find(|m| !m.is_empty())
            .map(str::to_owned),
        Ok(serde_json::Value::String(s)) => Some(s).filter(|s| !s.trim().is_empty()),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_owned()),
    }
}
