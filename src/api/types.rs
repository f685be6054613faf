//! API request and response types.

use serde::Serialize;

use crate::error::SessionError;
use crate::session::SessionId;

/// Response for session creation and lookup.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    /// The session identifier.
    pub session_id: String,
}

impl SessionResponse {
    pub fn new(id: &SessionId) -> Self {
        Self {
            session_id: id.to_string(),
        }
    }
}

/// Generic API error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "SESSION_NOT_FOUND").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn session_not_found(id: &str) -> Self {
        Self::new("SESSION_NOT_FOUND", format!("Session '{}' not found", id))
    }

    pub fn key_not_found(key: &str) -> Self {
        Self::new("KEY_NOT_FOUND", format!("Key '{}' not found", key))
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

impl From<&SessionError> for ErrorResponse {
    fn from(err: &SessionError) -> Self {
        match err {
            SessionError::NotFound(key) => Self::key_not_found(key),
            SessionError::SessionNotFound(id) => Self::session_not_found(id),
            SessionError::Connection(msg) => Self::new("CONNECTION_ERROR", msg.clone()),
            SessionError::Io(e) => Self::new("IO_ERROR", e.to_string()),
            SessionError::LockPoisoned => Self::internal_error(err.to_string()),
        }
    }
}
