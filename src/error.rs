//! Error types for session-vault.

use thiserror::Error;

/// Main error type for session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Key is absent from a session's contents.
    #[error("key not found in session: {0}")]
    NotFound(String),

    /// Session with the given ID was not found.
    #[error("session not found: {0}")]
    SessionNotFound(String),

    /// Backing store could not be initialized.
    #[error("connection error: {0}")]
    Connection(String),

    /// Flushing to the backing store failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal lock was poisoned.
    #[error("internal lock poisoned")]
    LockPoisoned,
}

impl SessionError {
    /// Whether the caller can treat this as an ordinary outcome
    /// (missing key or unknown session) rather than a backing failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::SessionNotFound(_))
    }
}

/// Convenience Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = SessionError::NotFound("user".into());
        assert!(err.to_string().contains("user"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_session_not_found_display() {
        let err = SessionError::SessionNotFound("unknown-id-123".into());
        assert!(err.to_string().contains("unknown-id-123"));
        assert!(err.to_string().contains("session not found"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "disk gone");
        let err: SessionError = io_err.into();
        assert!(matches!(err, SessionError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_connection_display() {
        let err = SessionError::Connection("redis://10.0.0.1:6379 refused".into());
        assert!(err.to_string().contains("connection error"));
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(SessionError::NotFound("k".into()).is_not_found());
        assert!(SessionError::SessionNotFound("s".into()).is_not_found());
        assert!(!SessionError::LockPoisoned.is_not_found());
        assert!(!SessionError::Connection("x".into()).is_not_found());
    }
}
