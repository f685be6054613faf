//! REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::types::{ErrorResponse, SessionResponse};
use crate::error::SessionError;
use crate::session::{MemorySessionManager, Session, SessionManager};
use crate::Value;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<dyn SessionManager>,
}

impl AppState {
    /// State backed by a fresh in-memory manager.
    pub fn new() -> Self {
        Self::with_manager(Arc::new(MemorySessionManager::new()))
    }

    /// State backed by any manager implementation.
    pub fn with_manager(manager: Arc<dyn SessionManager>) -> Self {
        Self { manager }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn api_error(err: SessionError) -> ApiError {
    let status = match &err {
        SessionError::NotFound(_) | SessionError::SessionNotFound(_) => StatusCode::NOT_FOUND,
        SessionError::Connection(_) => StatusCode::SERVICE_UNAVAILABLE,
        SessionError::Io(_) | SessionError::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::warn!(error = %err, "session operation failed");
    }
    (status, Json(ErrorResponse::from(&err)))
}

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}

/// API information endpoint.
pub async fn api_info(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let sessions = state.manager.count().map_err(api_error)?;
    Ok(Json(serde_json::json!({
        "name": "session-vault",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "sessions": sessions,
    })))
}

/// Create a new session.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let session = state.manager.create().map_err(api_error)?;
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse::new(session.id())),
    ))
}

/// Check that a session exists.
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state.manager.get(&session_id).map_err(api_error)?;
    Ok(Json(SessionResponse::new(session.id())))
}

/// Read a value from a session.
pub async fn get_value(
    State(state): State<AppState>,
    Path((session_id, key)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let session = state.manager.get(&session_id).map_err(api_error)?;
    let value = session.get(&key).map_err(api_error)?;
    Ok(Json(value))
}

/// Store a value in a session.
pub async fn put_value(
    State(state): State<AppState>,
    Path((session_id, key)): Path<(String, String)>,
    Json(value): Json<Value>,
) -> Result<StatusCode, ApiError> {
    let session = state.manager.get(&session_id).map_err(api_error)?;
    session.set(&key, value).map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remove a value from a session.
pub async fn delete_value(
    State(state): State<AppState>,
    Path((session_id, key)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let session = state.manager.get(&session_id).map_err(api_error)?;
    session.delete(&key).map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Flush a session to its backing store.
pub async fn flush_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let session = state.manager.get(&session_id).map_err(api_error)?;
    session.flush().map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_new() {
        let state = AppState::new();
        assert_eq!(state.manager.count().unwrap(), 0);
    }

    #[test]
    fn test_health_endpoint() {
        assert_eq!(tokio_test::block_on(health()), "OK");
    }

    #[tokio::test]
    async fn test_api_info_endpoint() {
        let state = AppState::new();
        state.manager.create().unwrap();

        let Json(json) = api_info(State(state)).await.unwrap();
        assert_eq!(json["name"], "session-vault");
        assert_eq!(json["status"], "running");
        assert_eq!(json["sessions"], 1);
    }

    #[tokio::test]
    async fn test_put_then_get_value() {
        let state = AppState::new();
        let (status, Json(created)) = create_session(State(state.clone())).await.unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let path = (created.session_id.clone(), "user".to_string());
        put_value(
            State(state.clone()),
            Path(path.clone()),
            Json(serde_json::json!("alice")),
        )
        .await
        .unwrap();

        let Json(value) = get_value(State(state), Path(path)).await.unwrap();
        assert_eq!(value, "alice");
    }

    #[test]
    fn test_api_error_status() {
        let (status, _) = api_error(SessionError::SessionNotFound("x".into()));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = api_error(SessionError::Connection("x".into()));
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (status, Json(body)) = api_error(SessionError::Io(std::io::Error::other("x")));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "IO_ERROR");
    }
}
