//! Route table.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{
    api_info, create_session, delete_value, flush_session, get_session, get_value, health,
    put_value, AppState,
};

/// Build the full application router over `state`.
pub fn router(state: AppState) -> Router {
    let sessions = Router::new()
        .route("/", post(create_session))
        .route("/{id}", get(get_session))
        .route("/{id}/flush", post(flush_session))
        .route(
            "/{id}/values/{key}",
            get(get_value).put(put_value).delete(delete_value),
        );

    Router::new()
        .route("/health", get(health))
        .route("/api/v1", get(api_info))
        .nest("/api/v1/sessions", sessions)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
