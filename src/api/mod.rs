//! HTTP surface for session-vault.
//!
//! A thin REST layer over [`SessionManager`](crate::SessionManager) and
//! [`Session`](crate::Session). The session identifier travels in the
//! URL path; the layer keeps no state of its own.
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | GET | `/health` | liveness |
//! | GET | `/api/v1` | name, version, session count |
//! | POST | `/api/v1/sessions` | `SessionManager::create` |
//! | GET | `/api/v1/sessions/{id}` | `SessionManager::get` |
//! | GET, PUT, DELETE | `/api/v1/sessions/{id}/values/{key}` | `Session::get`, `set`, `delete` |
//! | POST | `/api/v1/sessions/{id}/flush` | `Session::flush` |
//!
//! ```no_run
//! use session_vault::api::{serve, AppState, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> session_vault::Result<()> {
//!     serve(ServerConfig::default(), AppState::new()).await
//! }
//! ```

pub mod handlers;
pub mod routes;
pub mod server;
pub mod types;

pub use handlers::AppState;
pub use routes::router;
pub use server::{serve, ServerConfig};
pub use types::{ErrorResponse, SessionResponse};
