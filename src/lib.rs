//! # session-vault
//!
//! Concurrent session storage with a pluggable backing contract.
//!
//! A session is a mutable, keyed bag of JSON values addressed by an opaque
//! unique identifier. A [`SessionManager`] creates, registers, and looks
//! up sessions; any number of threads may hold handles to the same
//! session and mutate it concurrently.
//!
//! ## Features
//!
//! - **Capability traits**: [`Session`] and [`SessionManager`] are object
//!   safe, so callers can work against `Arc<dyn SessionManager>`
//! - **Two-tier locking**: one lock for the registry, one per session
//! - **Random identifiers**: v4 UUIDs, no shared counter
//! - **HTTP surface**: a thin axum router exposing the contract
//!
//! ## Quick Start
//!
//! ```
//! use session_vault::{MemorySessionManager, Session, SessionManager};
//! use serde_json::json;
//!
//! fn main() -> session_vault::Result<()> {
//!     let manager = MemorySessionManager::new();
//!     manager.init("", &[])?;
//!
//!     let session = manager.create()?;
//!     session.set("user", json!("alice"))?;
//!
//!     // Any handle for the same ID sees the write
//!     let again = manager.get(session.id().as_str())?;
//!     assert_eq!(again.get("user")?, json!("alice"));
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;

// Re-export commonly used types
pub use error::{Result, SessionError};
pub use session::{
    MemorySession, MemorySessionManager, Session, SessionHandle, SessionId, SessionManager,
};

/// Value type stored in session contents.
pub use serde_json::Value;
