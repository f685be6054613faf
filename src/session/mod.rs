//! Session management module.
//!
//! This module provides the session and manager capability traits, the
//! identifier type, and the in-memory backings.

mod id;
mod manager;
mod memory;
mod traits;

pub use id::SessionId;
pub use manager::MemorySessionManager;
pub use memory::MemorySession;
pub use traits::{Session, SessionHandle, SessionManager};
