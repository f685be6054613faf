//! Capability traits for session backings.
//!
//! Callers hold `Arc<dyn SessionManager>` and [`SessionHandle`]s, so an
//! alternate backing (persistent, distributed) can be swapped in without
//! touching them.

use std::fmt;
use std::sync::Arc;

use super::SessionId;
use crate::{Result, Value};

/// Shared handle to a live session.
///
/// Every handle for the same identifier refers to the same underlying
/// session, so writes through one are visible through all the others.
pub type SessionHandle = Arc<dyn Session>;

/// A keyed, mutable value store with a fixed identity.
///
/// All methods take `&self` and must be safe to call concurrently on the
/// same instance. Operations on a single key are linearizable.
pub trait Session: Send + Sync + fmt::Debug {
    /// The identifier assigned at construction.
    fn id(&self) -> &SessionId;

    /// Insert or overwrite the value under `key`.
    fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Fetch the value under `key`.
    ///
    /// Fails with [`SessionError::NotFound`](crate::SessionError::NotFound)
    /// when the key is absent.
    fn get(&self, key: &str) -> Result<Value>;

    /// Remove `key`. Succeeds whether or not it was present.
    fn delete(&self, key: &str) -> Result<()>;

    /// Persist the contents to the backing store.
    ///
    /// Durable backings report failures as
    /// [`SessionError::Io`](crate::SessionError::Io); the caller decides
    /// whether to retry.
    fn flush(&self) -> Result<()>;
}

/// Registry and factory for sessions.
pub trait SessionManager: Send + Sync {
    /// Configure the backing store at `address`.
    ///
    /// Backings that connect to something report failure as
    /// [`SessionError::Connection`](crate::SessionError::Connection).
    fn init(&self, address: &str, options: &[String]) -> Result<()>;

    /// Create and register a new empty session.
    fn create(&self) -> Result<SessionHandle>;

    /// Look up the session registered under `id`.
    ///
    /// Fails with
    /// [`SessionError::SessionNotFound`](crate::SessionError::SessionNotFound)
    /// when no such entry exists.
    fn get(&self, id: &str) -> Result<SessionHandle>;

    /// Number of registered sessions.
    fn count(&self) -> Result<usize>;

    /// Identifiers of all registered sessions, in no particular order.
    fn list_ids(&self) -> Result<Vec<SessionId>>;
}
