//! Session registry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use super::{MemorySession, SessionHandle, SessionId, SessionManager};
use crate::error::SessionError;
use crate::Result;

/// Thread-safe in-memory registry of sessions.
///
/// The registry lock guards only the ID-to-session map and is released
/// before a handle is returned, so work on one session never blocks
/// creation or lookup of another.
#[derive(Debug, Default)]
pub struct MemorySessionManager {
    sessions: RwLock<HashMap<SessionId, Arc<MemorySession>>>,
}

impl MemorySessionManager {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session, returning the concrete type.
    pub fn create_memory(&self) -> Result<Arc<MemorySession>> {
        let id = SessionId::generate();
        let session = Arc::new(MemorySession::new(id.clone()));

        {
            let mut sessions = self
                .sessions
                .write()
                .map_err(|_| SessionError::LockPoisoned)?;
            sessions.insert(id.clone(), Arc::clone(&session));
        }

        debug!(session = %id, "session created");
        Ok(session)
    }

    /// Look up a session, returning the concrete type.
    pub fn get_memory(&self, id: &str) -> Result<Arc<MemorySession>> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| SessionError::LockPoisoned)?;
        sessions
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::SessionNotFound(id.to_string()))
    }

    /// Check if a session exists.
    pub fn contains(&self, id: &str) -> Result<bool> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| SessionError::LockPoisoned)?;
        Ok(sessions.contains_key(id))
    }
}

impl SessionManager for MemorySessionManager {
    /// Nothing to connect to; the address and options are only logged.
    fn init(&self, address: &str, options: &[String]) -> Result<()> {
        info!(address, options = ?options, "in-memory session store ready");
        Ok(())
    }

    fn create(&self) -> Result<SessionHandle> {
        let session: SessionHandle = self.create_memory()?;
        Ok(session)
    }

    fn get(&self, id: &str) -> Result<SessionHandle> {
        let session: SessionHandle = self.get_memory(id)?;
        Ok(session)
    }

    fn count(&self) -> Result<usize> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| SessionError::LockPoisoned)?;
        Ok(sessions.len())
    }

    fn list_ids(&self) -> Result<Vec<SessionId>> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| SessionError::LockPoisoned)?;
        Ok(sessions.keys().cloned().collect())
    }
}
