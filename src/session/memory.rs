//! In-memory session.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::trace;

use super::{Session, SessionId};
use crate::error::SessionError;
use crate::{Result, Value};

/// A session whose contents live in process memory.
///
/// Each instance owns its own lock, so unrelated sessions never contend.
#[derive(Debug)]
pub struct MemorySession {
    id: SessionId,
    data: RwLock<HashMap<String, Value>>,
}

impl MemorySession {
    /// Create an empty session with the given ID.
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> Result<usize> {
        let data = self.data.read().map_err(|_| SessionError::LockPoisoned)?;
        Ok(data.len())
    }

    /// Whether the session holds no keys.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// List the stored keys.
    pub fn keys(&self) -> Result<Vec<String>> {
        let data = self.data.read().map_err(|_| SessionError::LockPoisoned)?;
        Ok(data.keys().cloned().collect())
    }
}

impl Session for MemorySession {
    fn id(&self) -> &SessionId {
        &self.id
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut data = self.data.write().map_err(|_| SessionError::LockPoisoned)?;
        data.insert(key.to_string(), value);
        trace!(session = %self.id, key, "set");
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Value> {
        let data = self.data.read().map_err(|_| SessionError::LockPoisoned)?;
        data.get(key)
            .cloned()
            .ok_or_else(|| SessionError::NotFound(key.to_string()))
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut data = self.data.write().map_err(|_| SessionError::LockPoisoned)?;
        if data.remove(key).is_some() {
            trace!(session = %self.id, key, "deleted");
        }
        Ok(())
    }

    /// Nothing to persist; always succeeds.
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session() -> MemorySession {
        MemorySession::new(SessionId::generate())
    }

    #[test]
    fn test_set_get() {
        let s = session();
        s.set("user", json!("alice")).unwrap();
        assert_eq!(s.get("user").unwrap(), json!("alice"));
    }

    #[test]
    fn test_overwrite() {
        let s = session();
        s.set("count", json!(1)).unwrap();
        s.set("count", json!(2)).unwrap();
        assert_eq!(s.get("count").unwrap(), json!(2));
        assert_eq!(s.len().unwrap(), 1);
    }

    #[test]
    fn test_structured_values() {
        let s = session();
        let cart = json!({"items": [1, 2, 3], "total": 9.5, "paid": false});
        s.set("cart", cart.clone()).unwrap();
        s.set("nothing", Value::Null).unwrap();

        assert_eq!(s.get("cart").unwrap(), cart);
        assert_eq!(s.get("nothing").unwrap(), Value::Null);
    }

    #[test]
    fn test_get_missing() {
        let s = session();
        let err = s.get("ghost").unwrap_err();
        assert!(matches!(err, SessionError::NotFound(ref k) if k == "ghost"));
    }

    #[test]
    fn test_delete_then_get() {
        let s = session();
        s.set("user", json!("alice")).unwrap();
        s.delete("user").unwrap();
        assert!(matches!(s.get("user"), Err(SessionError::NotFound(_))));
    }

    #[test]
    fn test_delete_idempotent() {
        let s = session();
        s.set("keep", json!(true)).unwrap();

        s.delete("absent").unwrap();
        s.delete("absent").unwrap();

        assert_eq!(s.keys().unwrap(), vec!["keep".to_string()]);
        assert_eq!(s.get("keep").unwrap(), json!(true));
    }

    #[test]
    fn test_flush_noop() {
        let s = session();
        s.set("a", json!(1)).unwrap();
        assert!(s.flush().is_ok());
        assert_eq!(s.get("a").unwrap(), json!(1));
    }

    #[test]
    fn test_id_is_stable() {
        let id = SessionId::from("fixed");
        let s = MemorySession::new(id.clone());
        s.set("x", json!(1)).unwrap();
        assert_eq!(s.id(), &id);
    }

    #[test]
    fn test_sessions_do_not_alias() {
        let a = session();
        let b = session();
        a.set("user", json!("alice")).unwrap();

        assert!(b.get("user").is_err());
        assert!(b.is_empty().unwrap());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_poisoned_contents_reported() {
        let s = session();
        s.set("a", json!(1)).unwrap();

        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = s.data.write().unwrap();
            panic!("poison the session");
        }));

        assert!(matches!(s.len(), Err(SessionError::LockPoisoned)));
        assert!(matches!(s.get("a"), Err(SessionError::LockPoisoned)));
        assert!(matches!(s.set("b", json!(2)), Err(SessionError::LockPoisoned)));
    }

    #[test]
    fn test_same_key_last_write_wins() {
        use std::sync::Arc;
        use std::thread;

        let s = Arc::new(session());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let s = Arc::clone(&s);
                thread::spawn(move || {
                    for i in 0..500 {
                        s.set("shared", json!(t * 1000 + i)).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        // The surviving value is the final write of one of the threads
        let last = s.get("shared").unwrap().as_i64().unwrap();
        assert!([499, 1499, 2499, 3499].contains(&last));
    }
}
