//! Session identifier type.

use std::borrow::Borrow;
use std::fmt;

use uuid::Uuid;

/// Opaque unique identifier for a session.
///
/// Generated IDs are random (v4) UUIDs in hyphenated form. The value is a
/// lookup key only: nothing in the crate parses it or derives meaning
/// from its structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh identifier.
    ///
    /// Draws from the OS random source; no shared state is touched, so
    /// concurrent callers never contend.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SessionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_uniqueness() {
        let mut ids = HashSet::new();
        for _ in 0..10_000 {
            let id = SessionId::generate();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {}", id);
        }
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_display_format() {
        let id = SessionId::generate();
        let s = id.to_string();
        assert_eq!(s.len(), 36);
        assert_eq!(s.matches('-').count(), 4);
        assert_eq!(s, id.as_str());
    }

    #[test]
    fn test_opaque_roundtrip() {
        let id = SessionId::from("anything-goes");
        assert_eq!(id.as_str(), "anything-goes");
        assert_eq!(id.clone().into_string(), "anything-goes");
        assert_eq!(SessionId::from(String::from("anything-goes")), id);
    }

    #[test]
    fn test_borrow_lookup() {
        let id = SessionId::generate();
        let mut map = HashMap::new();
        map.insert(id.clone(), 1);

        // Lookup with a plain &str, no allocation
        assert_eq!(map.get(id.as_str()), Some(&1));
        assert!(map.get("not-a-real-id").is_none());
    }

    #[test]
    fn test_concurrent_generation() {
        use std::thread;

        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| (0..1_000).map(|_| SessionId::generate()).collect::<Vec<_>>()))
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(all.insert(id));
            }
        }
        assert_eq!(all.len(), 8_000);
    }
}
