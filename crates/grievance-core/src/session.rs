//! Session identity storage.
//!
//! The portal persists one value, the signed-in email under
//! [`SESSION_KEY`], so the student views can filter to the user's own
//! submissions across reloads. Storage is small and synchronous on every
//! platform, so the trait is too.
//!
//! # Implementations
//!
//! - [`InMemorySessionStore`] - tests, and fallback when browser storage is blocked
//! - `BrowserSessionStore` - `localStorage` (in app crate, web)
//! - `FileSessionStore` - JSON file in the platform data dir (in app crate, desktop)

use std::collections::HashMap;
use std::sync::Mutex;

use crate::config::SESSION_KEY;
use crate::error::SessionError;

/// String key-value storage for session state.
pub trait SessionStore {
    #[must_use = "Session read failures should be handled"]
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    #[must_use = "Session write failures should be handled"]
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    #[must_use = "Session clear failures should be handled"]
    fn clear(&self, key: &str) -> Result<(), SessionError>;

    /// The stored identity, `None` when absent or empty.
    fn identity(&self) -> Result<Option<String>, SessionError> {
        Ok(self.get(SESSION_KEY)?.filter(|v| !v.is_empty()))
    }

    fn set_identity(&self, email: &str) -> Result<(), SessionError> {
        self.set(SESSION_KEY, email)
    }
}

/// Non-persistent store.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with an identity (tests).
    pub fn with_identity(email: &str) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(SESSION_KEY.to_string(), email.to_string());
        store
    }

    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.values().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), SessionError> {
        self.values().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_roundtrip() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.identity().unwrap(), None);

        store.set_identity("s@x.com").unwrap();
        assert_eq!(store.identity().unwrap().as_deref(), Some("s@x.com"));
        assert_eq!(store.get("userEmail").unwrap().as_deref(), Some("s@x.com"));

        store.clear(SESSION_KEY).unwrap();
        assert_eq!(store.identity().unwrap(), None);
    }

    #[test]
    fn test_empty_identity_reads_as_none() {
        let store = InMemorySessionStore::with_identity("");
        assert_eq!(store.identity().unwrap(), None);
    }
}
