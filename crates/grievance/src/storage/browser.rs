//! `localStorage` session store for the web build.

use grievance_core::error::SessionError;
use grievance_core::session::SessionStore;

/// Session values kept in the page's `localStorage`.
pub struct BrowserSessionStore {
    storage: web_sys::Storage,
}

impl BrowserSessionStore {
    pub fn open() -> Result<Self, SessionError> {
        let window = web_sys::window()
            .ok_or_else(|| SessionError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| SessionError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| SessionError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.storage
            .get_item(key)
            .map_err(|e| SessionError::Io(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| SessionError::Io(format!("{:?}", e)))
    }

    fn clear(&self, key: &str) -> Result<(), SessionError> {
        self.storage
            .remove_item(key)
            .map_err(|e| SessionError::Io(format!("{:?}", e)))
    }
}
