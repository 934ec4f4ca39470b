//! Platform session stores.
//!
//! - Web: [`BrowserSessionStore`] over `localStorage`
//! - Desktop: [`FileSessionStore`], a JSON file in the platform data directory
//! - Anything else (tests, docs): the core [`InMemorySessionStore`]
//!
//! When the platform store cannot be opened the app falls back to memory so
//! the portal stays usable; the identity then only lasts for the session.

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod native;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserSessionStore;
#[cfg(not(target_arch = "wasm32"))]
pub use native::FileSessionStore;

use dioxus::logger::tracing::warn;
use grievance_core::error::SessionError;
pub use grievance_core::session::InMemorySessionStore;
use grievance_core::session::SessionStore;

/// The store used by the running app.
pub enum PlatformSessionStore {
    #[cfg(target_arch = "wasm32")]
    Browser(BrowserSessionStore),
    #[cfg(not(target_arch = "wasm32"))]
    File(FileSessionStore),
    Memory(InMemorySessionStore),
}

impl PlatformSessionStore {
    /// Opens the persistent store for this platform, or memory if unavailable.
    pub fn open() -> Self {
        #[cfg(target_arch = "wasm32")]
        let opened = BrowserSessionStore::open().map(PlatformSessionStore::Browser);
        #[cfg(not(target_arch = "wasm32"))]
        let opened = FileSessionStore::open_default().map(PlatformSessionStore::File);

        opened.unwrap_or_else(|e| {
            warn!("Session storage unavailable, identity will not persist: {}", e);
            PlatformSessionStore::Memory(InMemorySessionStore::new())
        })
    }

    fn inner(&self) -> &dyn SessionStore {
        match self {
            #[cfg(target_arch = "wasm32")]
            PlatformSessionStore::Browser(store) => store,
            #[cfg(not(target_arch = "wasm32"))]
            PlatformSessionStore::File(store) => store,
            PlatformSessionStore::Memory(store) => store,
        }
    }
}

impl SessionStore for PlatformSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.inner().get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.inner().set(key, value)
    }

    fn clear(&self, key: &str) -> Result<(), SessionError> {
        self.inner().clear(key)
    }
}
