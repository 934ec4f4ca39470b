// Native session store for desktop
//
// Uses the platform-idiomatic data directory:
// - macOS: ~/Library/Application Support/edu.campus.Grievance/
// - Linux: ~/.local/share/grievance/
// - Windows: C:\Users\<user>\AppData\Roaming\campus\Grievance\

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use grievance_core::error::SessionError;
use grievance_core::session::SessionStore;

const SESSION_FILE: &str = "session.json";

/// Session values persisted as a flat JSON object.
///
/// The file is read on every access and rewritten on every change; it holds
/// a single short entry.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Opens the store in the platform data directory.
    #[cfg(feature = "desktop")]
    pub fn open_default() -> Result<Self, SessionError> {
        use directories::ProjectDirs;

        let project_dirs = ProjectDirs::from("edu", "campus", "Grievance").ok_or_else(|| {
            SessionError::Unavailable("Failed to determine data directory".to_string())
        })?;
        Self::in_dir(project_dirs.data_dir())
    }

    #[cfg(not(feature = "desktop"))]
    pub fn open_default() -> Result<Self, SessionError> {
        Err(SessionError::Unavailable(
            "no data directory outside the desktop build".to_string(),
        ))
    }

    /// Opens the store in `dir`, creating it if needed.
    pub fn in_dir(dir: &Path) -> Result<Self, SessionError> {
        std::fs::create_dir_all(dir)
            .map_err(|e| SessionError::Io(format!("Failed to create directory: {}", e)))?;
        Ok(Self {
            path: dir.join(SESSION_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>, SessionError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| SessionError::Serialization(e.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(SessionError::Io(e.to_string())),
        }
    }

    fn write(&self, values: &BTreeMap<String, String>) -> Result<(), SessionError> {
        let raw = serde_json::to_string_pretty(values)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|e| SessionError::Io(e.to_string()))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.read()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut values = self.read()?;
        values.insert(key.to_string(), value.to_string());
        self.write(&values)
    }

    fn clear(&self, key: &str) -> Result<(), SessionError> {
        let mut values = self.read()?;
        if values.remove(key).is_some() {
            self.write(&values)?;
        }
        Ok(())
    }
}
