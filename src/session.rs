//! Persisted user session.
//!
//! A small TOML file in the platform data dir records whether someone is
//! logged in, who, and their preferred list layout. It is read once at
//! startup into a [`SessionContext`] that screens receive explicitly;
//! nothing reads session state ambiently.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::LayoutMode;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read session file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write session file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Snapshot of the persisted session, handed to the app at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub email: String,
    /// Layout the user last chose, if any.
    #[serde(default)]
    pub preferred_layout: Option<LayoutMode>,
}

/// Reads and writes the session file.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Default location: `<data dir>/stockpile/session.toml`.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("stockpile").join("session.toml")
    }

    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session; a missing file means "not logged in".
    pub fn load(&self) -> Result<SessionContext, SessionError> {
        if !self.path.exists() {
            return Ok(SessionContext::default());
        }
        let content = fs::read_to_string(&self.path).map_err(|source| SessionError::Read {
            path: self.path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SessionError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, session: &SessionContext) -> Result<(), SessionError> {
        let write_err = |source| SessionError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        let content = toml::to_string_pretty(session).unwrap_or_default();
        fs::write(&self.path, content).map_err(write_err)
    }

    /// Forget the session entirely (logout).
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::Write {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.toml"));
        let session = store.load().unwrap();
        assert!(!session.logged_in);
        assert!(session.email.is_empty());
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("session.toml"));
        let session = SessionContext {
            logged_in: true,
            email: "ops@example.com".to_string(),
            preferred_layout: Some(LayoutMode::Grid),
        };
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), session);
    }

    #[test]
    fn clear_removes_the_file_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.toml"));
        store.save(&SessionContext::default()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
    }
}
