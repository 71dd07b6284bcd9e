//! On-disk persistence of the session between CLI invocations.

use crate::models::Session;
use crate::utils::write_private;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    saved_at: DateTime<Utc>,
    session: Session,
}

/// Reads and writes `session.json`.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session.
    ///
    /// A missing file means "logged out". A corrupt file is logged and treated
    /// the same way so a bad write never locks the user out of `login`.
    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session file: {:?}", self.path))?;
        match serde_json::from_str::<StoredSession>(&content) {
            Ok(stored) => {
                debug!("Loaded session saved at {}", stored.saved_at);
                Ok(Some(stored.session))
            }
            Err(e) => {
                warn!("Ignoring unreadable session file {:?}: {}", self.path, e);
                Ok(None)
            }
        }
    }

    /// Persist `session`, or remove the file when there is none.
    pub fn save(&self, session: Option<&Session>) -> Result<()> {
        match session {
            Some(session) => {
                let stored = StoredSession {
                    saved_at: Utc::now(),
                    session: session.clone(),
                };
                let content = serde_json::to_string_pretty(&stored)
                    .context("Failed to serialize session")?;
                write_private(&self.path, &content)
            }
            None => self.clear(),
        }
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove session file: {:?}", self.path))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn session() -> Session {
        Session {
            user_id: 3,
            display_name: "Carla".to_string(),
            email: "carla@lava.test".to_string(),
            token: "token-123456789".to_string(),
            profile_photo: None,
        }
    }

    #[test]
    fn test_missing_file_is_logged_out() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path().join("session.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_load_clear() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path().join("nested").join("session.json"));

        store.save(Some(&session())).unwrap();
        assert_eq!(store.load().unwrap(), Some(session()));

        store.save(None).unwrap();
        assert!(!store.path().exists());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = SessionStore::new(&path);
        assert_eq!(store.load().unwrap(), None);
    }
}
