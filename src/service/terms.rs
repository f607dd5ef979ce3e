//! Terms-acceptance state
//!
//! A single boolean persisted in a JSON state file. The flag gates every
//! submission path; it is passed explicitly to the services that need it
//! rather than read from ambient global state.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for terms-state persistence
#[derive(Debug, Error)]
pub enum TermsError {
    #[error("Failed to persist terms state: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode terms state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// On-disk shape of the terms state file
#[derive(Debug, Default, Serialize, Deserialize)]
struct TermsState {
    #[serde(default)]
    terms_accepted: bool,
}

/// File-backed terms-acceptance flag
///
/// A missing or unreadable state file means not-accepted; accepting writes
/// the file immediately.
pub struct TermsStore {
    path: PathBuf,
    accepted: RwLock<bool>,
}

impl TermsStore {
    /// Open the store, reading any previously persisted state
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let accepted = Self::load(&path);
        Self {
            path,
            accepted: RwLock::new(accepted),
        }
    }

    fn load(path: &Path) -> bool {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Terms state file not found, defaulting to not accepted");
            return false;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<TermsState>(&contents) {
                Ok(state) => state.terms_accepted,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to parse terms state, defaulting to not accepted");
                    false
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read terms state, defaulting to not accepted");
                false
            }
        }
    }

    /// Whether the terms have been accepted
    pub fn is_accepted(&self) -> bool {
        *self.accepted.read().expect("terms lock poisoned")
    }

    /// Set the flag and persist it immediately
    pub fn set_accepted(&self, accepted: bool) -> Result<(), TermsError> {
        let encoded = serde_json::to_string_pretty(&TermsState {
            terms_accepted: accepted,
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, encoded)?;

        *self.accepted.write().expect("terms lock poisoned") = accepted;

        tracing::info!(accepted = accepted, path = %self.path.display(), "Terms state updated");
        Ok(())
    }

    /// Whether the state file location is usable for persistence
    pub fn is_writable(&self) -> bool {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        parent.exists() || fs::create_dir_all(&parent).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_means_not_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let store = TermsStore::open(dir.path().join("terms.json"));
        assert!(!store.is_accepted());
    }

    #[test]
    fn test_accept_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terms.json");

        let store = TermsStore::open(&path);
        store.set_accepted(true).unwrap();
        assert!(store.is_accepted());

        let reopened = TermsStore::open(&path);
        assert!(reopened.is_accepted());
    }

    #[test]
    fn test_revoke_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terms.json");

        let store = TermsStore::open(&path);
        store.set_accepted(true).unwrap();
        store.set_accepted(false).unwrap();

        let reopened = TermsStore::open(&path);
        assert!(!reopened.is_accepted());
    }

    #[test]
    fn test_corrupt_file_means_not_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terms.json");
        fs::write(&path, "{not json").unwrap();

        let store = TermsStore::open(&path);
        assert!(!store.is_accepted());
    }

    #[test]
    fn test_missing_parent_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("terms.json");

        let store = TermsStore::open(&path);
        store.set_accepted(true).unwrap();

        assert!(path.exists());
    }
}
