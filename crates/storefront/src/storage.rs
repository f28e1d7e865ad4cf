//! Durable local state.
//!
//! Two string-keyed JSON snapshots under the data directory stand in for
//! the browser's local storage: one for the cart and one for the identity.
//! Absence or corruption of either is "empty", never a hard error - the
//! stores fall back to their default state and the condition is logged.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Namespace key of the persisted cart snapshot.
pub const CART_KEY: &str = "hvrdcr-market-cart";

/// Namespace key of the persisted identity snapshot.
pub const IDENTITY_KEY: &str = "hvrdcr-market-user";

#[derive(Debug, Error)]
enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// String-keyed JSON snapshot files under one directory.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// A store rooted at `dir`. The directory is created lazily on the
    /// first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Load and deserialize the snapshot under `key`.
    ///
    /// A missing file, an unreadable file, or invalid JSON all yield
    /// `None`; read failures are logged at warn and swallowed.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path(key);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read persisted snapshot");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "persisted snapshot is corrupt, starting empty");
                None
            }
        }
    }

    /// Serialize `value` and write it under `key`.
    ///
    /// Write failures are logged at warn and swallowed; the in-memory state
    /// is already updated by the time this runs and stays authoritative for
    /// the session.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(err) = self.write(&self.path(key), value) {
            tracing::warn!(key, error = %err, "failed to persist snapshot");
        }
    }

    fn write<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_vec(value)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Delete the snapshot under `key`. A missing file is fine.
    pub fn remove(&self, key: &str) {
        if let Err(err) = std::fs::remove_file(self.path(key))
            && err.kind() != ErrorKind::NotFound
        {
            tracing::warn!(key, error = %err, "failed to remove persisted snapshot");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());

        store.save("some-key", &vec!["a".to_owned(), "b".to_owned()]);
        let loaded: Option<Vec<String>> = store.load("some-key");
        assert_eq!(loaded, Some(vec!["a".to_owned(), "b".to_owned()]));
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        let loaded: Option<Vec<String>> = store.load("nothing-here");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_corrupt_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        std::fs::write(dir.path().join("bad.json"), b"{not json").unwrap();

        let loaded: Option<Vec<String>> = store.load("bad");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_schema_mismatch_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        store.save("key", &42_u32);

        let loaded: Option<Vec<String>> = store.load("key");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_remove_then_load_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        store.save("key", &1_u32);
        store.remove("key");
        assert_eq!(store.load::<u32>("key"), None);

        // Removing twice is fine.
        store.remove("key");
    }
}
