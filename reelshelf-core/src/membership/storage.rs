//! Durable key/value storage behind the membership store.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use directories::ProjectDirs;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Unable to determine data directory")]
    NoDataDir,

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous string storage addressed by fixed keys.
pub trait StoragePort {
    /// `Ok(None)` when nothing was stored under `key` yet.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// One JSON file per key under a data directory.
///
/// Writes land in a temporary file in the same directory and are renamed
/// over the target, so a reader sees either the old or the new list.
#[derive(Debug, Clone)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at the platform data directory.
    pub fn new() -> Result<Self, StorageError> {
        let proj_dirs = ProjectDirs::from("", "reelshelf", "reelshelf")
            .ok_or(StorageError::NoDataDir)?;
        Ok(Self::with_data_dir(proj_dirs.data_dir()))
    }

    /// Storage rooted at an explicit directory (tests, `--data-dir`).
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl StoragePort for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.data_dir)?;
        let path = self.path_for(key);

        let mut tmp = NamedTempFile::new_in(&self.data_dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|err| err.error)?;

        debug!(path = %path.display(), bytes = value.len(), "Persisted list");
        Ok(())
    }
}

/// In-process storage for tests and ephemeral sessions.
///
/// Clones share the same map, so a test can keep a handle and inspect what
/// the store wrote. `fail_writes` makes every subsequent write fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with raw contents, bypassing failure injection.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        self
    }

    pub fn fail_writes(&self, fail: bool) {
        if let Ok(mut flag) = self.fail_writes.lock() {
            *flag = fail;
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn lock_error(what: &str) -> StorageError {
        StorageError::Unavailable(format!("{what} lock poisoned"))
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries =
            self.entries.lock().map_err(|_| Self::lock_error("entries"))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let failing =
            *self.fail_writes.lock().map_err(|_| Self::lock_error("flag"))?;
        if failing {
            return Err(StorageError::Unavailable(format!(
                "write to {key} rejected"
            )));
        }

        let mut entries =
            self.entries.lock().map_err(|_| Self::lock_error("entries"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: StoragePort + ?Sized> StoragePort for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_storage_round_trips_and_reports_missing_keys() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::with_data_dir(dir.path().join("nested"));

        assert!(storage.read("reelshelf.favorites").unwrap().is_none());

        storage.write("reelshelf.favorites", "[]").unwrap();
        assert_eq!(
            storage.read("reelshelf.favorites").unwrap().as_deref(),
            Some("[]")
        );
        assert!(dir.path().join("nested/reelshelf.favorites.json").exists());
    }

    #[test]
    fn file_storage_overwrites_in_place() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::with_data_dir(dir.path());

        storage.write("k", "first").unwrap();
        storage.write("k", "second").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("second"));

        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1, "temporary files must not linger");
    }

    #[test]
    fn memory_storage_failure_injection() {
        let storage = MemoryStorage::new();
        storage.write("k", "v").unwrap();

        storage.fail_writes(true);
        assert!(storage.write("k", "w").is_err());
        assert_eq!(storage.get("k").as_deref(), Some("v"));

        storage.fail_writes(false);
        storage.write("k", "w").unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("w"));
    }
}
