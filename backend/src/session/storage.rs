use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key/value store in the manner of browser local storage.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Storage persisted as one JSON object; every write rewrites the file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens the file, starting empty when it is missing or unreadable as JSON.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!("Ignoring malformed storage file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get("role"), None);
        storage.set("role", "owner").unwrap();
        storage.set("currency", "eur").unwrap();

        let mut reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get("role").as_deref(), Some("owner"));
        reopened.remove("role").unwrap();

        let again = FileStorage::open(&path).unwrap();
        assert_eq!(again.get("role"), None);
        assert_eq!(again.get("currency").as_deref(), Some("eur"));
    }

    #[test]
    fn malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get("role"), None);
    }

    #[test]
    fn memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("v"));
        storage.remove("k").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k"), None);
    }
}
