//! Key-value store trait and backends, with automatic serialization.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::StorageError;

/// A durable key-value slot.
///
/// Implementations store raw bytes; the provided `get`/`set` methods add
/// JSON serialization for any type that implements `Serialize` and
/// `DeserializeOwned`.
pub trait KvStore {
    /// Get the raw bytes stored under a key, or `None` if absent.
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Store raw bytes under a key, replacing any previous value.
    fn set_raw(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Delete a key. Deleting an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), StorageError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get_raw(key)?.is_some())
    }

    /// Get a value and deserialize it from JSON.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get_raw(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Serialize a value to JSON and store it.
    fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(value)?;
        self.set_raw(key, &bytes)
    }
}

/// In-memory store. State dies with the value; used for tests and
/// ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.entries.contains_key(key))
    }
}

/// File-backed store: one `<key>.json` file per key under a data
/// directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at the given directory, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .map_err(|e| StorageError::Open(format!("{}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    /// The directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for JsonFileStore {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match std::fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_raw(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        std::fs::write(self.path_for(key), value)?;
        debug!(key, bytes = value.len(), "wrote key-value slot");
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.path_for(key).exists())
    }
}
