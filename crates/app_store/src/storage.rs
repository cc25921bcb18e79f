//! Snapshot storage port and adapters
//!
//! The store persists through this narrow port so the durable medium is
//! swappable: a JSON file in production, an in-memory fake in tests.
//! Both operations are synchronous; the store never awaits an ack.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use crate::snapshot::StoreSnapshot;

/// Errors from a snapshot storage adapter
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Port for loading and saving the store snapshot
pub trait SnapshotStore {
    /// Loads the snapshot, or `None` when nothing has been saved yet
    fn load(&self) -> Result<Option<StoreSnapshot>, StorageError>;

    /// Saves the snapshot, replacing any previous one
    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StorageError>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for &S {
    fn load(&self) -> Result<Option<StoreSnapshot>, StorageError> {
        (**self).load()
    }

    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StorageError> {
        (**self).save(snapshot)
    }
}

/// File-backed adapter: the whole snapshot as one JSON blob
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<StoreSnapshot>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let snapshot = serde_json::from_str(&contents)?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// In-memory adapter for tests
#[derive(Debug, Default)]
pub struct InMemoryStore {
    cell: Mutex<Option<StoreSnapshot>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the adapter with a snapshot
    pub fn with_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            cell: Mutex::new(Some(snapshot)),
        }
    }

    /// Returns a copy of the currently held snapshot
    pub fn current(&self) -> Option<StoreSnapshot> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<StoreSnapshot>> {
        self.cell.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<Option<StoreSnapshot>, StorageError> {
        Ok(self.lock().clone())
    }

    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StorageError> {
        *self.lock() = Some(snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_starts_empty() {
        let store = InMemoryStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_in_memory_save_then_load() {
        let store = InMemoryStore::new();
        let snapshot = StoreSnapshot::default();

        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), Some(snapshot));
    }
}
