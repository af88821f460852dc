//! In-memory snapshot store for tests.

use super::{SnapshotError, SnapshotResult, SnapshotStore};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory snapshot store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn read(&self, key: &str) -> SnapshotResult<Option<Vec<u8>>> {
        let entries = self
            .entries
            .read()
            .map_err(|err| SnapshotError::storage(std::io::Error::other(err.to_string())))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> SnapshotResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| SnapshotError::storage(std::io::Error::other(err.to_string())))?;
        entries.insert(key.to_owned(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> SnapshotResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| SnapshotError::storage(std::io::Error::other(err.to_string())))?;
        entries.remove(key);
        Ok(())
    }
}
