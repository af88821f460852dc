//! Local persisted snapshot storage.
//!
//! Snapshots are opaque byte payloads stored under fixed keys, surviving
//! process restarts. The store and session components write full snapshots
//! through [`SnapshotStore`]; adapters decide where the bytes live.

pub mod fs;
pub mod memory;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot storage operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Key-value byte storage for persisted snapshots.
///
/// Writes are synchronous full overwrites; there is no partial or append
/// persistence.
pub trait SnapshotStore: Send + Sync {
    /// Reads the snapshot stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Storage`] when the underlying storage cannot
    /// be read.
    fn read(&self, key: &str) -> SnapshotResult<Option<Vec<u8>>>;

    /// Overwrites the snapshot stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Storage`] when the underlying storage cannot
    /// be written.
    fn write(&self, key: &str, bytes: &[u8]) -> SnapshotResult<()>;

    /// Removes the snapshot stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Storage`] when the underlying storage cannot
    /// be modified.
    fn remove(&self, key: &str) -> SnapshotResult<()>;
}

/// Errors returned by snapshot storage adapters.
#[derive(Debug, Clone, Error)]
pub enum SnapshotError {
    /// Reading or writing the underlying storage failed.
    #[error("snapshot storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),

    /// Encoding or decoding snapshot bytes failed.
    #[error("snapshot encoding error: {0}")]
    Encoding(Arc<serde_json::Error>),
}

impl SnapshotError {
    /// Wraps a storage-layer failure.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(Arc::new(err))
    }
}
