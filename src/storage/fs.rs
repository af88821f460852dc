//! Directory-backed snapshot store.
//!
//! Persists each snapshot as one file inside a capability-scoped directory,
//! so the adapter can only ever touch the directory it was opened with.

use super::{SnapshotError, SnapshotResult, SnapshotStore};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

/// Snapshot store writing one `<key>.json` file per key.
#[derive(Debug)]
pub struct DirSnapshotStore {
    dir: Dir,
}

impl DirSnapshotStore {
    /// Opens `path` as the snapshot directory, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Storage`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &str) -> SnapshotResult<Self> {
        std::fs::create_dir_all(path).map_err(SnapshotError::storage)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(SnapshotError::storage)?;
        Ok(Self { dir })
    }

    fn file_name(key: &str) -> String {
        format!("{key}.json")
    }
}

impl SnapshotStore for DirSnapshotStore {
    fn read(&self, key: &str) -> SnapshotResult<Option<Vec<u8>>> {
        match self.dir.read(Self::file_name(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SnapshotError::storage(err)),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> SnapshotResult<()> {
        self.dir
            .write(Self::file_name(key), bytes)
            .map_err(SnapshotError::storage)
    }

    fn remove(&self, key: &str) -> SnapshotResult<()> {
        match self.dir.remove_file(Self::file_name(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SnapshotError::storage(err)),
        }
    }
}
