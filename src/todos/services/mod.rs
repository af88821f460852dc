//! Orchestration services for the list/task store.

pub mod store;

pub use store::{TODOS_SNAPSHOT_KEY, TodoStore, TodoStoreError, TodoStoreResult};
