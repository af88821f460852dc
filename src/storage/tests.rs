//! Snapshot storage adapter tests.

use super::fs::DirSnapshotStore;
use super::memory::InMemorySnapshotStore;
use super::SnapshotStore;
use rstest::rstest;

#[rstest]
fn memory_store_round_trips_bytes() {
    let store = InMemorySnapshotStore::new();
    store
        .write("todos_v1", b"payload")
        .expect("write should succeed");

    let read = store.read("todos_v1").expect("read should succeed");
    assert_eq!(read.as_deref(), Some(b"payload".as_slice()));
}

#[rstest]
fn memory_store_remove_clears_entry() {
    let store = InMemorySnapshotStore::new();
    store.write("user_v1", b"session").expect("write");
    store.remove("user_v1").expect("remove");

    assert_eq!(store.read("user_v1").expect("read"), None);
}

#[rstest]
fn memory_store_read_missing_returns_none() {
    let store = InMemorySnapshotStore::new();
    assert_eq!(store.read("absent").expect("read"), None);
}

#[rstest]
fn dir_store_persists_across_reopen() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().to_string_lossy().into_owned();

    {
        let store = DirSnapshotStore::open(&path).expect("open");
        store.write("todos_v1", b"{\"lists\":[]}").expect("write");
    }

    let reopened = DirSnapshotStore::open(&path).expect("reopen");
    let read = reopened.read("todos_v1").expect("read");
    assert_eq!(read.as_deref(), Some(b"{\"lists\":[]}".as_slice()));
}

#[rstest]
fn dir_store_missing_key_and_remove_are_quiet() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().to_string_lossy().into_owned();
    let store = DirSnapshotStore::open(&path).expect("open");

    assert_eq!(store.read("absent").expect("read"), None);
    store.remove("absent").expect("remove should be a no-op");
}
