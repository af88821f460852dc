//! End-to-end store scenarios through the public API, driven by the
//! in-memory adapters.

use std::sync::Arc;

use eyre::OptionExt;
use listkeeper::session::adapters::memory::StaticSessionProvider;
use listkeeper::storage::memory::InMemorySnapshotStore;
use listkeeper::todos::adapters::memory::InMemoryTaskService;
use listkeeper::todos::domain::{Task, TaskId, TaskPatch, TaskTitle};
use listkeeper::todos::services::TodoStore;
use mockable::DefaultClock;

type FlowStore =
    TodoStore<InMemoryTaskService, InMemorySnapshotStore, StaticSessionProvider, DefaultClock>;

fn signed_in_store(remote: Arc<InMemoryTaskService>) -> FlowStore {
    TodoStore::new(
        remote,
        Arc::new(InMemorySnapshotStore::new()),
        Arc::new(StaticSessionProvider::signed_in("token")),
        Arc::new(DefaultClock),
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn work_list_edit_flow() -> eyre::Result<()> {
    let mut store = signed_in_store(Arc::new(InMemoryTaskService::new()));

    let list = store.create_list("Work").await?;
    let list_id = list.id().clone();
    let task = store.add_task(&list_id, "Buy milk", None).await?;

    let updated = store
        .edit_task(
            &list_id,
            &task.id,
            TaskPatch::new().with_title("Buy eggs").with_done(true),
        )
        .await?;

    assert_eq!(updated.title.as_str(), "Buy eggs");
    assert!(updated.done);
    let owner = store.lists().first().ok_or_eyre("list vanished")?;
    assert_eq!(owner.tasks().len(), 1);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn temp_list_delete_flow() -> eyre::Result<()> {
    let mut store = signed_in_store(Arc::new(InMemoryTaskService::new()));

    let list = store.create_list("Temp").await?;
    let list_id = list.id().clone();
    let task = store.add_task(&list_id, "A", None).await?;

    store.delete_task(&list_id, &task.id).await?;

    let owner = store.lists().first().ok_or_eyre("list vanished")?;
    assert_eq!(owner.tasks().len(), 0);
    assert_eq!(owner.task_count(), 0);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn unauthenticated_init_starts_empty() {
    let remote = Arc::new(InMemoryTaskService::new());
    remote.seed_list("Invisible", Vec::new());
    let mut store = TodoStore::new(
        remote,
        Arc::new(InMemorySnapshotStore::new()),
        Arc::new(StaticSessionProvider::signed_out()),
        Arc::new(DefaultClock),
    );

    store.init().await;

    assert!(store.lists().is_empty());
    assert_eq!(store.active_list_id(), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn switching_the_active_list_loads_server_order() -> eyre::Result<()> {
    let remote = Arc::new(InMemoryTaskService::new());
    remote.seed_list("First", Vec::new());
    let second = remote.seed_list(
        "Second",
        vec![
            Task {
                id: TaskId::new("b"),
                title: TaskTitle::new("Bravo")?,
                description: None,
                done: true,
                created_at: None,
                task_list_id: None,
            },
            Task {
                id: TaskId::new("a"),
                title: TaskTitle::new("Alpha")?,
                description: None,
                done: false,
                created_at: None,
                task_list_id: None,
            },
        ],
    );
    let mut store = signed_in_store(Arc::clone(&remote));
    store.init().await;

    store.set_active_list(Some(second.clone())).await?;

    assert_eq!(store.active_list_id(), Some(&second));
    let active = store
        .lists()
        .iter()
        .find(|list| list.id() == &second)
        .ok_or_eyre("second list missing")?;
    let ids: Vec<&str> = active.tasks().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    Ok(())
}
