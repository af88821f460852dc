//! The list/task synchronisation store.
//!
//! The store owns the in-memory mirror of the remote list/task graph and the
//! active-list cursor. Every mutating action validates its input, calls the
//! remote task service, applies the change to the mirror only once the
//! remote call has succeeded, and finishes by writing a full snapshot to
//! local persistence. Actions take `&mut self`, so one store value processes
//! one action at a time; suspension happens only at remote-call boundaries.

use crate::session::ports::SessionProvider;
use crate::storage::{SnapshotError, SnapshotStore};
use crate::todos::domain::{
    ListId, ListName, ListSummary, Task, TaskDraft, TaskId, TaskList, TaskPatch, TaskTitle,
    TodoDomainError,
};
use crate::todos::ports::TaskServiceClient;
use crate::transport::TransportError;
use log::warn;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Storage key of the persisted `{lists, activeListId}` snapshot.
pub const TODOS_SNAPSHOT_KEY: &str = "todos_v1";

/// Service-level errors for store actions.
#[derive(Debug, Clone, Error)]
pub enum TodoStoreError {
    /// Input validation failed; raised before any remote call.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),

    /// No list carries the given identifier.
    #[error("list {0} not found")]
    ListNotFound(ListId),

    /// No task in the addressed list carries the given identifier.
    #[error("task {0} not found")]
    TaskNotFound(TaskId),

    /// The remote call failed; propagated unchanged from the transport.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Writing the local snapshot failed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Result type for store actions.
pub type TodoStoreResult<T> = Result<T, TodoStoreError>;

/// Persisted snapshot wire format.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSnapshot {
    lists: Vec<StoredList>,
    active_list_id: Option<ListId>,
}

/// Persisted list wire format; `taskCount` is derived at write time.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredList {
    id: ListId,
    name: ListName,
    task_count: usize,
    tasks: Vec<Task>,
}

impl From<&TaskList> for StoredList {
    fn from(list: &TaskList) -> Self {
        Self {
            id: list.id().clone(),
            name: list.name().clone(),
            task_count: list.task_count(),
            tasks: list.tasks().to_vec(),
        }
    }
}

/// Builds an empty local list from the remote list representation.
fn list_from_summary(summary: ListSummary) -> Result<TaskList, TodoDomainError> {
    let name = ListName::new(summary.name)?;
    Ok(TaskList::new(summary.id, name))
}

/// The list/task synchronisation store.
pub struct TodoStore<R, P, S, C>
where
    R: TaskServiceClient,
    P: SnapshotStore,
    S: SessionProvider,
    C: Clock + Send + Sync,
{
    remote: Arc<R>,
    snapshots: Arc<P>,
    session: Arc<S>,
    clock: Arc<C>,
    lists: Vec<TaskList>,
    active_list_id: Option<ListId>,
}

impl<R, P, S, C> TodoStore<R, P, S, C>
where
    R: TaskServiceClient,
    P: SnapshotStore,
    S: SessionProvider,
    C: Clock + Send + Sync,
{
    /// Creates a store with empty state.
    #[must_use]
    pub const fn new(remote: Arc<R>, snapshots: Arc<P>, session: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            remote,
            snapshots,
            session,
            clock,
            lists: Vec::new(),
            active_list_id: None,
        }
    }

    /// Returns the list collection in insertion/fetch order.
    #[must_use]
    pub fn lists(&self) -> &[TaskList] {
        &self.lists
    }

    /// Returns the active-list cursor.
    #[must_use]
    pub const fn active_list_id(&self) -> Option<&ListId> {
        self.active_list_id.as_ref()
    }

    /// Loads the initial state for the current session.
    ///
    /// Unauthenticated sessions, and any failure while talking to the
    /// remote service, degrade to the empty state; initialisation never
    /// fails to its caller.
    pub async fn init(&mut self) {
        if !self.session.is_authenticated() {
            self.reset();
            return;
        }
        if let Err(err) = self.load_remote_state().await {
            warn!("initial list fetch failed, starting empty: {err}");
            self.reset();
        }
    }

    /// Fetches the full list set, replaces the mirror wholesale, and loads
    /// the first list's tasks. The fresh snapshot overwrites whatever was
    /// cached before.
    async fn load_remote_state(&mut self) -> TodoStoreResult<()> {
        let summaries = self.remote.fetch_lists().await?;
        self.lists = summaries
            .into_iter()
            .map(list_from_summary)
            .collect::<Result<_, _>>()?;
        self.active_list_id = self.lists.first().map(|list| list.id().clone());
        self.persist()?;
        let first = self.active_list_id.clone();
        self.set_active_list(first).await?;
        Ok(())
    }

    /// Clears the graph and the cursor.
    fn reset(&mut self) {
        self.lists.clear();
        self.active_list_id = None;
    }

    /// Serialises `{lists, activeListId}` and writes the snapshot wholesale
    /// under [`TODOS_SNAPSHOT_KEY`].
    fn persist(&self) -> Result<(), SnapshotError> {
        let snapshot = StoredSnapshot {
            lists: self.lists.iter().map(StoredList::from).collect(),
            active_list_id: self.active_list_id.clone(),
        };
        let bytes = serde_json::to_vec(&snapshot)?;
        self.snapshots.write(TODOS_SNAPSHOT_KEY, &bytes)
    }

    /// Creates a list, makes it active, and returns it.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the trimmed name is empty or already in
    /// use ignoring case, a transport error when the remote create fails, or
    /// a snapshot error when the write-through persist fails.
    pub async fn create_list(&mut self, name: &str) -> TodoStoreResult<TaskList> {
        let validated = ListName::new(name)?;
        if self.lists.iter().any(|list| list.name().matches(&validated)) {
            return Err(TodoDomainError::DuplicateListName(validated.as_str().to_owned()).into());
        }
        let summary = self.remote.create_list(validated.as_str()).await?;
        let list = list_from_summary(summary)?;
        self.active_list_id = Some(list.id().clone());
        self.lists.push(list.clone());
        self.persist()?;
        Ok(list)
    }

    /// Renames the list with the given identifier and returns it.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the trimmed name is empty or collides
    /// with another list's name, [`TodoStoreError::ListNotFound`] when the
    /// identifier has no local list, or a transport error when the remote
    /// update fails.
    pub async fn rename_list(&mut self, id: &ListId, new_name: &str) -> TodoStoreResult<TaskList> {
        let validated = ListName::new(new_name)?;
        if self
            .lists
            .iter()
            .any(|list| list.id() != id && list.name().matches(&validated))
        {
            return Err(TodoDomainError::DuplicateListName(validated.as_str().to_owned()).into());
        }
        self.remote.update_list(id, validated.as_str()).await?;
        let list = self
            .lists
            .iter_mut()
            .find(|list| list.id() == id)
            .ok_or_else(|| TodoStoreError::ListNotFound(id.clone()))?;
        list.rename(validated);
        let renamed = list.clone();
        self.persist()?;
        Ok(renamed)
    }

    /// Deletes the list with the given identifier.
    ///
    /// When the deleted list was active, the cursor falls back to the first
    /// remaining list, or to none.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::ListNotFound`] when the identifier has no
    /// local list, or a transport error when the remote delete fails.
    pub async fn delete_list(&mut self, id: &ListId) -> TodoStoreResult<()> {
        self.remote.delete_list(id).await?;
        let index = self
            .lists
            .iter()
            .position(|list| list.id() == id)
            .ok_or_else(|| TodoStoreError::ListNotFound(id.clone()))?;
        self.lists.remove(index);
        if self.active_list_id.as_ref() == Some(id) {
            self.active_list_id = self.lists.first().map(|list| list.id().clone());
        }
        self.persist()?;
        Ok(())
    }

    /// Makes the given list active and loads its tasks from the remote
    /// service, replacing the local task collection wholesale in server
    /// order. Passing `None` is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::ListNotFound`] when the identifier has no
    /// local list, or a transport error when the task fetch fails.
    pub async fn set_active_list(&mut self, id: Option<ListId>) -> TodoStoreResult<()> {
        let Some(list_id) = id else {
            return Ok(());
        };
        let index = self
            .lists
            .iter()
            .position(|list| list.id() == &list_id)
            .ok_or_else(|| TodoStoreError::ListNotFound(list_id.clone()))?;
        let tasks = self.remote.fetch_tasks(&list_id).await?;
        if let Some(list) = self.lists.get_mut(index) {
            list.replace_tasks(tasks);
        }
        self.active_list_id = Some(list_id);
        self.persist()?;
        Ok(())
    }

    /// Adds a task to the given list and returns it with its
    /// remote-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the trimmed title is empty or collides
    /// with a sibling's title ignoring case,
    /// [`TodoStoreError::ListNotFound`] when the list is unknown, or a
    /// transport error when the remote create fails.
    pub async fn add_task(
        &mut self,
        list_id: &ListId,
        title: &str,
        description: Option<&str>,
    ) -> TodoStoreResult<Task> {
        let validated = TaskTitle::new(title)?;
        let index = self
            .lists
            .iter()
            .position(|list| list.id() == list_id)
            .ok_or_else(|| TodoStoreError::ListNotFound(list_id.clone()))?;
        let taken = self
            .lists
            .get(index)
            .is_some_and(|list| list.title_taken(&validated, None));
        if taken {
            return Err(TodoDomainError::DuplicateTaskTitle(validated.as_str().to_owned()).into());
        }
        let draft = TaskDraft {
            title: validated,
            description: description
                .map(str::trim)
                .filter(|trimmed| !trimmed.is_empty())
                .map(str::to_owned),
            done: false,
            created_at: self.clock.utc(),
            task_list_id: list_id.clone(),
        };
        let created = self.remote.create_task(&draft).await?;
        let task = draft.into_task(created.id);
        if let Some(list) = self.lists.get_mut(index) {
            list.push_task(task.clone())?;
        }
        self.persist()?;
        Ok(task)
    }

    /// Applies a partial update to a task and returns the updated task.
    ///
    /// The patch's owning list is forced to `list_id`. A title update is
    /// trimmed, must be non-empty, and must not collide with another task's
    /// title in the same list ignoring case; all validation runs before the
    /// remote call. A present description is trimmed, blank clearing the
    /// stored value.
    ///
    /// # Errors
    ///
    /// Returns a domain error when title validation fails,
    /// [`TodoStoreError::ListNotFound`]/[`TodoStoreError::TaskNotFound`]
    /// when either identifier is unknown, or a transport error when the
    /// remote update fails.
    pub async fn edit_task(
        &mut self,
        list_id: &ListId,
        task_id: &TaskId,
        mut patch: TaskPatch,
    ) -> TodoStoreResult<Task> {
        patch.task_list_id = Some(list_id.clone());
        let index = self
            .lists
            .iter()
            .position(|list| list.id() == list_id)
            .ok_or_else(|| TodoStoreError::ListNotFound(list_id.clone()))?;
        let new_title = patch.title.as_deref().map(TaskTitle::new).transpose()?;
        if let Some(list) = self.lists.get(index) {
            if list.task(task_id).is_none() {
                return Err(TodoStoreError::TaskNotFound(task_id.clone()));
            }
            if let Some(title) = &new_title {
                if list.title_taken(title, Some(task_id)) {
                    return Err(
                        TodoDomainError::DuplicateTaskTitle(title.as_str().to_owned()).into(),
                    );
                }
            }
        }
        self.remote.update_task(task_id, &patch).await?;
        let task = self
            .lists
            .get_mut(index)
            .and_then(|list| list.task_mut(task_id))
            .ok_or_else(|| TodoStoreError::TaskNotFound(task_id.clone()))?;
        if let Some(title) = new_title {
            task.title = title;
        }
        if let Some(description) = patch.description.as_deref() {
            let trimmed = description.trim();
            task.description = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            };
        }
        if let Some(done) = patch.done {
            task.done = done;
        }
        let updated = task.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Deletes a task from the given list.
    ///
    /// The remote delete runs first; stale local identifiers therefore
    /// surface as not-found errors after the remote call has already
    /// succeeded, leaving local state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::ListNotFound`]/[`TodoStoreError::TaskNotFound`]
    /// when either identifier is unknown locally, or a transport error when
    /// the remote delete fails.
    pub async fn delete_task(&mut self, list_id: &ListId, task_id: &TaskId) -> TodoStoreResult<()> {
        self.remote.delete_task(task_id).await?;
        let list = self
            .lists
            .iter_mut()
            .find(|list| list.id() == list_id)
            .ok_or_else(|| TodoStoreError::ListNotFound(list_id.clone()))?;
        list.remove_task(task_id)
            .ok_or_else(|| TodoStoreError::TaskNotFound(task_id.clone()))?;
        self.persist()?;
        Ok(())
    }

    /// Flips a task's completion flag and returns the new state.
    ///
    /// The remote toggle is awaited before the local flip is committed, so
    /// a transport failure leaves the mirror untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::ListNotFound`]/[`TodoStoreError::TaskNotFound`]
    /// when either identifier is unknown, or a transport error when the
    /// remote toggle fails.
    pub async fn toggle_task_done(
        &mut self,
        list_id: &ListId,
        task_id: &TaskId,
    ) -> TodoStoreResult<bool> {
        let next = {
            let list = self
                .lists
                .iter()
                .find(|list| list.id() == list_id)
                .ok_or_else(|| TodoStoreError::ListNotFound(list_id.clone()))?;
            let task = list
                .task(task_id)
                .ok_or_else(|| TodoStoreError::TaskNotFound(task_id.clone()))?;
            !task.done
        };
        self.remote.toggle_task(task_id, next).await?;
        let task = self
            .lists
            .iter_mut()
            .find(|list| list.id() == list_id)
            .and_then(|list| list.task_mut(task_id))
            .ok_or_else(|| TodoStoreError::TaskNotFound(task_id.clone()))?;
        task.done = next;
        self.persist()?;
        Ok(next)
    }
}
