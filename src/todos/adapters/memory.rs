//! In-memory fake of the remote task service for store tests.

use crate::todos::domain::{ListId, ListSummary, Task, TaskDraft, TaskId, TaskPatch, TaskTitle};
use crate::todos::ports::TaskServiceClient;
use crate::transport::{TransportError, TransportResult};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Thread-safe in-memory fake of the remote task service.
///
/// Created resources receive freshly minted UUID identifiers, mirroring the
/// remote service's id assignment. Tests can seed lists and tasks directly
/// to model state the store has not observed yet.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskService {
    state: Arc<RwLock<RemoteState>>,
}

#[derive(Debug, Default)]
struct RemoteState {
    lists: Vec<RemoteList>,
}

#[derive(Debug)]
struct RemoteList {
    summary: ListSummary,
    tasks: Vec<Task>,
}

/// Maps a poisoned-lock failure onto the transport error space.
fn lock_failure(err: impl std::fmt::Display) -> TransportError {
    TransportError::network(std::io::Error::other(err.to_string()))
}

/// Builds the 404 failure the remote service answers with for unknown
/// identifiers.
fn not_found(message: String) -> TransportError {
    TransportError::Status {
        status: 404,
        message,
    }
}

impl InMemoryTaskService {
    /// Creates an empty fake service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a list with the given name and tasks, returning its
    /// identifier. Seeded tasks are stamped with the owning list.
    pub fn seed_list(&self, name: &str, tasks: Vec<Task>) -> ListId {
        let id = ListId::new(Uuid::new_v4().to_string());
        if let Ok(mut state) = self.state.write() {
            let task_count = u64::try_from(tasks.len()).unwrap_or(u64::MAX);
            let seeded = tasks
                .into_iter()
                .map(|task| Task {
                    task_list_id: Some(id.clone()),
                    ..task
                })
                .collect();
            state.lists.push(RemoteList {
                summary: ListSummary {
                    id: id.clone(),
                    name: name.to_owned(),
                    task_count,
                },
                tasks: seeded,
            });
        }
        id
    }

    /// Seeds a task into an existing list, returning its identifier.
    pub fn seed_task(&self, list_id: &ListId, task: Task) -> TaskId {
        let id = task.id.clone();
        if let Ok(mut state) = self.state.write() {
            if let Some(list) = state
                .lists
                .iter_mut()
                .find(|list| list.summary.id == *list_id)
            {
                list.tasks.push(Task {
                    task_list_id: Some(list_id.clone()),
                    ..task
                });
            }
        }
        id
    }
}

#[async_trait]
impl TaskServiceClient for InMemoryTaskService {
    async fn fetch_lists(&self) -> TransportResult<Vec<ListSummary>> {
        let state = self.state.read().map_err(lock_failure)?;
        Ok(state.lists.iter().map(|list| list.summary.clone()).collect())
    }

    async fn create_list(&self, name: &str) -> TransportResult<ListSummary> {
        let mut state = self.state.write().map_err(lock_failure)?;
        let summary = ListSummary {
            id: ListId::new(Uuid::new_v4().to_string()),
            name: name.to_owned(),
            task_count: 0,
        };
        state.lists.push(RemoteList {
            summary: summary.clone(),
            tasks: Vec::new(),
        });
        Ok(summary)
    }

    async fn update_list(&self, id: &ListId, name: &str) -> TransportResult<ListSummary> {
        let mut state = self.state.write().map_err(lock_failure)?;
        let list = state
            .lists
            .iter_mut()
            .find(|list| list.summary.id == *id)
            .ok_or_else(|| not_found(format!("task list {id} not found")))?;
        list.summary.name = name.to_owned();
        Ok(list.summary.clone())
    }

    async fn delete_list(&self, id: &ListId) -> TransportResult<()> {
        let mut state = self.state.write().map_err(lock_failure)?;
        let index = state
            .lists
            .iter()
            .position(|list| list.summary.id == *id)
            .ok_or_else(|| not_found(format!("task list {id} not found")))?;
        state.lists.remove(index);
        Ok(())
    }

    async fn fetch_tasks(&self, list_id: &ListId) -> TransportResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_failure)?;
        let list = state
            .lists
            .iter()
            .find(|list| list.summary.id == *list_id)
            .ok_or_else(|| not_found(format!("task list {list_id} not found")))?;
        Ok(list.tasks.clone())
    }

    async fn create_task(&self, draft: &TaskDraft) -> TransportResult<Task> {
        let mut state = self.state.write().map_err(lock_failure)?;
        let list = state
            .lists
            .iter_mut()
            .find(|list| list.summary.id == draft.task_list_id)
            .ok_or_else(|| not_found(format!("task list {} not found", draft.task_list_id)))?;
        let task = draft
            .clone()
            .into_task(TaskId::new(Uuid::new_v4().to_string()));
        list.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> TransportResult<Task> {
        let mut state = self.state.write().map_err(lock_failure)?;
        let task = state
            .lists
            .iter_mut()
            .flat_map(|list| list.tasks.iter_mut())
            .find(|task| task.id == *id)
            .ok_or_else(|| not_found(format!("task {id} not found")))?;
        if let Some(title) = patch.title.as_deref() {
            if let Ok(validated) = TaskTitle::new(title) {
                task.title = validated;
            }
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
        Ok(task.clone())
    }

    async fn delete_task(&self, id: &TaskId) -> TransportResult<()> {
        let mut state = self.state.write().map_err(lock_failure)?;
        for list in &mut state.lists {
            if let Some(index) = list.tasks.iter().position(|task| task.id == *id) {
                list.tasks.remove(index);
                return Ok(());
            }
        }
        Err(not_found(format!("task {id} not found")))
    }

    async fn toggle_task(&self, id: &TaskId, done: bool) -> TransportResult<()> {
        let mut state = self.state.write().map_err(lock_failure)?;
        let task = state
            .lists
            .iter_mut()
            .flat_map(|list| list.tasks.iter_mut())
            .find(|task| task.id == *id)
            .ok_or_else(|| not_found(format!("task {id} not found")))?;
        task.done = done;
        Ok(())
    }
}
