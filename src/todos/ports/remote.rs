//! Remote task service port.
//!
//! The store orchestrates every mutation through this contract and never
//! constructs transport machinery itself; adapters decide how requests reach
//! the remote service and how the bearer credential travels with them.

use crate::todos::domain::{ListId, ListSummary, Task, TaskDraft, TaskId, TaskPatch};
use crate::transport::TransportResult;
use async_trait::async_trait;

/// Request/response contract for list and task CRUD.
#[async_trait]
pub trait TaskServiceClient: Send + Sync {
    /// Fetches every list visible to the current session.
    async fn fetch_lists(&self) -> TransportResult<Vec<ListSummary>>;

    /// Creates a list and returns its remote representation.
    async fn create_list(&self, name: &str) -> TransportResult<ListSummary>;

    /// Renames the list with the given identifier.
    async fn update_list(&self, id: &ListId, name: &str) -> TransportResult<ListSummary>;

    /// Deletes the list with the given identifier.
    async fn delete_list(&self, id: &ListId) -> TransportResult<()>;

    /// Fetches the tasks owned by the given list, in server order.
    async fn fetch_tasks(&self, list_id: &ListId) -> TransportResult<Vec<Task>>;

    /// Creates a task from a provisional draft, returning it with its
    /// remote-assigned identifier.
    async fn create_task(&self, draft: &TaskDraft) -> TransportResult<Task>;

    /// Applies a partial update to the task with the given identifier.
    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> TransportResult<Task>;

    /// Deletes the task with the given identifier.
    async fn delete_task(&self, id: &TaskId) -> TransportResult<()>;

    /// Sets the completion flag of the task with the given identifier.
    async fn toggle_task(&self, id: &TaskId, done: bool) -> TransportResult<()>;
}
