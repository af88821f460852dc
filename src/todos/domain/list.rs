//! Task list aggregate and remote list representation.

use super::{ListId, ListName, Task, TaskId, TaskTitle, TodoDomainError};
use serde::{Deserialize, Serialize};

/// A task list and its owned tasks.
///
/// The aggregate enforces task-level invariants: task identifiers and titles
/// are unique within one list, and the task count is always derived from the
/// owned collection, so it cannot drift from the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    id: ListId,
    name: ListName,
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty list from a remote-assigned identifier and name.
    #[must_use]
    pub const fn new(id: ListId, name: ListName) -> Self {
        Self {
            id,
            name,
            tasks: Vec::new(),
        }
    }

    /// Returns the list identifier.
    #[must_use]
    pub const fn id(&self) -> &ListId {
        &self.id
    }

    /// Returns the list name.
    #[must_use]
    pub const fn name(&self) -> &ListName {
        &self.name
    }

    /// Replaces the list name.
    pub fn rename(&mut self, name: ListName) {
        self.name = name;
    }

    /// Returns the owned tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of owned tasks.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == *id)
    }

    /// Returns a mutable reference to the task with the given identifier.
    pub fn task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == *id)
    }

    /// Reports whether `title` collides with an owned task's title, ignoring
    /// case. `exclude` skips the task being edited.
    #[must_use]
    pub fn title_taken(&self, title: &TaskTitle, exclude: Option<&TaskId>) -> bool {
        self.tasks
            .iter()
            .filter(|task| exclude.is_none_or(|id| task.id != *id))
            .any(|task| task.title.matches(title))
    }

    /// Appends a task.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::DuplicateTaskId`] when a task with the
    /// same identifier is already present, or
    /// [`TodoDomainError::DuplicateTaskTitle`] when another task carries the
    /// same title ignoring case.
    pub fn push_task(&mut self, task: Task) -> Result<(), TodoDomainError> {
        if self.task(&task.id).is_some() {
            return Err(TodoDomainError::DuplicateTaskId(task.id));
        }
        if self.title_taken(&task.title, None) {
            return Err(TodoDomainError::DuplicateTaskTitle(
                task.title.as_str().to_owned(),
            ));
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Removes and returns the task with the given identifier.
    pub fn remove_task(&mut self, id: &TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == *id)?;
        Some(self.tasks.remove(index))
    }

    /// Replaces the owned tasks wholesale, keeping the given order.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }
}

/// Remote representation of a task list, as returned by the list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSummary {
    /// Remote-assigned identifier.
    pub id: ListId,
    /// List name as stored remotely.
    pub name: String,
    /// Task count as reported by the remote service; informational only,
    /// the local count is derived from the owned tasks.
    #[serde(default)]
    pub task_count: u64,
}
