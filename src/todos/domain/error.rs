//! Error types for list/task domain validation.

use super::TaskId;
use thiserror::Error;

/// Errors returned while validating list and task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The list name is empty after trimming.
    #[error("list name must not be empty")]
    EmptyListName,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// Another list already carries the same name, ignoring case.
    #[error("a list named '{0}' already exists")]
    DuplicateListName(String),

    /// Another task in the same list already carries the same title,
    /// ignoring case.
    #[error("another task titled '{0}' already exists in this list")]
    DuplicateTaskTitle(String),

    /// A task with the same identifier is already present in the list.
    #[error("duplicate task identifier: {0}")]
    DuplicateTaskId(TaskId),
}
