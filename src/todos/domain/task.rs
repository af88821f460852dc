//! Task record and remote mutation payloads.

use super::{ListId, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task owned by a list.
///
/// Tasks exist locally only after the remote service has assigned their
/// identifier; provisional tasks travel as [`TaskDraft`] values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Remote-assigned identifier.
    pub id: TaskId,
    /// Trimmed, non-empty title.
    pub title: TaskTitle,
    /// Optional trimmed description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion flag.
    #[serde(default)]
    pub done: bool,
    /// Creation timestamp, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Owning list identifier, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_list_id: Option<ListId>,
}

/// Provisional task sent to the remote create endpoint.
///
/// Drafts carry everything a task needs except the identifier, which only
/// the remote service may assign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    /// Trimmed, non-empty title.
    pub title: TaskTitle,
    /// Optional trimmed description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion flag; drafts always start not done.
    pub done: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Owning list identifier.
    pub task_list_id: ListId,
}

impl TaskDraft {
    /// Promotes the draft into a [`Task`] carrying the remote-assigned `id`.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            done: self.done,
            created_at: Some(self.created_at),
            task_list_id: Some(self.task_list_id),
        }
    }
}

/// Partial update applied to an existing task.
///
/// Absent fields leave the current value untouched. A present description is
/// trimmed, a blank one clearing the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    /// Replacement title, validated by the store before application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement description; blank clears the stored value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement completion flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    /// Owning list identifier; the store forces this to the action's list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_list_id: Option<ListId>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description; blank values clear the stored one.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement completion flag.
    #[must_use]
    pub const fn with_done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }
}
