//! Task domain model.
//!
//! This module contains the core task entities and value objects, plus the
//! local validation that every create request passes before any gateway call.

use crate::error::{FlowError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum accepted title length, in characters.
pub const TITLE_MAX: usize = 100;

/// Maximum accepted description length, in characters.
pub const DESCRIPTION_MAX: usize = 500;

/// Opaque, store-assigned task identifier. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents the completion state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// The task is still open.
    Active,
    /// The task has been completed by the user.
    Completed,
}

impl TaskStatus {
    /// Returns the opposite status, used by the completion toggle intent.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Completed,
            Self::Completed => Self::Active,
        }
    }
}

/// User-assigned priority of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    /// Default for a fresh draft.
    #[default]
    Medium,
    High,
}

/// A user-created to-do item, as cached by the task store.
///
/// `created_at` is assigned by the record store at creation and is the single
/// canonical timestamp; gateway implementations normalize whatever the wire
/// format carries into this one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

/// Uncommitted form state for a new task.
///
/// Owned by the presentation layer until `validate` passes; the task store
/// never caches a draft.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl TaskDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority,
        }
    }

    /// Validates the draft and produces the record to send to the gateway.
    ///
    /// Fail-fast: violations are reported here, before any network call is
    /// issued. The title is trimmed; the trimmed form is what gets stored.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Validation` when the trimmed title is empty or
    /// longer than [`TITLE_MAX`], or the description is longer than
    /// [`DESCRIPTION_MAX`].
    pub fn validate(&self) -> Result<NewTaskRecord> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FlowError::validation("title", "Title is required"));
        }
        if title.chars().count() > TITLE_MAX {
            return Err(FlowError::validation(
                "title",
                format!("Title must be at most {} characters", TITLE_MAX),
            ));
        }
        if self.description.chars().count() > DESCRIPTION_MAX {
            return Err(FlowError::validation(
                "description",
                format!("Description must be at most {} characters", DESCRIPTION_MAX),
            ));
        }
        Ok(NewTaskRecord {
            title: title.to_string(),
            description: self.description.clone(),
            priority: self.priority,
            status: TaskStatus::Active,
        })
    }
}

/// A validated create request.
///
/// Carries no identifier and no timestamp; both are assigned by the record
/// store. New tasks always start out `Active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTaskRecord {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
}

/// Partial update for a single task record.
///
/// Only the populated fields are sent; the gateway responds with the full
/// updated representation so the cache can absorb server-side changes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    /// Patch that changes only the completion status.
    pub fn with_status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
