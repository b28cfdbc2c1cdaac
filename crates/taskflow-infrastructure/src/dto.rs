//! Wire DTOs for the hosted record store.
//!
//! The record store historically reports the creation time under two
//! spellings: the application-owned `created_at` column and the
//! server-assigned `CreatedOn` audit field. Normalization happens here, at
//! the gateway boundary, so the domain model carries exactly one canonical
//! timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskflow_core::error::{FlowError, Result};
use taskflow_core::task::{Priority, Task, TaskId, TaskStatus};

/// A task record as it appears on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(rename = "Id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// Application-owned creation timestamp. Preferred when present.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Server-assigned audit timestamp, used as the fallback.
    #[serde(rename = "CreatedOn", default)]
    pub created_on: Option<DateTime<Utc>>,
}

impl TaskRecord {
    /// Normalizes the wire record into the domain model.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Serialization` when the record carries no usable
    /// identifier or neither timestamp field.
    pub fn into_task(self) -> Result<Task> {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| FlowError::Serialization {
                format: "record".to_string(),
                message: "task record is missing its Id field".to_string(),
            })?;
        let created_at = self
            .created_at
            .or(self.created_on)
            .ok_or_else(|| FlowError::Serialization {
                format: "record".to_string(),
                message: format!("task record '{}' carries no creation timestamp", id),
            })?;
        Ok(Task {
            id: TaskId::new(id),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            status: self.status.unwrap_or(TaskStatus::Active),
            created_at,
        })
    }
}

/// Envelope of a single-record response.
#[derive(Debug, Deserialize)]
pub struct RecordResponse {
    pub data: TaskRecord,
}

/// Envelope of a list response.
#[derive(Debug, Deserialize)]
pub struct RecordListResponse {
    #[serde(default)]
    pub data: Vec<TaskRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> TaskRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_prefers_created_at_over_created_on() {
        let task = record(json!({
            "Id": "rec-1",
            "title": "t",
            "created_at": "2024-03-01T10:00:00Z",
            "CreatedOn": "2024-03-02T10:00:00Z"
        }))
        .into_task()
        .unwrap();
        assert_eq!(task.created_at.to_rfc3339(), "2024-03-01T10:00:00+00:00");
    }

    #[test]
    fn test_falls_back_to_created_on() {
        let task = record(json!({
            "Id": "rec-2",
            "CreatedOn": "2024-03-02T10:00:00Z"
        }))
        .into_task()
        .unwrap();
        assert_eq!(task.created_at.to_rfc3339(), "2024-03-02T10:00:00+00:00");
    }

    #[test]
    fn test_missing_both_timestamps_is_an_error() {
        let err = record(json!({ "Id": "rec-3", "title": "t" }))
            .into_task()
            .unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_missing_id_is_an_error() {
        let err = record(json!({ "title": "t", "created_at": "2024-03-01T10:00:00Z" }))
            .into_task()
            .unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_single_record_envelope_decodes_data_wrapper() {
        let body: RecordResponse = serde_json::from_value(json!({
            "data": {
                "Id": "rec-10",
                "title": "wrapped",
                "created_at": "2024-03-01T10:00:00Z"
            }
        }))
        .unwrap();
        let task = body.data.into_task().unwrap();
        assert_eq!(task.id.as_str(), "rec-10");
        assert_eq!(task.title, "wrapped");
    }

    #[test]
    fn test_list_envelope_decodes_data_wrapper() {
        let body: RecordListResponse = serde_json::from_value(json!({
            "data": [
                { "Id": "rec-11", "created_at": "2024-03-01T10:00:00Z" },
                { "Id": "rec-12", "CreatedOn": "2024-03-02T10:00:00Z" }
            ]
        }))
        .unwrap();
        let tasks: Vec<_> = body
            .data
            .into_iter()
            .map(|record| record.into_task().unwrap())
            .collect();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id.as_str(), "rec-11");
        assert_eq!(tasks[1].id.as_str(), "rec-12");
    }

    #[test]
    fn test_list_envelope_missing_data_defaults_to_empty() {
        let body: RecordListResponse = serde_json::from_value(json!({})).unwrap();
        assert!(body.data.is_empty());
    }

    #[test]
    fn test_lowercase_enums_and_defaults() {
        let task = record(json!({
            "Id": "rec-4",
            "priority": "high",
            "status": "completed",
            "created_at": "2024-03-01T10:00:00Z"
        }))
        .into_task()
        .unwrap();
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.title, "");

        let defaulted = record(json!({
            "Id": "rec-5",
            "created_at": "2024-03-01T10:00:00Z"
        }))
        .into_task()
        .unwrap();
        assert_eq!(defaulted.priority, Priority::Medium);
        assert_eq!(defaulted.status, TaskStatus::Active);
    }
}
