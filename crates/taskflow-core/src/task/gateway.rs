//! Task gateway trait.
//!
//! Defines the contract against the remote record store, decoupling the task
//! store from the concrete transport (hosted HTTP API, in-memory table for
//! tests and offline development).

use super::model::{NewTaskRecord, Task, TaskId, TaskPatch};
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Paging window for a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub limit: u32,
    pub offset: u32,
}

/// Sort direction understood by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

/// One ordering criterion of a list query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

/// A table-scoped list query: requested fields, paging window and ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordQuery {
    pub fields: Vec<String>,
    pub paging: Paging,
    #[serde(rename = "orderBy")]
    pub order_by: Vec<OrderBy>,
}

impl RecordQuery {
    /// The query the task store issues on every load: all task fields,
    /// first page of 100, newest first.
    pub fn tasks_default() -> Self {
        Self {
            fields: [
                "Id",
                "title",
                "description",
                "priority",
                "status",
                "created_at",
                "CreatedOn",
            ]
            .iter()
            .map(|f| f.to_string())
            .collect(),
            paging: Paging {
                limit: 100,
                offset: 0,
            },
            order_by: vec![OrderBy {
                field: "CreatedOn".to_string(),
                direction: Direction::Desc,
            }],
        }
    }
}

/// An abstract gateway to the remote task table.
///
/// Every operation resolves with exactly one terminal outcome; callers never
/// retry automatically. Implementations are responsible for normalizing the
/// wire representation (including the creation-timestamp field) into [`Task`].
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Lists task records for the current principal.
    async fn list(&self, query: &RecordQuery) -> Result<Vec<Task>>;

    /// Creates a record. The store assigns the identifier and the creation
    /// timestamp; the returned task carries both.
    async fn create(&self, record: &NewTaskRecord) -> Result<Task>;

    /// Applies a partial update and returns the full updated representation.
    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<Task>;

    /// Deletes a record. Succeeds silently; failures are reported as errors.
    async fn delete(&self, id: &TaskId) -> Result<()>;
}
