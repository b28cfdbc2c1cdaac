//! In-memory record table.
//!
//! Stands in for the hosted record store in tests and offline development.
//! Assigns uuid-v4 identifiers and server-side creation timestamps the way
//! the real store does, counts gateway calls so tests can assert that a
//! rejected intent issued no call at all, and supports failure injection.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use taskflow_core::error::{FlowError, Result};
use taskflow_core::task::{
    Direction, NewTaskRecord, RecordQuery, Task, TaskGateway, TaskId, TaskPatch,
};
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory task gateway.
#[derive(Default)]
pub struct MemoryTaskGateway {
    records: RwLock<Vec<Task>>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryTaskGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the table pre-populated, bypassing create (and its counters).
    pub async fn with_tasks(tasks: Vec<Task>) -> Self {
        let gateway = Self::new();
        *gateway.records.write().await = tasks;
        gateway
    }

    /// Total number of gateway calls issued so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// When set, every operation fails with a Service error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn record_call(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(FlowError::service("injected gateway failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl TaskGateway for MemoryTaskGateway {
    async fn list(&self, query: &RecordQuery) -> Result<Vec<Task>> {
        self.record_call()?;
        let records = self.records.read().await;
        let mut tasks: Vec<Task> = records.clone();
        if let Some(order) = query.order_by.first() {
            match order.direction {
                Direction::Asc => tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
                Direction::Desc => tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            }
        }
        let offset = query.paging.offset as usize;
        let limit = query.paging.limit as usize;
        Ok(tasks.into_iter().skip(offset).take(limit).collect())
    }

    async fn create(&self, record: &NewTaskRecord) -> Result<Task> {
        self.record_call()?;
        let task = Task {
            id: TaskId::new(Uuid::new_v4().to_string()),
            title: record.title.clone(),
            description: record.description.clone(),
            priority: record.priority,
            status: record.status,
            created_at: Utc::now(),
        };
        self.records.write().await.push(task.clone());
        Ok(task)
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<Task> {
        self.record_call()?;
        let mut records = self.records.write().await;
        let task = records
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| FlowError::not_found("task", id.as_str()))?;
        if let Some(title) = &patch.title {
            task.title = title.clone();
        }
        if let Some(description) = &patch.description {
            task.description = description.clone();
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        Ok(task.clone())
    }

    async fn delete(&self, id: &TaskId) -> Result<()> {
        self.record_call()?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|t| &t.id != id);
        if records.len() == before {
            return Err(FlowError::not_found("task", id.as_str()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskflow_core::task::{Priority, TaskDraft, TaskStatus};

    fn record(title: &str) -> NewTaskRecord {
        TaskDraft::new(title, "", Priority::Medium).validate().unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamp() {
        let gateway = MemoryTaskGateway::new();
        let task = gateway.create(&record("one")).await.unwrap();
        assert!(!task.id.as_str().is_empty());
        assert_eq!(task.status, TaskStatus::Active);
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_list_honors_order_and_paging() {
        let gateway = MemoryTaskGateway::new();
        for title in ["a", "b", "c"] {
            gateway.create(&record(title)).await.unwrap();
        }
        let listed = gateway.list(&RecordQuery::tasks_default()).await.unwrap();
        assert_eq!(listed.len(), 3);
        // default query orders newest first
        assert!(listed.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        let mut one = RecordQuery::tasks_default();
        one.paging.limit = 1;
        one.paging.offset = 1;
        assert_eq!(gateway.list(&one).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_with_tasks_seeds_without_counting_calls() {
        use chrono::{TimeZone, Utc};
        use taskflow_core::task::{Priority, TaskStatus};

        let seeded = |id: &str, minute: u32| Task {
            id: TaskId::new(id),
            title: id.to_string(),
            description: String::new(),
            priority: Priority::Medium,
            status: TaskStatus::Active,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, minute, 0).unwrap(),
        };
        let gateway =
            MemoryTaskGateway::with_tasks(vec![seeded("b", 2), seeded("a", 1), seeded("c", 3)])
                .await;
        assert_eq!(gateway.call_count(), 0);

        let mut query = RecordQuery::tasks_default();
        query.order_by[0].direction = Direction::Asc;
        query.paging.limit = 2;
        let listed = gateway.list(&query).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id.as_str(), "a");
        assert_eq!(listed[1].id.as_str(), "b");
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_update_applies_patch_and_returns_full_record() {
        let gateway = MemoryTaskGateway::new();
        let task = gateway.create(&record("toggle me")).await.unwrap();
        let updated = gateway
            .update(&task.id, &TaskPatch::with_status(TaskStatus::Completed))
            .await
            .unwrap();
        assert_eq!(updated.status, TaskStatus::Completed);
        assert_eq!(updated.title, "toggle me");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let gateway = MemoryTaskGateway::new();
        let err = gateway
            .update(
                &TaskId::new("missing"),
                &TaskPatch::with_status(TaskStatus::Completed),
            )
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let gateway = MemoryTaskGateway::new();
        let task = gateway.create(&record("bye")).await.unwrap();
        gateway.delete(&task.id).await.unwrap();
        let listed = gateway.list(&RecordQuery::tasks_default()).await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let gateway = MemoryTaskGateway::new();
        gateway.set_failing(true);
        let err = gateway.create(&record("nope")).await.unwrap_err();
        assert!(err.is_service());
        assert_eq!(gateway.call_count(), 1);
    }
}
