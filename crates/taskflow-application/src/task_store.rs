//! Task store: single source of truth for the task collection.
//!
//! Every mutation goes through the task gateway; the cache is updated only
//! from the gateway's response, so a failed call leaves the previous state
//! fully intact. Derived views are recomputed from the cache on every read.

use std::sync::Arc;
use taskflow_core::error::{FlowError, Result};
use taskflow_core::task::{RecordQuery, Task, TaskDraft, TaskGateway, TaskId, TaskPatch, TaskStatus};
use taskflow_core::view::{self, LoadStatus, SortOrder, TaskFilter};
use tokio::sync::RwLock;

#[derive(Default)]
struct TaskState {
    tasks: Vec<Task>,
    filter: TaskFilter,
    sort_order: SortOrder,
    status: LoadStatus,
    last_error: Option<String>,
    /// Monotonic tag for load requests; responses from a superseded load
    /// are discarded so last-issued wins, not last-resolved.
    load_generation: u64,
}

/// In-memory cache of the task collection plus its derived view state.
///
/// Constructed explicitly with its gateway and shared via `Arc`; there is
/// no module-level store instance.
pub struct TaskStore {
    gateway: Arc<dyn TaskGateway>,
    state: RwLock<TaskState>,
}

impl TaskStore {
    pub fn new(gateway: Arc<dyn TaskGateway>) -> Self {
        Self {
            gateway,
            state: RwLock::new(TaskState::default()),
        }
    }

    /// Replaces the cached collection with the gateway's current view.
    ///
    /// On failure the previous collection is preserved, the load status
    /// turns `Failed` and the error message is recorded. Calls are not
    /// deduplicated, but a response belonging to a superseded call is
    /// discarded.
    pub async fn load_all(&self) -> Result<()> {
        let generation = {
            let mut state = self.state.write().await;
            state.load_generation += 1;
            state.status = LoadStatus::Loading;
            state.load_generation
        };

        let result = self.gateway.list(&RecordQuery::tasks_default()).await;

        let mut state = self.state.write().await;
        if state.load_generation != generation {
            tracing::debug!(generation, "discarding stale task list response");
            return Ok(());
        }
        match result {
            Ok(tasks) => {
                state.tasks = tasks;
                state.status = LoadStatus::Succeeded;
                state.last_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "loading tasks failed");
                state.status = LoadStatus::Failed;
                state.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Validates the draft and creates the task.
    ///
    /// Validation failures are reported before any gateway call. On success
    /// the server-returned record (with its assigned id and timestamp) is
    /// appended to the cache; on gateway failure the cache is unchanged and
    /// the caller keeps its form state.
    pub async fn create(&self, draft: &TaskDraft) -> Result<Task> {
        let record = draft.validate()?;
        let created = self.gateway.create(&record).await.inspect_err(|e| {
            tracing::warn!(error = %e, "creating task failed");
        })?;
        let mut state = self.state.write().await;
        state.tasks.push(created.clone());
        Ok(created)
    }

    /// Updates the completion status of one cached task.
    ///
    /// The cache absorbs the server's full returned representation, not just
    /// the requested field.
    pub async fn set_status(&self, id: &TaskId, status: TaskStatus) -> Result<Task> {
        {
            let state = self.state.read().await;
            if !state.tasks.iter().any(|t| &t.id == id) {
                return Err(FlowError::not_found("task", id.as_str()));
            }
        }
        let updated = self
            .gateway
            .update(id, &TaskPatch::with_status(status))
            .await
            .inspect_err(|e| {
                tracing::warn!(task_id = %id, error = %e, "updating task status failed");
            })?;
        let mut state = self.state.write().await;
        if let Some(slot) = state.tasks.iter_mut().find(|t| t.id == updated.id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Deletes one cached task. The cache entry is removed only after the
    /// gateway confirms.
    pub async fn remove(&self, id: &TaskId) -> Result<()> {
        {
            let state = self.state.read().await;
            if !state.tasks.iter().any(|t| &t.id == id) {
                return Err(FlowError::not_found("task", id.as_str()));
            }
        }
        self.gateway.delete(id).await.inspect_err(|e| {
            tracing::warn!(task_id = %id, error = %e, "deleting task failed");
        })?;
        let mut state = self.state.write().await;
        state.tasks.retain(|t| &t.id != id);
        Ok(())
    }

    /// Pure view change; never touches the gateway.
    pub async fn set_filter(&self, filter: TaskFilter) {
        self.state.write().await.filter = filter;
    }

    /// Pure view change; never touches the gateway.
    pub async fn set_sort_order(&self, order: SortOrder) {
        self.state.write().await.sort_order = order;
    }

    /// Empties the cache and returns the load status to idle. Used when the
    /// principal signs out.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.tasks.clear();
        state.status = LoadStatus::Idle;
        state.last_error = None;
    }

    /// Filtered and stable-sorted projection of the cache, recomputed on
    /// every call.
    pub async fn filtered_sorted(&self) -> Vec<Task> {
        let state = self.state.read().await;
        view::filtered_sorted(&state.tasks, state.filter, state.sort_order)
    }

    pub async fn tasks(&self) -> Vec<Task> {
        self.state.read().await.tasks.clone()
    }

    pub async fn find(&self, id: &TaskId) -> Option<Task> {
        self.state
            .read()
            .await
            .tasks
            .iter()
            .find(|t| &t.id == id)
            .cloned()
    }

    pub async fn load_status(&self) -> LoadStatus {
        self.state.read().await.status
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error.clone()
    }

    pub async fn filter(&self) -> TaskFilter {
        self.state.read().await.filter
    }

    pub async fn sort_order(&self) -> SortOrder {
        self.state.read().await.sort_order
    }
}
