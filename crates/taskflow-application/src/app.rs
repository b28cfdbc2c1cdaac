//! Application facade and cross-store gating.
//!
//! `TaskFlowApp` owns the two stores and is the single entry point for
//! presentation intents. Every task mutation intent re-checks the
//! authenticated status; when the principal is absent the intent never
//! reaches the task store's gateway-calling operations and the caller
//! receives `FlowError::AuthRequired`, its cue to present the login entry
//! point.

use crate::auth_store::AuthStore;
use crate::task_store::TaskStore;
use std::sync::Arc;
use taskflow_core::auth::{AuthGateway, Identity};
use taskflow_core::error::{FlowError, Result};
use taskflow_core::task::{Task, TaskDraft, TaskGateway, TaskId, TaskStatus};

/// Explicitly constructed application root; no module-level state.
pub struct TaskFlowApp {
    auth: Arc<AuthStore>,
    tasks: Arc<TaskStore>,
}

impl TaskFlowApp {
    pub fn new(auth_gateway: Arc<dyn AuthGateway>, task_gateway: Arc<dyn TaskGateway>) -> Self {
        Self {
            auth: Arc::new(AuthStore::new(auth_gateway)),
            tasks: Arc::new(TaskStore::new(task_gateway)),
        }
    }

    pub fn auth(&self) -> &Arc<AuthStore> {
        &self.auth
    }

    pub fn tasks(&self) -> &Arc<TaskStore> {
        &self.tasks
    }

    /// One-time startup step: restores the persisted session before
    /// interactive login is offered.
    pub async fn start(&self) -> Option<Identity> {
        self.auth.restore_session().await
    }

    pub async fn login(&self) -> Result<Identity> {
        self.auth.login().await
    }

    /// Signs out and drops the per-principal task cache with the session.
    pub async fn logout(&self) {
        self.auth.logout().await;
        self.tasks.clear().await;
    }

    /// Re-evaluated on every intent, never cached.
    async fn require_auth(&self) -> Result<()> {
        if self.auth.is_authenticated().await {
            Ok(())
        } else {
            Err(FlowError::AuthRequired)
        }
    }

    pub async fn load_tasks(&self) -> Result<()> {
        self.require_auth().await?;
        self.tasks.load_all().await
    }

    pub async fn add_task(&self, draft: &TaskDraft) -> Result<Task> {
        self.require_auth().await?;
        self.tasks.create(draft).await
    }

    pub async fn set_task_status(&self, id: &TaskId, status: TaskStatus) -> Result<Task> {
        self.require_auth().await?;
        self.tasks.set_status(id, status).await
    }

    /// Flips the cached completion status of one task.
    pub async fn toggle_task(&self, id: &TaskId) -> Result<Task> {
        self.require_auth().await?;
        let current = self
            .tasks
            .find(id)
            .await
            .ok_or_else(|| FlowError::not_found("task", id.as_str()))?;
        self.tasks.set_status(id, current.status.toggled()).await
    }

    pub async fn remove_task(&self, id: &TaskId) -> Result<()> {
        self.require_auth().await?;
        self.tasks.remove(id).await
    }
}
