//! HTTP client for the hosted record store.
//!
//! Talks to a canvas-scoped REST surface:
//!
//! ```text
//! POST   {base}/canvas/{canvas_id}/tables/{table}/query        list
//! POST   {base}/canvas/{canvas_id}/tables/{table}/records      create
//! PATCH  {base}/canvas/{canvas_id}/tables/{table}/records/{id} update
//! DELETE {base}/canvas/{canvas_id}/tables/{table}/records/{id} delete
//! ```

use crate::dto::{RecordListResponse, RecordResponse, TaskRecord};
use async_trait::async_trait;
use taskflow_core::error::{FlowError, Result};
use taskflow_core::task::{NewTaskRecord, RecordQuery, Task, TaskGateway, TaskId, TaskPatch};

/// Logical table holding task records.
pub const TASK_TABLE: &str = "task2";

/// Record-store gateway backed by the hosted HTTP API.
#[derive(Debug)]
pub struct HttpTaskGateway {
    client: reqwest::Client,
    base_url: String,
    canvas_id: String,
}

impl HttpTaskGateway {
    /// Creates a gateway for one canvas.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::GatewayUnavailable` when the base URL or canvas
    /// id is empty, or the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, canvas_id: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let canvas_id = canvas_id.into();
        if base_url.is_empty() {
            return Err(FlowError::gateway_unavailable(
                "record store base URL is not configured",
            ));
        }
        if canvas_id.is_empty() {
            return Err(FlowError::gateway_unavailable("canvas id is not configured"));
        }
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| FlowError::gateway_unavailable(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            canvas_id,
        })
    }

    fn table_url(&self, suffix: &str) -> String {
        format!(
            "{}/canvas/{}/tables/{}{}",
            self.base_url, self.canvas_id, TASK_TABLE, suffix
        )
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = %status, "record store rejected the request");
        Err(FlowError::service(format!(
            "record store returned {}: {}",
            status, body
        )))
    }

    fn transport(err: reqwest::Error) -> FlowError {
        FlowError::service(format!("record store request failed: {}", err))
    }
}

#[async_trait]
impl TaskGateway for HttpTaskGateway {
    async fn list(&self, query: &RecordQuery) -> Result<Vec<Task>> {
        let response = self
            .client
            .post(self.table_url("/query"))
            .json(query)
            .send()
            .await
            .map_err(Self::transport)?;
        let body: RecordListResponse = Self::ensure_success(response)
            .await?
            .json()
            .await
            .map_err(Self::transport)?;
        body.data.into_iter().map(TaskRecord::into_task).collect()
    }

    async fn create(&self, record: &NewTaskRecord) -> Result<Task> {
        let response = self
            .client
            .post(self.table_url("/records"))
            .json(record)
            .send()
            .await
            .map_err(Self::transport)?;
        let body: RecordResponse = Self::ensure_success(response)
            .await?
            .json()
            .await
            .map_err(Self::transport)?;
        body.data.into_task()
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<Task> {
        let response = self
            .client
            .patch(self.table_url(&format!("/records/{}", id)))
            .json(patch)
            .send()
            .await
            .map_err(Self::transport)?;
        let body: RecordResponse = Self::ensure_success(response)
            .await?
            .json()
            .await
            .map_err(Self::transport)?;
        body.data.into_task()
    }

    async fn delete(&self, id: &TaskId) -> Result<()> {
        let response = self
            .client
            .delete(self.table_url(&format!("/records/{}", id)))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
