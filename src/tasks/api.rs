use std::time::Duration;

use crate::errors::ApiError;

use super::types::{CreateTaskRequest, TaskEnvelope, TaskRecord};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the remote task API.
///
/// One method per remote operation. Each call checks the response status,
/// reads the body as text and parses from there, so a non-success status
/// keeps its body for diagnostics instead of a bare decode error.
#[derive(Debug, Clone)]
pub struct TaskApi {
    base_url: String,
    client: reqwest::Client,
}

impl TaskApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        let base_url: String = base_url.into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `/tasks` - the full collection as the server currently holds it.
    pub async fn list_tasks(&self) -> Result<Vec<TaskRecord>, ApiError> {
        let response = self
            .client
            .get(format!("{}/tasks", self.base_url))
            .send()
            .await?;

        let body = read_success_body(response).await?;
        let records: Vec<TaskRecord> = serde_json::from_str(&body)?;
        Ok(records)
    }

    /// PATCH `/tasks/{id}/mark_complete`.
    pub async fn mark_complete(&self, id: i64) -> Result<TaskRecord, ApiError> {
        self.mark(id, "mark_complete").await
    }

    /// PATCH `/tasks/{id}/mark_incomplete`.
    pub async fn mark_incomplete(&self, id: i64) -> Result<TaskRecord, ApiError> {
        self.mark(id, "mark_incomplete").await
    }

    async fn mark(&self, id: i64, endpoint: &str) -> Result<TaskRecord, ApiError> {
        let response = self
            .client
            .patch(format!("{}/tasks/{}/{}", self.base_url, id, endpoint))
            .send()
            .await?;

        let body = read_success_body(response).await?;
        let envelope: TaskEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.task)
    }

    /// DELETE `/tasks/{id}`. The response body is ignored.
    pub async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/tasks/{}", self.base_url, id))
            .send()
            .await?;

        read_success_body(response).await?;
        Ok(())
    }

    /// POST `/tasks` with the synthesized creation body.
    pub async fn create_task(&self, request: &CreateTaskRequest) -> Result<TaskRecord, ApiError> {
        let response = self
            .client
            .post(format!("{}/tasks", self.base_url))
            .json(request)
            .send()
            .await?;

        let body = read_success_body(response).await?;
        let envelope: TaskEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.task)
    }
}

async fn read_success_body(response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }

    Ok(response.text().await?)
}
