//! In-memory task store synchronized with the remote task API.
//!
//! Every operation performs exactly one remote call and, on success, applies
//! one local state transition. The collection lives behind a watch channel
//! and is only ever replaced as a whole value, so readers never observe a
//! half-applied update; subscribers are woken on each replacement.

use chrono::{SecondsFormat, Utc};
use tokio::sync::watch;

use crate::errors::SyncError;

use super::api::TaskApi;
use super::types::{CreateTaskRequest, NewTask, Task};

/// Description stamped on every task created through this store.
pub const CREATED_DESCRIPTION: &str = "created in Task List Front End";

/// Snapshot of the task collection plus a version counter, bumped on every
/// replacement so consumers can invalidate cheaply.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    pub version: u64,
    pub tasks: Vec<Task>,
}

/// The client's authoritative in-memory task collection.
///
/// Tasks are created, replaced and removed only on confirmed remote
/// operations; a failed request leaves the collection exactly as it was.
/// Operations may be in flight concurrently - responses apply in the order
/// they resolve, and `refresh` is a full overwrite, not a merge.
pub struct TaskStore {
    api: TaskApi,
    inner: watch::Sender<TaskList>,
}

impl TaskStore {
    pub fn new(api: TaskApi) -> Self {
        let (inner, _) = watch::channel(TaskList::default());
        Self { api, inner }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(TaskApi::new(base_url))
    }

    /// Snapshot of the current collection, in display order.
    pub fn tasks(&self) -> Vec<Task> {
        self.inner.borrow().tasks.clone()
    }

    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Subscribe to collection replacements. Receivers observe the
    /// versioned snapshot after each successful operation.
    pub fn subscribe(&self) -> watch::Receiver<TaskList> {
        self.inner.subscribe()
    }

    /// Fetches the full collection from the server and overwrites local
    /// state with it. On failure the last known good state is kept.
    pub async fn refresh(&self) -> Result<(), SyncError> {
        let records = self.api.list_tasks().await.map_err(|e| {
            tracing::error!(target: "tasks", "Failed to refresh tasks: {}", e);
            SyncError::Refresh(e)
        })?;

        let tasks: Vec<Task> = records.into_iter().map(Task::from).collect();
        tracing::debug!(target: "tasks", count = tasks.len(), "Replacing local task collection");
        self.replace(tasks);
        Ok(())
    }

    /// Flips the completion state of the task with the given id.
    ///
    /// The target state is the opposite of the value observed at call time,
    /// not at response time; it selects which of the two mark endpoints is
    /// called. An id not present locally is a no-op (`Ok(None)`, no request
    /// issued). On success the matching task is replaced with the server's
    /// returned record and the new completion state is returned.
    pub async fn toggle_complete(&self, id: i64) -> Result<Option<bool>, SyncError> {
        let target = {
            let list = self.inner.borrow();
            match list.tasks.iter().find(|t| t.id == id) {
                Some(task) => !task.is_complete,
                None => {
                    tracing::debug!(target: "tasks", id, "Toggle requested for unknown task, ignoring");
                    return Ok(None);
                }
            }
        };

        let result = if target {
            self.api.mark_complete(id).await
        } else {
            self.api.mark_incomplete(id).await
        };

        let record = result.map_err(|e| {
            tracing::error!(target: "tasks", "Failed to update task {}: {}", id, e);
            SyncError::Update { id, source: e }
        })?;

        let updated = Task::from(record);
        let is_complete = updated.is_complete;

        let tasks: Vec<Task> = {
            let list = self.inner.borrow();
            list.tasks
                .iter()
                .map(|t| if t.id == id { updated.clone() } else { t.clone() })
                .collect()
        };
        self.replace(tasks);

        tracing::info!(target: "tasks", id, is_complete, "Task completion toggled");
        Ok(Some(is_complete))
    }

    /// Deletes the task remotely, then drops every local task with that id.
    /// Removing an id that is no longer present locally leaves the
    /// collection unchanged; it is not a fault.
    pub async fn remove(&self, id: i64) -> Result<(), SyncError> {
        self.api.delete_task(id).await.map_err(|e| {
            tracing::error!(target: "tasks", "Failed to delete task {}: {}", id, e);
            SyncError::Delete { id, source: e }
        })?;

        let tasks: Vec<Task> = {
            let list = self.inner.borrow();
            list.tasks.iter().filter(|t| t.id != id).cloned().collect()
        };
        self.replace(tasks);

        tracing::info!(target: "tasks", id, "Task removed");
        Ok(())
    }

    /// Creates a task remotely and appends the server's returned record to
    /// the end of the collection.
    ///
    /// The caller supplies only title and completion state; the description
    /// carries a fixed provenance marker, and a task created as complete
    /// carries its completion timestamp from the start.
    pub async fn add(&self, draft: NewTask) -> Result<Task, SyncError> {
        let request = CreateTaskRequest {
            title: draft.title,
            description: CREATED_DESCRIPTION.to_string(),
            completed_at: draft.is_complete.then(now_rfc3339),
        };

        let record = self.api.create_task(&request).await.map_err(|e| {
            tracing::error!(target: "tasks", "Failed to create task: {}", e);
            SyncError::Create(e)
        })?;

        let task = Task::from(record);
        let mut tasks = { self.inner.borrow().tasks.clone() };
        tasks.push(task.clone());
        self.replace(tasks);

        tracing::info!(target: "tasks", id = task.id, "Task created");
        Ok(task)
    }

    fn replace(&self, tasks: Vec<Task>) {
        self.inner.send_modify(|list| {
            list.version += 1;
            list.tasks = tasks;
        });
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
