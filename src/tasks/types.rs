use serde::{Deserialize, Serialize};

/// A task as the rest of the application sees it.
///
/// Serializes with camelCase field names, the shape UI consumers expect
/// (`isComplete`). The server's snake_case naming never leaves this module;
/// see [`TaskRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub is_complete: bool,
}

/// A task record in the remote API's representation (snake_case field
/// names, completion flag under `is_complete`).
///
/// Every record entering or leaving the store passes through the
/// `TaskRecord` <-> `Task` conversions below, so internal code never
/// observes the wire naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_complete: bool,
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            is_complete: record.is_complete,
        }
    }
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            is_complete: task.is_complete,
        }
    }
}

/// Caller-supplied fields for a new task. `description` is not accepted
/// from callers; the store synthesizes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub is_complete: bool,
}

/// Wrapper the API uses for single-task responses: `{ "task": { ... } }`.
#[derive(Debug, Deserialize)]
pub(crate) struct TaskEnvelope {
    pub task: TaskRecord,
}

/// Body for `POST /tasks`. The completion flag is never sent directly;
/// completion state is expressed through `completed_at` at creation and
/// through the dedicated mark endpoints afterwards.
#[derive(Debug, Serialize)]
pub(crate) struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}
