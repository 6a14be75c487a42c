use thiserror::Error;

/// Errors from a single call to the remote task API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fault raised when a store operation could not be synchronized with the
/// remote API. Local state is left exactly as it was whenever one of these
/// is returned.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Failed to refresh tasks")]
    Refresh(#[source] ApiError),

    #[error("Failed to update task {id}")]
    Update {
        id: i64,
        #[source]
        source: ApiError,
    },

    #[error("Failed to delete task {id}")]
    Delete {
        id: i64,
        #[source]
        source: ApiError,
    },

    #[error("Failed to create task")]
    Create(#[source] ApiError),
}
