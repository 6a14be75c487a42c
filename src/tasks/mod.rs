pub mod api;
pub mod store;
pub mod types;

pub use api::TaskApi;
pub use store::{TaskList, TaskStore, CREATED_DESCRIPTION};
pub use types::{NewTask, Task, TaskRecord};

use crate::settings::AppSettings;

/// Build a store wired to the configured API base URL.
pub fn init_task_store(settings: &AppSettings) -> TaskStore {
    let store = TaskStore::with_base_url(&settings.api_base_url);
    tracing::info!(
        target: "tasks",
        base_url = %settings.api_base_url,
        "Task store initialized"
    );
    store
}
