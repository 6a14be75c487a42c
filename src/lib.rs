pub mod errors;
pub mod logging;
pub mod settings;
pub mod tasks;

pub use errors::{ApiError, SyncError};
pub use settings::{load_settings, save_settings, AppSettings};
pub use tasks::{init_task_store, NewTask, Task, TaskList, TaskStore};
