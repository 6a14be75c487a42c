use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Guards that must be kept alive to ensure logs are flushed
pub struct LoggingGuards {
    _guards: Vec<WorkerGuard>,
}

/// Get the logs directory path following XDG Base Directory Specification
pub fn get_log_dir() -> PathBuf {
    if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg_data).join("tasklist").join("logs");
    }

    let home = std::env::var("HOME").expect("HOME environment variable must be set");
    PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("tasklist")
        .join("logs")
}

/// Initialize the logging system with a daily-rolling log file
pub fn init_logging() -> LoggingGuards {
    let log_dir = get_log_dir();

    // Create logs directory if it doesn't exist
    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir).expect("Failed to create logs directory");
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "tasklist.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Build the subscriber with env filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false),
    );

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global tracing subscriber");

    tracing::info!(target: "system", "Logging initialized at {:?}", log_dir);

    LoggingGuards {
        _guards: vec![guard],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_writes_under_xdg_data_home() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_DATA_HOME", dir.path());

        let _guards = init_logging();
        tracing::info!(target: "system", "logging smoke test");

        assert!(dir.path().join("tasklist").join("logs").exists());
        std::env::remove_var("XDG_DATA_HOME");
    }
}
