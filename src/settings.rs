use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the configured API base URL.
const API_URL_ENV: &str = "TASKLIST_API_URL";

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub api_base_url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Get the storage directory path following XDG Base Directory Specification
fn get_storage_dir() -> PathBuf {
    if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg_data).join("tasklist");
    }

    let home = std::env::var("HOME").expect("HOME environment variable must be set");
    PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("tasklist")
}

/// Get the path to the settings file
fn get_settings_path() -> PathBuf {
    get_storage_dir().join("settings.json")
}

/// Load settings. The environment override wins over the settings file;
/// a missing or invalid file degrades to defaults.
pub fn load_settings() -> AppSettings {
    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            return AppSettings { api_base_url: url };
        }
    }

    let path = get_settings_path();

    if !path.exists() {
        eprintln!("[TASKLIST] Settings file not found, using defaults");
        return AppSettings::default();
    }

    match load_settings_from_file(&path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("[TASKLIST] Failed to load settings: {}, using defaults", e);
            AppSettings::default()
        }
    }
}

/// Internal function to load settings from a specific path
fn load_settings_from_file(path: &Path) -> Result<AppSettings, SettingsError> {
    let contents = std::fs::read_to_string(path)?;
    let settings = serde_json::from_str(&contents)?;
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), SettingsError> {
    let storage_dir = get_storage_dir();

    if !storage_dir.exists() {
        std::fs::create_dir_all(&storage_dir)?;
    }

    let path = get_settings_path();
    let contents = serde_json::to_string_pretty(settings)?;
    std::fs::write(&path, contents)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = AppSettings {
            api_base_url: "http://tasks.example:4567".to_string(),
        };
        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();

        let loaded = load_settings_from_file(&path).unwrap();
        assert_eq!(loaded.api_base_url, "http://tasks.example:4567");
    }

    #[test]
    fn test_settings_file_uses_camel_case_keys() {
        let json = serde_json::to_value(AppSettings::default()).unwrap();
        assert!(json.get("apiBaseUrl").is_some());
    }

    #[test]
    fn test_env_override_wins_over_settings_file() {
        std::env::set_var(API_URL_ENV, "http://override.example:9000");
        let settings = load_settings();
        std::env::remove_var(API_URL_ENV);

        assert_eq!(settings.api_base_url, "http://override.example:9000");
    }

    #[test]
    fn test_invalid_settings_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            load_settings_from_file(&path),
            Err(SettingsError::ParseError(_))
        ));
    }
}
