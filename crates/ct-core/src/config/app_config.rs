//! Application configuration domain model

use serde::{Deserialize, Serialize};

use crate::clipboard::DEFAULT_PREVIEW_CHARS;
use crate::hotkey::HotkeyBinding;

/// Application configuration
///
/// Every section falls back to its defaults when absent from the file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub hotkey: HotkeyConfig,
    pub watch: WatchConfig,
    pub logging: LoggingConfig,
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// File name of the store inside the config directory
    pub database_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_file: "cliptrail.db".to_string(),
        }
    }
}

/// Global hotkey configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyConfig {
    pub enabled: bool,
    pub binding: HotkeyBinding,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            binding: HotkeyBinding::default(),
        }
    }
}

/// Clipboard watch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Characters kept in the diagnostic preview of each capture
    pub preview_chars: usize,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to `<config-dir>/logs/cliptrail.log`
    pub file_logging: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { file_logging: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [hotkey]
            enabled = false
            "#,
        )
        .unwrap();

        assert!(!config.hotkey.enabled);
        assert_eq!(config.hotkey.binding, HotkeyBinding::default());
        assert_eq!(config.storage.database_file, "cliptrail.db");
        assert_eq!(config.watch.preview_chars, 10);
        assert!(config.logging.file_logging);
    }
}
