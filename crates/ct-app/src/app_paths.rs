use std::path::PathBuf;

use ct_core::app_dirs::AppDirs;
use ct_core::AppConfig;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "cliptrail.log";
/// Announces a pending `copy` to the running watcher.
pub const SELF_WRITE_MARKER_NAME: &str = "copy.pending";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub db_path: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
    pub self_write_marker: PathBuf,
}

impl AppPaths {
    /// Location of the config file, known before the config itself is read.
    pub fn config_path(dirs: &AppDirs) -> PathBuf {
        dirs.config_root.join(CONFIG_FILE_NAME)
    }

    pub fn resolve(dirs: &AppDirs, config: &AppConfig) -> Self {
        Self {
            db_path: dirs.config_root.join(&config.storage.database_file),
            config_path: Self::config_path(dirs),
            logs_dir: dirs.config_root.join("logs"),
            self_write_marker: dirs.config_root.join(SELF_WRITE_MARKER_NAME),
        }
    }
}
