use std::path::PathBuf;

/// Resolved per-user application directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    /// Root directory holding the store file, config file and logs.
    pub config_root: PathBuf,
}
