use std::path::PathBuf;

use thiserror::Error;

/// Failures of the clip record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The namespace is missing. Unreachable after a successful open.
    #[error("store namespace `{0}` is unavailable")]
    StoreUnavailable(String),

    #[error("clip record not found: {0}")]
    NotFound(String),

    #[error("failed to encode clip record: {0}")]
    Serialization(String),

    #[error("failed to decode clip record `{key}`: {message}")]
    Deserialization { key: String, message: String },

    /// Connection or SQL failure in the backing database.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("no per-user config directory is available on this platform")]
    ConfigDirUnavailable,

    #[error("cannot create directory {path}: {message}")]
    CreateFailed { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotkeyError {
    #[error("invalid hotkey binding `{binding}`: {message}")]
    InvalidBinding { binding: String, message: String },

    #[error("global hotkeys are unavailable: {0}")]
    Unavailable(String),

    #[error("hotkey `{binding}` is already owned elsewhere: {message}")]
    AlreadyBound { binding: String, message: String },
}

/// Startup failures of a required subsystem.
///
/// Both abort startup. Hotkey failures are not startup failures; they only
/// disable the hotkey for the session.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to open store at {path}: {message}")]
    Store { path: PathBuf, message: String },

    #[error("clipboard subsystem failed to start: {0}")]
    Clipboard(String),
}
