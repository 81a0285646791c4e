//! # ct-core
//!
//! Core domain models and business rules for cliptrail.
//!
//! This crate contains pure domain logic and the port traits that the
//! infrastructure and platform crates implement. It performs no I/O.

pub mod app_dirs;
pub mod clipboard;
pub mod config;
pub mod events;
pub mod hotkey;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{ClipRecord, ContentHash};
pub use config::AppConfig;
pub use events::AppEvent;
pub use hotkey::{HotkeyBinding, HotkeyKeyState};
