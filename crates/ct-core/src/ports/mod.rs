//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure /
//! platform implementations, keeping the domain free of I/O.

pub mod app_dirs;
mod clip_store;
mod clipboard;
mod clock;
pub mod errors;
mod event_emitter;
mod hash;
mod hotkey;

pub use app_dirs::AppDirsPort;
pub use clip_store::ClipRecordStorePort;
pub use clipboard::SystemClipboardPort;
pub use clock::ClockPort;
pub use errors::{AppDirsError, HotkeyError, InitError, StoreError};
pub use event_emitter::AppEventEmitterPort;
pub use hash::ContentHashPort;
pub use hotkey::{GlobalHotkeyPort, HotkeySubscription};
