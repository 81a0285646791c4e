//! # Application dependencies
//!
//! Plain grouping of the ports every use case and background task is built
//! from. No defaults and no build steps: the bootstrap fills every field.

use std::sync::Arc;

use ct_core::ports::*;

pub struct AppDeps {
    // Storage
    pub store: Arc<dyn ClipRecordStorePort>,

    // Clipboard
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub hasher: Arc<dyn ContentHashPort>,

    // Hotkey
    pub hotkey: Arc<dyn GlobalHotkeyPort>,

    // Infrastructure
    pub clock: Arc<dyn ClockPort>,
    pub events: Arc<dyn AppEventEmitterPort>,
}
