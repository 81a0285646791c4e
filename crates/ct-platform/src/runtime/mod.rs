mod clipboard_runtime;
mod event_bus;

pub use clipboard_runtime::{ClipboardWatchHandle, ClipboardWatchRuntime};
pub use event_bus::{AppEventReceiver, BroadcastEventBus};
