//! Long-lived background tasks. Both stop when the shared cancellation
//! token fires.

mod hotkey_listener;
mod watch_loop;

pub use hotkey_listener::HotkeyListener;
pub use watch_loop::ClipboardWatchLoop;
