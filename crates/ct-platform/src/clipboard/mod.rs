mod change_filter;
mod local;
pub mod watcher;

pub use change_filter::ChangeFilter;
pub use local::LocalClipboard;
pub use watcher::ClipboardTextWatcher;
