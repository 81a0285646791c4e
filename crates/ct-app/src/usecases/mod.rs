//! Business logic use cases
//!
//! ```text
//! [clipboard watcher] -> watch loop -> CaptureClipboardText
//!
//! shell commands:
//!   list        -> ListClipHistory
//!   copy        -> CopyClipContent
//!   mark secret -> MarkClipSecret
//!   clear       -> ClearClipHistory
//! ```

pub mod clipboard;

pub use clipboard::{
    CaptureClipboardText, ClearClipHistory, CopyClipContent, ListClipHistory, MarkClipSecret,
};
