pub mod capture_clipboard_text;
pub mod clear_clip_history;
pub mod copy_clip_content;
pub mod list_clip_history;
pub mod mark_clip_secret;

pub use capture_clipboard_text::CaptureClipboardText;
pub use clear_clip_history::ClearClipHistory;
pub use copy_clip_content::CopyClipContent;
pub use list_clip_history::ListClipHistory;
pub use mark_clip_secret::MarkClipSecret;
