//! Clipboard history domain.

mod hash;
pub mod history;
pub mod preview;
mod record;

pub use hash::ContentHash;
pub use history::sort_newest_first;
pub use preview::{preview, DEFAULT_PREVIEW_CHARS};
pub use record::ClipRecord;

/// Name of the single namespace holding every clip record.
///
/// Shared by the store and any migration tooling; never changed at runtime.
pub const CLIP_NAMESPACE: &str = "clipboard";
