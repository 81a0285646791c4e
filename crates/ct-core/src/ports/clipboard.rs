use anyhow::Result;

/// Plain-text access to the OS clipboard.
pub trait SystemClipboardPort: Send + Sync {
    /// Current clipboard text, `None` when the clipboard holds no text.
    fn read_text(&self) -> Result<Option<String>>;

    /// Places `text` on the clipboard.
    ///
    /// Implementations must make sure the resulting change notification is
    /// not captured again as a new record.
    fn write_text(&self, text: &str) -> Result<()>;
}
