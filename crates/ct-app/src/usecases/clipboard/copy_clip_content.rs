use std::sync::Arc;

use anyhow::{Context, Result};
use ct_core::ports::SystemClipboardPort;
use tracing::debug;

/// Places text from the history back onto the OS clipboard.
///
/// This is a pass-through: the clipboard port makes sure the resulting
/// change is not captured as a new record.
pub struct CopyClipContent {
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl CopyClipContent {
    pub fn from_arc(clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self { clipboard }
    }

    pub fn execute(&self, text: &str) -> Result<()> {
        self.clipboard
            .write_text(text)
            .context("Failed to write text to the system clipboard")?;
        debug!(len = text.len(), "Copied history content to clipboard");
        Ok(())
    }
}
