//! Bridges clipboard-rs change callbacks into an async channel.
//!
//! ```text
//! OS clipboard change
//!      ↓
//! ClipboardTextWatcher::on_clipboard_change   (watcher thread)
//!      ↓  ChangeFilter
//! mpsc::UnboundedSender<String>
//!      ↓
//! watch loop (ct-app)
//! ```

use std::sync::Arc;

use clipboard_rs::ClipboardHandler;
use ct_core::ports::SystemClipboardPort;
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use super::ChangeFilter;

pub struct ClipboardTextWatcher {
    clipboard: Arc<dyn SystemClipboardPort>,
    filter: ChangeFilter,
    sender: mpsc::UnboundedSender<String>,
}

impl ClipboardTextWatcher {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        filter: ChangeFilter,
        sender: mpsc::UnboundedSender<String>,
    ) -> Self {
        Self {
            clipboard,
            filter,
            sender,
        }
    }

    fn forward(&self, text: String) {
        if text.is_empty() || !self.filter.accept(&text) {
            trace!("Clipboard change filtered");
            return;
        }
        if self.sender.send(text).is_err() {
            debug!("Clipboard change dropped, watch loop is gone");
        }
    }
}

impl ClipboardHandler for ClipboardTextWatcher {
    fn on_clipboard_change(&mut self) {
        match self.clipboard.read_text() {
            Ok(Some(text)) => self.forward(text),
            Ok(None) => trace!("Clipboard changed to non-text content"),
            Err(e) => warn!(error = %e, "Failed to read clipboard text"),
        }
    }
}
