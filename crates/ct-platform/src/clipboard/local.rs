use std::sync::{Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use ct_core::ports::{InitError, SystemClipboardPort};

use tracing::{debug, debug_span};

use super::ChangeFilter;

/// OS clipboard accessed through clipboard-rs.
pub struct LocalClipboard {
    inner: Mutex<ClipboardContext>,
    filter: ChangeFilter,
}

impl LocalClipboard {
    /// Opens the OS clipboard. Failure means the clipboard subsystem is
    /// unusable and startup should abort.
    pub fn new(filter: ChangeFilter) -> Result<Self, InitError> {
        let context = ClipboardContext::new().map_err(|e| {
            InitError::Clipboard(format!("Failed to create clipboard context: {e}"))
        })?;
        Ok(Self {
            inner: Mutex::new(context),
            filter,
        })
    }

    fn context(&self) -> MutexGuard<'_, ClipboardContext> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SystemClipboardPort for LocalClipboard {
    fn read_text(&self) -> Result<Option<String>> {
        let span = debug_span!("platform.clipboard.read_text");
        span.in_scope(|| {
            let ctx = self.context();
            if !ctx.has(ContentFormat::Text) {
                return Ok(None);
            }
            ctx.get_text().map(Some).map_err(|e| anyhow!(e))
        })
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let span = debug_span!("platform.clipboard.write_text", len = text.len());
        span.in_scope(|| {
            self.filter.mark_self_write(text);
            if let Err(e) = self.context().set_text(text.to_string()) {
                self.filter.forget_self_write();
                return Err(anyhow!("Failed to write clipboard text: {}", e));
            }
            debug!("Wrote text to system clipboard");
            Ok(())
        })
    }
}
