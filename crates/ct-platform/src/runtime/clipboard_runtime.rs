use std::sync::Arc;

use clipboard_rs::{ClipboardWatcher, ClipboardWatcherContext};
use ct_core::ports::{InitError, SystemClipboardPort};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::clipboard::{ChangeFilter, ClipboardTextWatcher};

/// Running OS clipboard watch.
pub struct ClipboardWatchHandle {
    /// New clipboard text values, in the order the OS reported them.
    pub changes: mpsc::UnboundedReceiver<String>,
    /// Completes once the blocking watch has stopped.
    pub join: JoinHandle<()>,
}

/// Owns the clipboard-rs watcher thread for the lifetime of the app.
pub struct ClipboardWatchRuntime {
    clipboard: Arc<dyn SystemClipboardPort>,
    filter: ChangeFilter,
}

impl ClipboardWatchRuntime {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>, filter: ChangeFilter) -> Self {
        Self { clipboard, filter }
    }

    /// Starts watching; the watch stops when `cancel` fires.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self, cancel: CancellationToken) -> Result<ClipboardWatchHandle, InitError> {
        // Whatever is on the clipboard at startup is not a new copy, and no
        // earlier copy is still on its way.
        self.filter.forget_self_write();
        match self.clipboard.read_text() {
            Ok(Some(text)) => self.filter.seed(text),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Failed to read initial clipboard text"),
        }

        let mut watcher_ctx = ClipboardWatcherContext::new()
            .map_err(|e| InitError::Clipboard(format!("Failed to create watcher context: {e}")))?;

        let (tx, rx) = mpsc::unbounded_channel();
        let handler = ClipboardTextWatcher::new(self.clipboard.clone(), self.filter.clone(), tx);
        let shutdown = watcher_ctx.add_handler(handler).get_shutdown_channel();

        let join = tokio::task::spawn_blocking(move || {
            info!("Clipboard watch started");
            watcher_ctx.start_watch();
            info!("Clipboard watch stopped");
        });

        tokio::spawn(async move {
            cancel.cancelled().await;
            debug!("Stopping clipboard watch");
            shutdown.stop();
        });

        Ok(ClipboardWatchHandle { changes: rx, join })
    }
}
