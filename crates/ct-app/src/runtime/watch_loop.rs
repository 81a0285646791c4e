use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::usecases::CaptureClipboardText;

/// Consumes clipboard text values and captures each one.
///
/// The source already drops consecutive repeats, so every value that
/// arrives here is stored. A failed capture is logged and the loop moves
/// on to the next value.
pub struct ClipboardWatchLoop {
    capture: CaptureClipboardText,
    changes: mpsc::UnboundedReceiver<String>,
}

impl ClipboardWatchLoop {
    pub fn new(capture: CaptureClipboardText, changes: mpsc::UnboundedReceiver<String>) -> Self {
        Self { capture, changes }
    }

    /// Runs until `cancel` fires or the change source closes.
    pub async fn run(mut self, cancel: CancellationToken) {
        info!("Clipboard watch loop started");
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Clipboard watch loop cancelled");
                    break;
                }
                next = self.changes.recv() => {
                    let Some(text) = next else {
                        debug!("Clipboard change source closed");
                        break;
                    };
                    if let Err(e) = self.capture.execute(&text).await {
                        error!(error = %format!("{e:#}"), "Failed to capture clipboard change");
                    }
                }
            }
        }
        info!("Clipboard watch loop stopped");
    }
}
