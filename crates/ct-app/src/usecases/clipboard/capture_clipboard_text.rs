use std::sync::Arc;

use anyhow::{Context, Result};
use ct_core::clipboard::{preview, ClipRecord, DEFAULT_PREVIEW_CHARS};
use ct_core::ports::{AppEventEmitterPort, ClipRecordStorePort, ClockPort, ContentHashPort};
use ct_core::{AppEvent, ContentHash};
use tracing::{info, info_span, Instrument};

/// Turns one new clipboard text value into a stored record.
///
/// The record is keyed by the content hash, so capturing text that was seen
/// before replaces the old record: it moves to the top of the history and
/// loses any secret flag it carried.
///
/// ```text
/// text -> hash -> ClipRecord{now} -> store.create -> log preview -> CopyOccurred
/// ```
pub struct CaptureClipboardText {
    store: Arc<dyn ClipRecordStorePort>,
    hasher: Arc<dyn ContentHashPort>,
    clock: Arc<dyn ClockPort>,
    events: Arc<dyn AppEventEmitterPort>,
    preview_chars: usize,
}

impl CaptureClipboardText {
    pub fn from_ports(
        store: Arc<dyn ClipRecordStorePort>,
        hasher: Arc<dyn ContentHashPort>,
        clock: Arc<dyn ClockPort>,
        events: Arc<dyn AppEventEmitterPort>,
    ) -> Self {
        Self {
            store,
            hasher,
            clock,
            events,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }

    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars;
        self
    }

    /// Stores `text` and returns its key.
    ///
    /// No notification is emitted when the write fails.
    pub async fn execute(&self, text: &str) -> Result<ContentHash> {
        let hash = self.hasher.hash_text(text);
        let span = info_span!("usecase.capture_clipboard_text", hash = %hash);

        async move {
            let record = ClipRecord::captured(hash.clone(), text, self.clock.now_ms());

            self.store
                .create(&hash, &record)
                .await
                .with_context(|| format!("Failed to store clip record {hash}"))?;

            info!("{}... copied", preview(text, self.preview_chars));
            self.events.emit(AppEvent::CopyOccurred);

            Ok(hash)
        }
        .instrument(span)
        .await
    }
}
