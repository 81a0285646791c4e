use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};

#[derive(Debug, Default)]
struct FilterState {
    last_text: Option<String>,
    ignore_next: Option<String>,
}

/// Decides which clipboard change notifications carry a genuinely new value.
///
/// Shared between the clipboard writer and the watcher:
///
/// - consecutive identical text is dropped, so the watch loop only sees
///   changes;
/// - text written through [`mark_self_write`](Self::mark_self_write) is
///   dropped once, so copying an item back from history is not captured
///   again.
///
/// With a marker file the pending self-write is also visible to filters in
/// other processes that point at the same path. That is how a one-shot `copy`
/// reaches the long-running watcher.
///
/// Cloning shares the same state.
#[derive(Debug, Clone, Default)]
pub struct ChangeFilter {
    state: Arc<Mutex<FilterState>>,
    marker: Option<PathBuf>,
}

impl ChangeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter that also publishes and consumes self-writes through `path`.
    pub fn with_marker_file(path: impl Into<PathBuf>) -> Self {
        Self {
            state: Arc::default(),
            marker: Some(path.into()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FilterState> {
        // The state stays consistent even if a holder panicked.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Records the clipboard value present before watching starts.
    pub fn seed(&self, text: impl Into<String>) {
        self.lock().last_text = Some(text.into());
    }

    /// Must be called *before* the write reaches the OS clipboard.
    pub fn mark_self_write(&self, text: impl Into<String>) {
        let text = text.into();
        if let Some(marker) = &self.marker {
            if let Err(e) = fs::write(marker, &text) {
                warn!(
                    path = %marker.display(),
                    error = %e,
                    "Failed to publish clipboard self-write"
                );
            }
        }
        self.lock().ignore_next = Some(text);
    }

    /// Drops a pending self-write, ours or one left behind by another process.
    pub fn forget_self_write(&self) {
        self.lock().ignore_next = None;
        if let Some(marker) = &self.marker {
            remove_marker(marker);
        }
    }

    /// Returns `true` when `text` should be forwarded as a new capture.
    pub fn accept(&self, text: &str) -> bool {
        let mut state = self.lock();

        let marked_here = state.ignore_next.as_deref() == Some(text);
        let marked_elsewhere = self.take_marker_for(text);
        if marked_here || marked_elsewhere {
            state.ignore_next = None;
            state.last_text = Some(text.to_string());
            return false;
        }

        if state.last_text.as_deref() == Some(text) {
            return false;
        }

        state.last_text = Some(text.to_string());
        true
    }

    /// Consumes the marker file when it announces `text`. A marker for other
    /// text stays in place until its own write arrives.
    fn take_marker_for(&self, text: &str) -> bool {
        let Some(marker) = &self.marker else {
            return false;
        };
        match fs::read(marker) {
            Ok(pending) if pending == text.as_bytes() => {
                remove_marker(marker);
                debug!("Clipboard self-write from another process ignored");
                true
            }
            Ok(_) => false,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                warn!(
                    path = %marker.display(),
                    error = %e,
                    "Failed to read clipboard self-write marker"
                );
                false
            }
        }
    }
}

fn remove_marker(marker: &Path) {
    match fs::remove_file(marker) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(
            path = %marker.display(),
            error = %e,
            "Failed to remove clipboard self-write marker"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_consecutive_duplicates_only() {
        let filter = ChangeFilter::new();
        assert!(filter.accept("a"));
        assert!(!filter.accept("a"));
        assert!(filter.accept("b"));
        assert!(filter.accept("a"));
    }

    #[test]
    fn seeded_value_is_not_recaptured() {
        let filter = ChangeFilter::new();
        filter.seed("already there");
        assert!(!filter.accept("already there"));
        assert!(filter.accept("new"));
    }

    #[test]
    fn self_write_is_ignored_exactly_once() {
        let filter = ChangeFilter::new();
        assert!(filter.accept("x"));

        filter.mark_self_write("from history");
        assert!(!filter.accept("from history"));

        assert!(filter.accept("y"));
        assert!(filter.accept("from history"));
    }

    #[test]
    fn clones_share_state() {
        let writer = ChangeFilter::new();
        let watcher = writer.clone();

        writer.mark_self_write("shared");
        assert!(!watcher.accept("shared"));
    }

    #[test]
    fn self_write_from_a_separate_filter_is_ignored_through_the_marker() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("copy.pending");
        // Independent instances, as in two processes.
        let copier = ChangeFilter::with_marker_file(&marker);
        let watcher = ChangeFilter::with_marker_file(&marker);
        assert!(watcher.accept("x"));

        copier.mark_self_write("from history");
        assert!(marker.exists());
        assert!(!watcher.accept("from history"));
        assert!(!marker.exists());

        assert!(watcher.accept("y"));
        assert!(watcher.accept("from history"));
    }

    #[test]
    fn self_write_of_the_current_value_is_still_consumed() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("copy.pending");
        let copier = ChangeFilter::with_marker_file(&marker);
        let watcher = ChangeFilter::with_marker_file(&marker);
        assert!(watcher.accept("same"));

        copier.mark_self_write("same");
        assert!(!watcher.accept("same"));
        assert!(!marker.exists());
    }

    #[test]
    fn marker_for_other_text_waits_for_its_write() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("copy.pending");
        let copier = ChangeFilter::with_marker_file(&marker);
        let watcher = ChangeFilter::with_marker_file(&marker);

        copier.mark_self_write("pending");
        assert!(watcher.accept("unrelated"));
        assert!(marker.exists());
        assert!(!watcher.accept("pending"));
    }

    #[test]
    fn forget_discards_stale_marker() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("copy.pending");
        ChangeFilter::with_marker_file(&marker).mark_self_write("left behind");

        let watcher = ChangeFilter::with_marker_file(&marker);
        watcher.forget_self_write();

        assert!(!marker.exists());
        assert!(watcher.accept("left behind"));
    }

    #[test]
    fn filter_without_marker_never_touches_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("copy.pending");
        ChangeFilter::with_marker_file(&marker).mark_self_write("elsewhere");

        let plain = ChangeFilter::new();
        plain.forget_self_write();
        assert!(plain.accept("elsewhere"));
        assert!(marker.exists());
    }
}
