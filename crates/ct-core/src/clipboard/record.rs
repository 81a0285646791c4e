use super::ContentHash;

/// One clipboard capture.
///
/// Records are created by the watch loop, mutated only by mark-secret or a
/// full update, and removed only by clearing the whole namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipRecord {
    /// Content address, also the store key.
    pub content_hash: ContentHash,
    /// The captured text, arbitrary length.
    pub content: String,
    /// Capture time in milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
    /// Source application label. Reserved; the watch loop leaves it empty.
    pub application: Option<String>,
    /// One-way flag: once set it is never cleared by the core.
    pub is_secret: bool,
    /// Optional classification labels, order preserved.
    pub tags: Vec<String>,
}

impl ClipRecord {
    /// Builds a freshly captured record with no application, tags or secret flag.
    pub fn captured(
        content_hash: ContentHash,
        content: impl Into<String>,
        timestamp_ms: i64,
    ) -> Self {
        Self {
            content_hash,
            content: content.into(),
            timestamp_ms,
            application: None,
            is_secret: false,
            tags: Vec::new(),
        }
    }

    /// Sets the secret flag. Returns `true` if the flag changed.
    pub fn mark_secret(&mut self) -> bool {
        let changed = !self.is_secret;
        self.is_secret = true;
        changed
    }
}
