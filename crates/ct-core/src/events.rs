//! Notifications published from the core to the application shell.

/// Application-level notification.
///
/// Delivery is best-effort: events emitted while nobody listens are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A new clipboard value was captured and stored.
    CopyOccurred,
    /// The global hotkey completed a press/release cycle.
    GlobalHotkeyFired {
        /// RFC 3339 time of the key release.
        timestamp: String,
    },
}

impl AppEvent {
    pub const COPY_OCCURRED: &'static str = "clipboard://copied";
    pub const GLOBAL_HOTKEY_FIRED: &'static str = "hotkey://fired";

    /// Stable event name used by shell consumers.
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::CopyOccurred => Self::COPY_OCCURRED,
            AppEvent::GlobalHotkeyFired { .. } => Self::GLOBAL_HOTKEY_FIRED,
        }
    }
}
