//! Global hotkey domain: the binding and the listener state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Modifier+key combination in `mod+mod+Key` notation, e.g. `ctrl+shift+Space`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotkeyBinding(String);

impl HotkeyBinding {
    pub const DEFAULT: &'static str = "ctrl+shift+Space";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HotkeyBinding {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for HotkeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key transition reported by the OS for a registered binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyKeyState {
    Pressed,
    Released,
}

/// States of the hotkey listener.
///
/// ```text
/// Unregistered -> Registered -> AwaitingKeydown -> AwaitingKeyup
///                                      ^                 |
///                                      +---- (fire) -----+
/// ```
///
/// The binding stays registered across cycles, so a completed key-up goes
/// straight back to `AwaitingKeydown` instead of re-binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerState {
    Unregistered,
    Registered,
    AwaitingKeydown,
    AwaitingKeyup,
}

impl ListenerState {
    /// Binding succeeded.
    pub fn registered(self) -> Self {
        match self {
            ListenerState::Unregistered => ListenerState::Registered,
            other => other,
        }
    }

    /// Start waiting for the first key-down.
    pub fn arm(self) -> Self {
        match self {
            ListenerState::Registered => ListenerState::AwaitingKeydown,
            other => other,
        }
    }

    /// Feeds one key transition. Returns the next state and whether a full
    /// press/release cycle just completed.
    ///
    /// A release with no preceding press and repeated presses while held are
    /// ignored.
    pub fn on_key(self, key: HotkeyKeyState) -> (Self, bool) {
        match (self, key) {
            (ListenerState::AwaitingKeydown, HotkeyKeyState::Pressed) => {
                (ListenerState::AwaitingKeyup, false)
            }
            (ListenerState::AwaitingKeyup, HotkeyKeyState::Released) => {
                (ListenerState::AwaitingKeydown, true)
            }
            (state, _) => (state, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed() -> ListenerState {
        ListenerState::Unregistered.registered().arm()
    }

    #[test]
    fn press_then_release_fires_once_and_rearms() {
        let (state, fired) = armed().on_key(HotkeyKeyState::Pressed);
        assert_eq!(state, ListenerState::AwaitingKeyup);
        assert!(!fired);

        let (state, fired) = state.on_key(HotkeyKeyState::Released);
        assert_eq!(state, ListenerState::AwaitingKeydown);
        assert!(fired);
    }

    #[test]
    fn stray_release_is_ignored() {
        let (state, fired) = armed().on_key(HotkeyKeyState::Released);
        assert_eq!(state, ListenerState::AwaitingKeydown);
        assert!(!fired);
    }

    #[test]
    fn key_repeat_while_held_does_not_fire() {
        let (state, _) = armed().on_key(HotkeyKeyState::Pressed);
        let (state, fired) = state.on_key(HotkeyKeyState::Pressed);
        assert_eq!(state, ListenerState::AwaitingKeyup);
        assert!(!fired);
    }

    #[test]
    fn keys_before_arming_are_ignored() {
        let (state, fired) = ListenerState::Registered.on_key(HotkeyKeyState::Pressed);
        assert_eq!(state, ListenerState::Registered);
        assert!(!fired);
    }

    #[test]
    fn default_binding() {
        assert_eq!(HotkeyBinding::default().as_str(), "ctrl+shift+Space");
    }
}
