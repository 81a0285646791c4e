use tokio::sync::mpsc;

use crate::hotkey::{HotkeyBinding, HotkeyKeyState};
use crate::ports::errors::HotkeyError;

/// Live OS registration of a global hotkey.
///
/// Key transitions arrive through [`next_key`](Self::next_key). Dropping the
/// subscription unregisters the binding.
pub struct HotkeySubscription {
    events: mpsc::UnboundedReceiver<HotkeyKeyState>,
    unregister: Option<Box<dyn FnOnce() + Send>>,
}

impl HotkeySubscription {
    pub fn new(
        events: mpsc::UnboundedReceiver<HotkeyKeyState>,
        unregister: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            events,
            unregister: Some(Box::new(unregister)),
        }
    }

    /// Waits for the next key transition. `None` once the OS side is gone.
    pub async fn next_key(&mut self) -> Option<HotkeyKeyState> {
        self.events.recv().await
    }
}

impl Drop for HotkeySubscription {
    fn drop(&mut self) {
        if let Some(unregister) = self.unregister.take() {
            unregister();
        }
    }
}

impl std::fmt::Debug for HotkeySubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotkeySubscription")
            .field("registered", &self.unregister.is_some())
            .finish()
    }
}

pub trait GlobalHotkeyPort: Send + Sync {
    /// Binds `binding` at the OS level.
    ///
    /// Fails when the combination is invalid or already owned by another
    /// application or instance.
    fn register(&self, binding: &HotkeyBinding) -> Result<HotkeySubscription, HotkeyError>;
}
