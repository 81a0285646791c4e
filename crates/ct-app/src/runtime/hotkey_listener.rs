use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use ct_core::hotkey::ListenerState;
use ct_core::ports::{AppEventEmitterPort, GlobalHotkeyPort};
use ct_core::{AppEvent, HotkeyBinding};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Delivers the global hotkey to the shell as `GlobalHotkeyFired` events.
///
/// The binding is registered once and stays registered; each completed
/// press/release cycle emits one event. If the binding cannot be registered
/// the listener gives up for the rest of the session.
pub struct HotkeyListener {
    hotkey: Arc<dyn GlobalHotkeyPort>,
    events: Arc<dyn AppEventEmitterPort>,
    binding: HotkeyBinding,
}

impl HotkeyListener {
    pub fn new(
        hotkey: Arc<dyn GlobalHotkeyPort>,
        events: Arc<dyn AppEventEmitterPort>,
        binding: HotkeyBinding,
    ) -> Self {
        Self {
            hotkey,
            events,
            binding,
        }
    }

    /// Runs until `cancel` fires or the OS side closes the subscription.
    /// Returns the state the listener stopped in.
    pub async fn run(self, cancel: CancellationToken) -> ListenerState {
        let mut state = ListenerState::Unregistered;

        // Registration waits on the OS thread, so keep it off the async workers.
        let hotkey = Arc::clone(&self.hotkey);
        let binding = self.binding.clone();
        let registered = tokio::task::spawn_blocking(move || hotkey.register(&binding)).await;

        let mut subscription = match registered {
            Ok(Ok(subscription)) => subscription,
            Ok(Err(e)) => {
                warn!(
                    binding = %self.binding,
                    error = %e,
                    "Global hotkey disabled for this session"
                );
                return state;
            }
            Err(e) => {
                warn!(binding = %self.binding, error = %e, "Hotkey registration task failed");
                return state;
            }
        };
        state = state.registered().arm();
        info!(binding = %self.binding, "Hotkey listener started");

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Hotkey listener cancelled");
                    break;
                }
                next = subscription.next_key() => {
                    let Some(key) = next else {
                        warn!("Hotkey event source closed");
                        break;
                    };
                    let (next_state, fired) = state.on_key(key);
                    state = next_state;
                    if fired {
                        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
                        debug!(%timestamp, "Global hotkey fired");
                        self.events.emit(AppEvent::GlobalHotkeyFired { timestamp });
                    }
                }
            }
        }

        drop(subscription);
        info!("Hotkey listener stopped");
        state
    }
}
