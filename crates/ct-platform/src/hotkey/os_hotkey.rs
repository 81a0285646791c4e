//! OS global hotkey registration through the `global-hotkey` crate.
//!
//! The manager lives on a dedicated thread for as long as the returned
//! [`HotkeySubscription`] is alive. That thread owns the registration,
//! forwards key transitions for our binding and unregisters on stop. It sleeps
//! on the OS event channel and the stop channel together.
//!
//! Only X11 delivers events to a manager created off the main thread without a
//! message loop; Windows and macOS are not served by this adapter.

use std::str::FromStr;
use std::sync::mpsc as std_mpsc;
use std::thread;

use crossbeam_channel::{select, Receiver};
use ct_core::hotkey::{HotkeyBinding, HotkeyKeyState};
use ct_core::ports::{GlobalHotkeyPort, HotkeyError, HotkeySubscription};
use global_hotkey::hotkey::HotKey;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalHotkeyAdapter;

impl GlobalHotkeyAdapter {
    pub fn new() -> Self {
        Self
    }
}

fn parse_binding(binding: &HotkeyBinding) -> Result<HotKey, HotkeyError> {
    HotKey::from_str(binding.as_str()).map_err(|e| HotkeyError::InvalidBinding {
        binding: binding.to_string(),
        message: e.to_string(),
    })
}

fn map_register_error(binding: &HotkeyBinding, err: global_hotkey::Error) -> HotkeyError {
    match err {
        global_hotkey::Error::AlreadyRegistered(_) | global_hotkey::Error::FailedToRegister(_) => {
            HotkeyError::AlreadyBound {
                binding: binding.to_string(),
                message: err.to_string(),
            }
        }
        other => HotkeyError::Unavailable(other.to_string()),
    }
}

fn key_state(state: HotKeyState) -> HotkeyKeyState {
    match state {
        HotKeyState::Pressed => HotkeyKeyState::Pressed,
        HotKeyState::Released => HotkeyKeyState::Released,
    }
}

/// Why [`forward_key_events`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ForwardEnd {
    Stopped,
    SubscriberGone,
    SourceClosed,
}

/// Forwards transitions of `hotkey_id` until stop is signalled (or its sender
/// dropped), the subscriber goes away or the OS channel closes.
fn forward_key_events(
    os_events: &Receiver<GlobalHotKeyEvent>,
    stop: &Receiver<()>,
    hotkey_id: u32,
    events_tx: &mpsc::UnboundedSender<HotkeyKeyState>,
) -> ForwardEnd {
    loop {
        select! {
            recv(stop) -> _ => return ForwardEnd::Stopped,
            recv(os_events) -> event => {
                let Ok(event) = event else {
                    return ForwardEnd::SourceClosed;
                };
                if event.id != hotkey_id {
                    continue;
                }
                if events_tx.send(key_state(event.state)).is_err() {
                    return ForwardEnd::SubscriberGone;
                }
            }
        }
    }
}

impl GlobalHotkeyPort for GlobalHotkeyAdapter {
    fn register(&self, binding: &HotkeyBinding) -> Result<HotkeySubscription, HotkeyError> {
        let hotkey = parse_binding(binding)?;
        let hotkey_id = hotkey.id();

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (ready_tx, ready_rx) = std_mpsc::channel::<Result<(), HotkeyError>>();
        let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(1);
        let thread_binding = binding.clone();

        thread::Builder::new()
            .name("global-hotkey".to_string())
            .spawn(move || {
                let manager = match GlobalHotKeyManager::new() {
                    Ok(manager) => manager,
                    Err(e) => {
                        let _ = ready_tx.send(Err(HotkeyError::Unavailable(e.to_string())));
                        return;
                    }
                };
                if let Err(e) = manager.register(hotkey) {
                    let _ = ready_tx.send(Err(map_register_error(&thread_binding, e)));
                    return;
                }
                let _ = ready_tx.send(Ok(()));
                info!(binding = %thread_binding, "Global hotkey registered");

                let end = forward_key_events(
                    GlobalHotKeyEvent::receiver(),
                    &stop_rx,
                    hotkey_id,
                    &events_tx,
                );
                debug!(binding = %thread_binding, reason = ?end, "Hotkey forwarding ended");

                if let Err(e) = manager.unregister(hotkey) {
                    warn!(
                        binding = %thread_binding,
                        error = %e,
                        "Failed to unregister global hotkey"
                    );
                } else {
                    debug!(binding = %thread_binding, "Global hotkey unregistered");
                }
            })
            .map_err(|e| HotkeyError::Unavailable(e.to_string()))?;

        match ready_rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(e),
            Err(_) => {
                return Err(HotkeyError::Unavailable(
                    "hotkey thread exited before registering".to_string(),
                ))
            }
        }

        Ok(HotkeySubscription::new(events_rx, move || {
            let _ = stop_tx.try_send(());
        }))
    }
}
