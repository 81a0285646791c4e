use ct_core::ports::AppEventEmitterPort;
use ct_core::AppEvent;
use tokio::sync::broadcast;
use tracing::debug;

pub type AppEventReceiver = broadcast::Receiver<AppEvent>;

const DEFAULT_CAPACITY: usize = 64;

/// In-process fan-out of [`AppEvent`]s to every subscribed shell consumer.
#[derive(Debug, Clone)]
pub struct BroadcastEventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl BroadcastEventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Receives events emitted after this call.
    pub fn subscribe(&self) -> AppEventReceiver {
        self.sender.subscribe()
    }
}

impl Default for BroadcastEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl AppEventEmitterPort for BroadcastEventBus {
    fn emit(&self, event: AppEvent) {
        let name = event.name();
        match self.sender.send(event) {
            Ok(receivers) => debug!(event = name, receivers, "Event emitted"),
            Err(_) => debug!(event = name, "Event dropped, no listeners"),
        }
    }
}
