use crate::events::AppEvent;

/// Fire-and-forget publisher for application notifications.
///
/// `emit` never blocks and never fails; with no listener the event is dropped.
pub trait AppEventEmitterPort: Send + Sync {
    fn emit(&self, event: AppEvent);
}
