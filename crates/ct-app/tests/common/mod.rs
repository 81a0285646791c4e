//! Shared fakes for ct-app integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use ct_core::ports::{AppEventEmitterPort, ClockPort};
use ct_core::AppEvent;
use ct_infra::{ClipStore, Sha1ContentHasher};
use ct_app::usecases::CaptureClipboardText;
use tempfile::TempDir;

/// Hands out the scripted timestamps in order, then repeats the last one.
pub struct ScriptedClock {
    times: Mutex<VecDeque<i64>>,
    last: Mutex<i64>,
}

impl ScriptedClock {
    pub fn new(times: impl IntoIterator<Item = i64>) -> Self {
        Self {
            times: Mutex::new(times.into_iter().collect()),
            last: Mutex::new(0),
        }
    }
}

impl ClockPort for ScriptedClock {
    fn now_ms(&self) -> i64 {
        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.times.lock().unwrap().pop_front() {
            *last = next;
        }
        *last
    }
}

#[derive(Default)]
pub struct RecordingEmitter {
    events: Mutex<Vec<AppEvent>>,
}

impl RecordingEmitter {
    pub fn events(&self) -> Vec<AppEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl AppEventEmitterPort for RecordingEmitter {
    fn emit(&self, event: AppEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub struct Harness {
    pub _dir: TempDir,
    pub store: Arc<ClipStore>,
    pub events: Arc<RecordingEmitter>,
    pub capture: CaptureClipboardText,
}

pub fn harness(times: impl IntoIterator<Item = i64>) -> Harness {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = Arc::new(ClipStore::open(&dir.path().join("cliptrail.db")).expect("open store"));
    let events = Arc::new(RecordingEmitter::default());
    let capture = CaptureClipboardText::from_ports(
        store.clone(),
        Arc::new(Sha1ContentHasher),
        Arc::new(ScriptedClock::new(times)),
        events.clone(),
    );
    Harness {
        _dir: dir,
        store,
        events,
        capture,
    }
}
