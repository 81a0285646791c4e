//! # Dependency wiring
//!
//! The only place that depends on ct-infra, ct-platform and ct-app at the
//! same time. It assembles adapters into [`AppDeps`]; it makes no decisions.

use std::sync::Arc;

use ct_app::{AppDeps, AppPaths};
use ct_core::ports::InitError;
use ct_core::AppConfig;
use ct_infra::{ClipStore, Sha1ContentHasher, SystemClock};
use ct_platform::clipboard::{ChangeFilter, LocalClipboard};
use ct_platform::hotkey::GlobalHotkeyAdapter;
use ct_platform::runtime::BroadcastEventBus;
use tracing::info;

/// Concrete platform pieces the run loop needs beyond the ports.
pub struct PlatformHandles {
    pub events: BroadcastEventBus,
    pub filter: ChangeFilter,
}

/// Opens the store and the OS clipboard and builds the runtime.
///
/// Either failure aborts startup.
pub fn wire_runtime(
    config: AppConfig,
    paths: &AppPaths,
) -> Result<(super::AppRuntime, PlatformHandles), InitError> {
    let store = ClipStore::open(&paths.db_path)?;
    info!(path = %paths.db_path.display(), "Clip store opened");

    // Shared with every cliptrail process on this config dir.
    let filter = ChangeFilter::with_marker_file(&paths.self_write_marker);
    let clipboard = LocalClipboard::new(filter.clone())?;
    let events = BroadcastEventBus::new();

    let deps = AppDeps {
        store: Arc::new(store),
        clipboard: Arc::new(clipboard),
        hasher: Arc::new(Sha1ContentHasher),
        hotkey: Arc::new(GlobalHotkeyAdapter::new()),
        clock: Arc::new(SystemClock),
        events: Arc::new(events.clone()),
    };

    Ok((
        super::AppRuntime::new(deps, config),
        PlatformHandles { events, filter },
    ))
}
