pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;
pub mod wiring;

use std::path::PathBuf;

use anyhow::Context;
use ct_core::app_dirs::AppDirs;
use ct_core::ports::AppDirsPort;
use ct_platform::app_dirs::DirsAppDirsAdapter;

pub use self::config::load_config;
pub use self::run::{hold_clipboard_until_replaced, run_app};
pub use self::runtime::{AppRuntime, UseCases};
pub use self::tracing::init_tracing_subscriber;
pub use self::wiring::{wire_runtime, PlatformHandles};

/// Resolves and creates the config directory. An explicit `--config-dir`
/// wins over the environment and the platform default.
pub fn resolve_app_dirs(config_dir: Option<PathBuf>) -> anyhow::Result<AppDirs> {
    let adapter = match config_dir {
        Some(dir) => DirsAppDirsAdapter::with_config_dir(dir),
        None => DirsAppDirsAdapter::new(),
    };
    adapter
        .get_app_dirs()
        .context("Failed to prepare the config directory")
}
