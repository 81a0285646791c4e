use std::sync::Arc;

use anyhow::Context;
use ct_app::runtime::{ClipboardWatchLoop, HotkeyListener};
use ct_platform::clipboard::ChangeFilter;
use ct_platform::runtime::{AppEventReceiver, ClipboardWatchRuntime};
use tokio::sync::broadcast::error::RecvError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::{AppRuntime, PlatformHandles};

/// Runs the clipboard watch loop and the hotkey listener until Ctrl-C.
pub async fn run_app(runtime: Arc<AppRuntime>, platform: PlatformHandles) -> anyhow::Result<()> {
    let cancel = CancellationToken::new();

    let watch = ClipboardWatchRuntime::new(runtime.deps.clipboard.clone(), platform.filter.clone())
        .start(cancel.clone())
        .context("Clipboard watching is required")?;

    let event_log = tokio::spawn(log_events(platform.events.subscribe(), cancel.clone()));

    let capture = runtime.usecases().capture_clipboard_text();
    let watch_loop =
        tokio::spawn(ClipboardWatchLoop::new(capture, watch.changes).run(cancel.clone()));

    let hotkey_config = &runtime.config.hotkey;
    let hotkey_listener = if hotkey_config.enabled {
        let listener = HotkeyListener::new(
            runtime.deps.hotkey.clone(),
            runtime.deps.events.clone(),
            hotkey_config.binding.clone(),
        );
        Some(tokio::spawn(listener.run(cancel.clone())))
    } else {
        info!("Global hotkey disabled by config");
        None
    };

    info!("cliptrail running, press Ctrl-C to stop");
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;
    info!("Shutting down");
    cancel.cancel();

    if let Err(e) = watch_loop.await {
        warn!(error = %e, "Clipboard watch loop task failed");
    }
    if let Some(task) = hotkey_listener {
        if let Err(e) = task.await {
            warn!(error = %e, "Hotkey listener task failed");
        }
    }
    if let Err(e) = watch.join.await {
        warn!(error = %e, "Clipboard watcher thread failed");
    }
    let _ = event_log.await;

    Ok(())
}

/// Keeps serving the text this process just copied until another client
/// replaces it or Ctrl-C arrives.
///
/// An X11 selection only lives as long as its owner, so a one-shot `copy`
/// would otherwise take the text with it on exit.
pub async fn hold_clipboard_until_replaced(runtime: Arc<AppRuntime>) -> anyhow::Result<()> {
    let cancel = CancellationToken::new();

    // A plain filter: the marker file belongs to the running watcher.
    let mut watch = ClipboardWatchRuntime::new(runtime.deps.clipboard.clone(), ChangeFilter::new())
        .start(cancel.clone())
        .context("Cannot keep the copied text on the clipboard")?;

    info!("Copied text stays available until the clipboard changes, press Ctrl-C to release");
    tokio::select! {
        changed = watch.changes.recv() => {
            if changed.is_some() {
                debug!("Clipboard taken over by another client");
            }
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl-C")?;
            debug!("Clipboard released on Ctrl-C");
        }
    }

    cancel.cancel();
    if let Err(e) = watch.join.await {
        warn!(error = %e, "Clipboard watcher thread failed");
    }
    Ok(())
}

/// Stands in for a UI: reports every notification in the log.
async fn log_events(mut events: AppEventReceiver, cancel: CancellationToken) {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            received = events.recv() => match received {
                Ok(event) => info!(event = event.name(), ?event, "Notification"),
                Err(RecvError::Lagged(skipped)) => debug!(skipped, "Notification log lagged"),
                Err(RecvError::Closed) => break,
            },
        }
    }
}
