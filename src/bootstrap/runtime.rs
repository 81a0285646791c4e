use ct_app::usecases::{
    CaptureClipboardText, ClearClipHistory, CopyClipContent, ListClipHistory, MarkClipSecret,
};
use ct_app::AppDeps;
use ct_core::AppConfig;

/// The assembled application: ports plus the loaded configuration.
pub struct AppRuntime {
    pub deps: AppDeps,
    pub config: AppConfig,
}

impl AppRuntime {
    pub fn new(deps: AppDeps, config: AppConfig) -> Self {
        Self { deps, config }
    }

    /// Get use cases accessor.
    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

/// Builds use cases from the runtime's ports, so commands never touch the
/// ports directly.
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn capture_clipboard_text(&self) -> CaptureClipboardText {
        let deps = &self.runtime.deps;
        CaptureClipboardText::from_ports(
            deps.store.clone(),
            deps.hasher.clone(),
            deps.clock.clone(),
            deps.events.clone(),
        )
        .with_preview_chars(self.runtime.config.watch.preview_chars)
    }

    pub fn list_clip_history(&self) -> ListClipHistory {
        ListClipHistory::from_arc(self.runtime.deps.store.clone())
    }

    pub fn mark_clip_secret(&self) -> MarkClipSecret {
        MarkClipSecret::from_arc(self.runtime.deps.store.clone())
    }

    pub fn clear_clip_history(&self) -> ClearClipHistory {
        ClearClipHistory::from_arc(self.runtime.deps.store.clone())
    }

    pub fn copy_clip_content(&self) -> CopyClipContent {
        CopyClipContent::from_arc(self.runtime.deps.clipboard.clone())
    }
}
