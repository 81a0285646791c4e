//! Clipboard history commands.

use std::sync::Arc;

use ct_core::ContentHash;
use tracing::{error, info_span, Instrument};

use super::{map_err, ClipRecordDto};
use crate::bootstrap::AppRuntime;

const EMPTY_JSON_LIST: &str = "[]";

pub struct ClipCommands {
    runtime: Arc<AppRuntime>,
}

impl ClipCommands {
    pub fn new(runtime: Arc<AppRuntime>) -> Self {
        Self { runtime }
    }

    /// Full history, newest first.
    pub async fn list_records(&self) -> Result<Vec<ClipRecordDto>, String> {
        let span = info_span!("command.clipboard.list_records");
        async move {
            let records = self
                .runtime
                .usecases()
                .list_clip_history()
                .execute()
                .await
                .map_err(|e| {
                    error!(error = %format!("{e:#}"), "Failed to list clip records");
                    map_err(e)
                })?;
            Ok(records.into_iter().map(ClipRecordDto::from).collect())
        }
        .instrument(span)
        .await
    }

    /// Full history as a JSON array; `[]` when the history cannot be read.
    pub async fn list_records_json(&self) -> String {
        let records = match self.list_records().await {
            Ok(records) => records,
            Err(_) => return EMPTY_JSON_LIST.to_string(),
        };
        serde_json::to_string(&records).unwrap_or_else(|e| {
            error!(error = %e, "Failed to encode clip records");
            EMPTY_JSON_LIST.to_string()
        })
    }

    /// Puts `text` on the OS clipboard without recording it again.
    pub fn copy_record_content(&self, text: &str) -> Result<(), String> {
        self.runtime
            .usecases()
            .copy_clip_content()
            .execute(text)
            .map_err(map_err)
    }

    pub async fn mark_secret(&self, key: &str) -> Result<(), String> {
        self.runtime
            .usecases()
            .mark_clip_secret()
            .execute(&ContentHash::from(key))
            .await
            .map_err(map_err)
    }

    pub async fn clear_all(&self) -> Result<(), String> {
        self.runtime
            .usecases()
            .clear_clip_history()
            .execute()
            .await
            .map_err(map_err)
    }
}
