use std::sync::Arc;

use anyhow::{Context, Result};
use ct_core::ports::ClipRecordStorePort;
use tracing::info;

/// Removes every record at once. There is no single-record delete.
pub struct ClearClipHistory {
    store: Arc<dyn ClipRecordStorePort>,
}

impl ClearClipHistory {
    pub fn from_arc(store: Arc<dyn ClipRecordStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<()> {
        self.store
            .delete_all()
            .await
            .context("Failed to clear clipboard history")?;
        info!("Clipboard history cleared");
        Ok(())
    }
}
