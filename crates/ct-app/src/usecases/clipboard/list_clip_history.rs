use std::sync::Arc;

use anyhow::{Context, Result};
use ct_core::clipboard::{sort_newest_first, ClipRecord};
use ct_core::ports::ClipRecordStorePort;

/// Full clipboard history, newest first.
///
/// Records with equal timestamps keep the store's scan order, which is
/// unspecified.
pub struct ListClipHistory {
    store: Arc<dyn ClipRecordStorePort>,
}

impl ListClipHistory {
    pub fn from_arc(store: Arc<dyn ClipRecordStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Vec<ClipRecord>> {
        let mut records = self
            .store
            .read_all()
            .await
            .context("Failed to read clipboard history")?;
        sort_newest_first(&mut records);
        Ok(records)
    }
}
