use std::sync::Arc;

use anyhow::{Context, Result};
use ct_core::ports::ClipRecordStorePort;
use ct_core::ContentHash;
use tracing::info;

/// Flags a stored record as secret. Marking twice is a no-op.
pub struct MarkClipSecret {
    store: Arc<dyn ClipRecordStorePort>,
}

impl MarkClipSecret {
    pub fn from_arc(store: Arc<dyn ClipRecordStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, key: &ContentHash) -> Result<()> {
        self.store
            .mark_secret(key)
            .await
            .with_context(|| format!("Failed to mark clip record {key} as secret"))?;
        info!(hash = %key, "Clip record marked secret");
        Ok(())
    }
}
