use async_trait::async_trait;

use crate::clipboard::{ClipRecord, ContentHash};
use crate::ports::errors::StoreError;

/// Persistence contract for clip records.
///
/// Every mutating call runs in its own transaction; there is no multi-key
/// batch. Implementations rely on their backend's transaction locking and
/// are safe to share between tasks.
#[async_trait]
pub trait ClipRecordStorePort: Send + Sync {
    /// Writes `record` under `key`, silently replacing any existing value.
    async fn create(&self, key: &ContentHash, record: &ClipRecord) -> Result<(), StoreError>;

    /// Reads one record; `NotFound` when absent.
    async fn read(&self, key: &ContentHash) -> Result<ClipRecord, StoreError>;

    /// Every decodable record in the namespace, in unspecified order.
    ///
    /// Entries that fail to decode are logged and skipped. Each record's
    /// `content_hash` is its store key.
    async fn read_all(&self) -> Result<Vec<ClipRecord>, StoreError>;

    /// Same write as [`create`](Self::create); the caller asserts `key`
    /// already represents this item. No existence check is made.
    async fn update(&self, key: &ContentHash, record: &ClipRecord) -> Result<(), StoreError>;

    /// Sets `is_secret` on an existing record in one read-modify-write
    /// transaction. Idempotent; `NotFound` leaves the store untouched.
    async fn mark_secret(&self, key: &ContentHash) -> Result<(), StoreError>;

    /// Drops every record in the namespace at once.
    async fn delete_all(&self) -> Result<(), StoreError>;
}
