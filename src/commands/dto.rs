use ct_core::ClipRecord;
use serde::{Deserialize, Serialize};

/// Clip record as handed to shell front-ends.
///
/// Field names follow the stored JSON layout, plus the record key as `hash`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipRecordDto {
    pub hash: String,
    pub content: String,
    pub timestamp: i64,
    pub application: Option<String>,
    pub is_secret: bool,
    pub tag: Vec<String>,
}

impl From<ClipRecord> for ClipRecordDto {
    fn from(record: ClipRecord) -> Self {
        Self {
            hash: record.content_hash.into_inner(),
            content: record.content,
            timestamp: record.timestamp_ms,
            application: record.application,
            is_secret: record.is_secret,
            tag: record.tags,
        }
    }
}
