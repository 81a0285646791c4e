//! Maps clip records to key/value rows.
//!
//! The value is a UTF-8 JSON object with the fields `application`,
//! `timestamp`, `content`, `is_secret` and `tag`. The key is the content hash
//! and is not repeated inside the value; on read it becomes the record's
//! `content_hash`.

use ct_core::clipboard::{ClipRecord, ContentHash};
use ct_core::ports::StoreError;
use serde::{Deserialize, Serialize};

use crate::db::models::{KvEntryRow, NewKvEntryRow};
use crate::db::ports::{InsertMapper, RowMapper};

#[derive(Serialize)]
struct StoredClipRecord<'a> {
    application: &'a str,
    timestamp: i64,
    content: &'a str,
    is_secret: bool,
    tag: &'a [String],
}

/// Lenient reader: older writers stored `tag: null`, an empty `application`
/// and a redundant `hash` field.
#[derive(Deserialize)]
struct LoadedClipRecord {
    #[serde(default)]
    application: Option<String>,
    timestamp: i64,
    content: String,
    #[serde(default)]
    is_secret: bool,
    #[serde(default)]
    tag: Option<Vec<String>>,
}

pub struct ClipRecordRowMapper {
    namespace: String,
}

impl ClipRecordRowMapper {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn encode(record: &ClipRecord) -> Result<Vec<u8>, StoreError> {
        let stored = StoredClipRecord {
            application: record.application.as_deref().unwrap_or(""),
            timestamp: record.timestamp_ms,
            content: &record.content,
            is_secret: record.is_secret,
            tag: &record.tags,
        };
        serde_json::to_vec(&stored).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    pub fn decode(key: &str, value: &[u8]) -> Result<ClipRecord, StoreError> {
        let loaded: LoadedClipRecord =
            serde_json::from_slice(value).map_err(|e| StoreError::Deserialization {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        Ok(ClipRecord {
            content_hash: ContentHash::from(key),
            content: loaded.content,
            timestamp_ms: loaded.timestamp,
            application: loaded.application.filter(|app| !app.is_empty()),
            is_secret: loaded.is_secret,
            tags: loaded.tag.unwrap_or_default(),
        })
    }
}

impl<'a> InsertMapper<(&'a ContentHash, &'a ClipRecord), NewKvEntryRow> for ClipRecordRowMapper {
    fn to_row(
        &self,
        domain: &(&'a ContentHash, &'a ClipRecord),
    ) -> Result<NewKvEntryRow, StoreError> {
        let (key, record) = *domain;
        Ok(NewKvEntryRow {
            namespace: self.namespace.clone(),
            entry_key: key.to_string(),
            value: Self::encode(record)?,
        })
    }
}

impl RowMapper<KvEntryRow, ClipRecord> for ClipRecordRowMapper {
    fn to_domain(&self, row: &KvEntryRow) -> Result<ClipRecord, StoreError> {
        Self::decode(&row.entry_key, &row.value)
    }
}
