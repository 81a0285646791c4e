//! Clip record store on top of a single SQLite file.
//!
//! The store models a key/value database with named namespaces: one row in
//! `kv_namespace` per namespace, entries in `kv_entry`. All clip records live
//! in [`CLIP_NAMESPACE`]. Each operation runs in its own transaction. Writers
//! take the write lock up front so concurrent writers queue on the busy timeout
//! instead of failing a lock upgrade.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use ct_core::clipboard::{ClipRecord, ContentHash, CLIP_NAMESPACE};
use ct_core::ports::{ClipRecordStorePort, InitError, StoreError};
use diesel::prelude::*;
use tracing::{debug, debug_span, info, warn};

use crate::db::mappers::ClipRecordRowMapper;
use crate::db::models::{KvEntryRow, NewKvEntryRow, NewKvNamespaceRow};
use crate::db::pool::init_db_pool;
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::{kv_entry, kv_namespace};
use crate::db::DieselSqliteExecutor;

/// The production store: pooled SQLite connections plus the JSON row mapper.
pub type ClipStore = DieselClipRecordStore<DieselSqliteExecutor, ClipRecordRowMapper>;

pub struct DieselClipRecordStore<E, M> {
    executor: E,
    mapper: M,
    namespace: String,
}

/// Error raised inside a diesel transaction closure.
enum TxError {
    Store(StoreError),
    Db(diesel::result::Error),
}

impl From<diesel::result::Error> for TxError {
    fn from(err: diesel::result::Error) -> Self {
        TxError::Db(err)
    }
}

impl From<StoreError> for TxError {
    fn from(err: StoreError) -> Self {
        TxError::Store(err)
    }
}

impl From<TxError> for StoreError {
    fn from(err: TxError) -> Self {
        match err {
            TxError::Store(err) => err,
            TxError::Db(err) => StoreError::Backend(err.to_string()),
        }
    }
}

impl ClipStore {
    /// Opens (or creates) the store file at `path` and makes sure the clip
    /// namespace exists.
    ///
    /// Failure is an [`InitError::Store`]; callers are expected to abort
    /// startup rather than run without storage.
    pub fn open(path: &Path) -> Result<Self, InitError> {
        let init_err = |message: String| InitError::Store {
            path: path.to_path_buf(),
            message,
        };

        let url = path
            .to_str()
            .ok_or_else(|| init_err("path is not valid UTF-8".to_string()))?;
        let pool = init_db_pool(url).map_err(|e| init_err(format!("{e:#}")))?;

        let store = DieselClipRecordStore::new(
            DieselSqliteExecutor::new(pool),
            ClipRecordRowMapper::new(CLIP_NAMESPACE),
            CLIP_NAMESPACE,
        );
        store
            .create_namespace_if_absent()
            .map_err(|e| init_err(e.to_string()))?;

        info!(path = %path.display(), namespace = CLIP_NAMESPACE, "Clip store opened");
        Ok(store)
    }
}

impl<E, M> DieselClipRecordStore<E, M>
where
    E: DbExecutor,
{
    pub fn new(executor: E, mapper: M, namespace: impl Into<String>) -> Self {
        Self {
            executor,
            mapper,
            namespace: namespace.into(),
        }
    }

    fn create_namespace_if_absent(&self) -> Result<(), StoreError> {
        self.executor.run(|conn| {
            diesel::insert_or_ignore_into(kv_namespace::table)
                .values(&self.namespace_row())
                .execute(conn)
                .map_err(|e| StoreError::Backend(e.to_string()))?;
            Ok(())
        })
    }

    fn namespace_row(&self) -> NewKvNamespaceRow {
        NewKvNamespaceRow {
            name: self.namespace.clone(),
            created_at_ms: Utc::now().timestamp_millis(),
        }
    }

    fn ensure_namespace(&self, conn: &mut SqliteConnection) -> Result<(), TxError> {
        let exists: bool = diesel::select(diesel::dsl::exists(
            kv_namespace::table.filter(kv_namespace::name.eq(&self.namespace)),
        ))
        .get_result(conn)?;

        if exists {
            Ok(())
        } else {
            Err(StoreError::StoreUnavailable(self.namespace.clone()).into())
        }
    }

    fn find_row(
        &self,
        conn: &mut SqliteConnection,
        key: &ContentHash,
    ) -> Result<Option<KvEntryRow>, TxError> {
        let row = kv_entry::table
            .filter(kv_entry::namespace.eq(&self.namespace))
            .filter(kv_entry::entry_key.eq(key.as_str()))
            .select(KvEntryRow::as_select())
            .first(conn)
            .optional()?;
        Ok(row)
    }

    fn put_row(&self, row: NewKvEntryRow) -> Result<(), StoreError> {
        self.executor.run(|conn| {
            conn.immediate_transaction::<_, TxError, _>(|conn| {
                self.ensure_namespace(conn)?;
                diesel::replace_into(kv_entry::table)
                    .values(&row)
                    .execute(conn)?;
                Ok(())
            })
            .map_err(StoreError::from)
        })
    }
}

#[async_trait]
impl<E, M> ClipRecordStorePort for DieselClipRecordStore<E, M>
where
    E: DbExecutor,
    for<'a> M: InsertMapper<(&'a ContentHash, &'a ClipRecord), NewKvEntryRow>
        + RowMapper<KvEntryRow, ClipRecord>,
{
    async fn create(&self, key: &ContentHash, record: &ClipRecord) -> Result<(), StoreError> {
        let span = debug_span!("infra.sqlite.create_clip_record", table = "kv_entry", key = %key);
        let _enter = span.enter();

        let row = self.mapper.to_row(&(key, record))?;
        self.put_row(row)
    }

    async fn read(&self, key: &ContentHash) -> Result<ClipRecord, StoreError> {
        let row = self.executor.run(|conn| {
            conn.transaction::<_, TxError, _>(|conn| {
                self.ensure_namespace(conn)?;
                self.find_row(conn, key)
            })
            .map_err(StoreError::from)
        })?;

        match row {
            Some(row) => self.mapper.to_domain(&row),
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    async fn read_all(&self) -> Result<Vec<ClipRecord>, StoreError> {
        let span = debug_span!("infra.sqlite.read_all_clip_records", table = "kv_entry");
        let _enter = span.enter();

        let rows = self.executor.run(|conn| {
            conn.transaction::<_, TxError, _>(|conn| {
                self.ensure_namespace(conn)?;
                let rows = kv_entry::table
                    .filter(kv_entry::namespace.eq(&self.namespace))
                    .select(KvEntryRow::as_select())
                    .load(conn)?;
                Ok(rows)
            })
            .map_err(StoreError::from)
        })?;

        let total = rows.len();
        let records: Vec<ClipRecord> = rows
            .iter()
            .filter_map(|row| match self.mapper.to_domain(row) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(key = %row.entry_key, error = %err, "Skipping undecodable clip record");
                    None
                }
            })
            .collect();

        debug!(total, decoded = records.len(), "Scanned clip namespace");
        Ok(records)
    }

    async fn update(&self, key: &ContentHash, record: &ClipRecord) -> Result<(), StoreError> {
        let row = self.mapper.to_row(&(key, record))?;
        self.put_row(row)
    }

    async fn mark_secret(&self, key: &ContentHash) -> Result<(), StoreError> {
        let span = debug_span!("infra.sqlite.mark_clip_secret", table = "kv_entry", key = %key);
        let _enter = span.enter();

        self.executor.run(|conn| {
            conn.immediate_transaction::<_, TxError, _>(|conn| {
                self.ensure_namespace(conn)?;
                let row = self
                    .find_row(conn, key)?
                    .ok_or_else(|| StoreError::NotFound(key.to_string()))?;

                let mut record = self.mapper.to_domain(&row)?;
                if !record.mark_secret() {
                    debug!("Clip record already secret");
                    return Ok(());
                }

                let updated = self.mapper.to_row(&(key, &record))?;
                diesel::replace_into(kv_entry::table)
                    .values(&updated)
                    .execute(conn)?;
                Ok(())
            })
            .map_err(StoreError::from)
        })
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        let span = debug_span!("infra.sqlite.delete_clip_namespace", namespace = %self.namespace);
        let _enter = span.enter();

        // Drop the namespace and recreate it empty so later captures still land.
        self.executor.run(|conn| {
            conn.immediate_transaction::<_, TxError, _>(|conn| {
                self.ensure_namespace(conn)?;
                diesel::delete(kv_entry::table.filter(kv_entry::namespace.eq(&self.namespace)))
                    .execute(conn)?;
                diesel::delete(kv_namespace::table.filter(kv_namespace::name.eq(&self.namespace)))
                    .execute(conn)?;
                diesel::insert_into(kv_namespace::table)
                    .values(&self.namespace_row())
                    .execute(conn)?;
                Ok(())
            })
            .map_err(StoreError::from)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_temp() -> (TempDir, ClipStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ClipStore::open(&dir.path().join("clips.db")).unwrap();
        (dir, store)
    }

    fn put_raw(store: &ClipStore, key: &str, value: &[u8]) {
        store
            .put_row(NewKvEntryRow {
                namespace: CLIP_NAMESPACE.to_string(),
                entry_key: key.to_string(),
                value: value.to_vec(),
            })
            .unwrap();
    }

    fn captured(key: &str, ts: i64) -> (ContentHash, ClipRecord) {
        let hash = ContentHash::from(key);
        let record = ClipRecord::captured(hash.clone(), key, ts);
        (hash, record)
    }

    #[tokio::test]
    async fn read_all_skips_corrupt_entries() {
        let (_dir, store) = open_temp();
        let (k1, r1) = captured("one", 1);
        let (k2, r2) = captured("two", 2);
        store.create(&k1, &r1).await.unwrap();
        store.create(&k2, &r2).await.unwrap();
        put_raw(&store, "broken", b"\x00not-json");

        let mut records = store.read_all().await.unwrap();
        records.sort_by_key(|r| r.timestamp_ms);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].content_hash, k1);
        assert_eq!(records[1].content_hash, k2);
    }

    #[tokio::test]
    async fn read_of_corrupt_entry_is_deserialization_error() {
        let (_dir, store) = open_temp();
        put_raw(&store, "broken", b"{");

        let err = store.read(&ContentHash::from("broken")).await.unwrap_err();
        assert!(matches!(err, StoreError::Deserialization { .. }));
    }

    #[tokio::test]
    async fn mark_secret_on_corrupt_entry_leaves_bytes_untouched() {
        let (_dir, store) = open_temp();
        put_raw(&store, "broken", b"{");

        let err = store.mark_secret(&ContentHash::from("broken")).await.unwrap_err();
        assert!(matches!(err, StoreError::Deserialization { .. }));

        let raw = store
            .executor
            .run(|conn| {
                store
                    .find_row(conn, &ContentHash::from("broken"))
                    .map_err(StoreError::from)
            })
            .unwrap()
            .unwrap();
        assert_eq!(raw.value, b"{".to_vec());
    }

    #[tokio::test]
    async fn missing_namespace_reports_store_unavailable() {
        let (_dir, store) = open_temp();
        store
            .executor
            .run(|conn| {
                diesel::delete(kv_namespace::table)
                    .execute(conn)
                    .map_err(|e| StoreError::Backend(e.to_string()))
            })
            .unwrap();

        let (key, record) = captured("x", 1);
        let err = store.create(&key, &record).await.unwrap_err();
        assert!(matches!(err, StoreError::StoreUnavailable(ref ns) if ns == CLIP_NAMESPACE));
        assert!(matches!(
            store.read_all().await.unwrap_err(),
            StoreError::StoreUnavailable(_)
        ));
    }
}
