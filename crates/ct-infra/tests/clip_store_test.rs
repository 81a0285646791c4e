//! Integration tests for the SQLite clip store.

use std::sync::Arc;

use ct_core::clipboard::{ClipRecord, ContentHash};
use ct_core::ports::{ClipRecordStorePort, StoreError};
use ct_infra::ClipStore;
use tempfile::TempDir;

fn open_store() -> (TempDir, ClipStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ClipStore::open(&dir.path().join("cliptrail.db")).expect("open store");
    (dir, store)
}

fn record(key: &str, content: &str, ts: i64) -> (ContentHash, ClipRecord) {
    let hash = ContentHash::from(key);
    (hash.clone(), ClipRecord::captured(hash, content, ts))
}

#[tokio::test]
async fn create_then_read_round_trips_all_fields() {
    let (_dir, store) = open_store();
    let (key, mut rec) = record("k1", "multi\nline text", 1000);
    rec.application = Some("Terminal".to_string());
    rec.tags = vec!["a".to_string(), "b".to_string()];

    store.create(&key, &rec).await.unwrap();
    let loaded = store.read(&key).await.unwrap();

    assert_eq!(loaded, rec);
}

#[tokio::test]
async fn create_overwrites_existing_key() {
    let (_dir, store) = open_store();
    let (key, first) = record("same", "hello", 1000);
    let (_, second) = record("same", "hello", 2000);

    store.create(&key, &first).await.unwrap();
    store.mark_secret(&key).await.unwrap();
    store.create(&key, &second).await.unwrap();

    let all = store.read_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].timestamp_ms, 2000);
    assert!(!all[0].is_secret, "overwrite replaces the whole record");
}

#[tokio::test]
async fn read_missing_key_is_not_found() {
    let (_dir, store) = open_store();

    let err = store.read(&ContentHash::from("nope")).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(ref k) if k == "nope"));
}

#[tokio::test]
async fn read_all_assigns_key_as_content_hash() {
    let (_dir, store) = open_store();
    let (key, mut rec) = record("the-key", "body", 5);
    rec.content_hash = ContentHash::from("something-else");

    store.create(&key, &rec).await.unwrap();
    let all = store.read_all().await.unwrap();

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].content_hash, key);
}

#[tokio::test]
async fn update_writes_without_existence_check() {
    let (_dir, store) = open_store();
    let (key, mut rec) = record("u", "original", 1);

    store.update(&key, &rec).await.unwrap();
    rec.tags.push("edited".to_string());
    store.update(&key, &rec).await.unwrap();

    let loaded = store.read(&key).await.unwrap();
    assert_eq!(loaded.tags, vec!["edited".to_string()]);
}

#[tokio::test]
async fn mark_secret_is_idempotent() {
    let (_dir, store) = open_store();
    let (key, rec) = record("s", "password123", 1);
    store.create(&key, &rec).await.unwrap();

    store.mark_secret(&key).await.unwrap();
    store.mark_secret(&key).await.unwrap();

    let loaded = store.read(&key).await.unwrap();
    assert!(loaded.is_secret);
    assert_eq!(loaded.content, "password123");
    assert_eq!(loaded.timestamp_ms, 1);
}

#[tokio::test]
async fn mark_secret_missing_key_writes_nothing() {
    let (_dir, store) = open_store();

    let err = store.mark_secret(&ContentHash::from("ghost")).await.unwrap_err();

    assert!(err.is_not_found());
    assert!(store.read_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_all_empties_namespace_and_store_stays_writable() {
    let (_dir, store) = open_store();
    for (i, key) in ["a", "b", "c"].iter().enumerate() {
        let (k, r) = record(key, key, i as i64);
        store.create(&k, &r).await.unwrap();
    }

    store.delete_all().await.unwrap();
    assert!(store.read_all().await.unwrap().is_empty());

    let (k, r) = record("after", "after", 10);
    store.create(&k, &r).await.unwrap();
    assert_eq!(store.read_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn reopening_keeps_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("persist.db");
    let (key, rec) = record("persist", "persisted", 77);

    {
        let store = ClipStore::open(&path).unwrap();
        store.create(&key, &rec).await.unwrap();
    }

    let store = ClipStore::open(&path).unwrap();
    assert_eq!(store.read(&key).await.unwrap(), rec);
}

#[test]
fn open_fails_for_unusable_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-parent").join("x.db");

    let result = ClipStore::open(&path);

    assert!(matches!(result, Err(ct_core::ports::InitError::Store { .. })));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writers_from_two_handles_all_succeed() {
    const WRITERS: usize = 8;
    const ROUNDS: usize = 200;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.db");
    // Two handles on one file stand in for the watcher and a second process.
    let stores = [
        Arc::new(ClipStore::open(&path).unwrap()),
        Arc::new(ClipStore::open(&path).unwrap()),
    ];
    let (shared_key, shared) = record("shared", "shared", 0);
    stores[0].create(&shared_key, &shared).await.unwrap();

    let mut tasks = Vec::with_capacity(WRITERS);
    for writer in 0..WRITERS {
        let store = Arc::clone(&stores[writer % stores.len()]);
        let shared_key = shared_key.clone();
        tasks.push(tokio::spawn(async move {
            let mut failures = Vec::new();
            for round in 0..ROUNDS {
                let name = format!("w{writer}-r{round}");
                let (key, rec) = record(&name, &name, (writer * ROUNDS + round) as i64);
                if let Err(err) = store.create(&key, &rec).await {
                    failures.push(format!("create {name}: {err}"));
                }
                if let Err(err) = store.mark_secret(&shared_key).await {
                    failures.push(format!("mark_secret round {round}: {err}"));
                }
            }
            failures
        }));
    }

    let mut failures = Vec::new();
    for task in tasks {
        failures.extend(task.await.unwrap());
    }
    assert!(failures.is_empty(), "writes failed under contention: {failures:?}");

    let all = stores[1].read_all().await.unwrap();
    assert_eq!(all.len(), WRITERS * ROUNDS + 1);
    assert!(stores[0].read(&shared_key).await.unwrap().is_secret);
}
