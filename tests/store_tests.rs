mod common;
use common::{day, rec, setup_test_db, setup_test_dir};

use rcalllog::db::SqliteBackend;
use rcalllog::errors::AppError;
use rcalllog::store::{DEFAULT_STORAGE_KEY, FileBackend, KvBackend, MemoryBackend};
use rcalllog::{DailyRecord, RecordAction, RecordStore, SaveOutcome};

fn memory_store() -> RecordStore<MemoryBackend> {
    RecordStore::open(MemoryBackend::new(), DEFAULT_STORAGE_KEY).expect("open memory store")
}

fn dates(records: &[DailyRecord]) -> Vec<String> {
    records.iter().map(|r| r.date_str()).collect()
}

#[test]
fn test_empty_store_has_no_records() {
    let store = memory_store();
    assert!(store.records().is_empty());
    assert!(store.months_with_data().is_empty());
    assert_eq!(store.latest_month(), None);
    assert!(!store.is_corrupt());
}

#[test]
fn test_distinct_dates_are_unique_and_sorted_newest_first() {
    let mut store = memory_store();

    for d in ["2024-01-05", "2023-12-31", "2024-03-01", "2024-01-20", "2024-02-29"] {
        assert_eq!(store.upsert(rec(d, 3600, 10)).unwrap(), SaveOutcome::Created);
    }

    assert_eq!(
        dates(&store.records()),
        vec!["2024-03-01", "2024-02-29", "2024-01-20", "2024-01-05", "2023-12-31"]
    );

    // persisted blob follows the same order
    let raw = store
        .backend()
        .get(DEFAULT_STORAGE_KEY)
        .unwrap()
        .expect("blob written");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let persisted: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["date"].as_str().unwrap())
        .collect();
    assert_eq!(
        persisted,
        vec!["2024-03-01", "2024-02-29", "2024-01-20", "2024-01-05", "2023-12-31"]
    );
}

#[test]
fn test_same_date_replaces_record_wholesale() {
    let mut store = memory_store();

    store.upsert(rec("2024-01-05", 100, 1)).unwrap();
    let outcome = store.upsert(rec("2024-01-05", 200, 2)).unwrap();

    assert_eq!(outcome, SaveOutcome::Updated);
    assert_eq!(store.len(), 1);
    assert_eq!(
        store.record_by_date(day("2024-01-05")),
        Some(rec("2024-01-05", 200, 2))
    );
}

#[test]
fn test_deleted_flag_removes_existing_record() {
    let mut store = memory_store();

    store.save_record(rec("2024-01-05", 100, 1), false).unwrap();
    store.save_record(rec("2024-01-06", 100, 1), false).unwrap();

    let outcome = store.save_record(rec("2024-01-05", 0, 0), true).unwrap();

    assert_eq!(outcome, SaveOutcome::Removed);
    assert_eq!(store.record_by_date(day("2024-01-05")), None);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_deleted_flag_on_missing_date_is_noop() {
    let mut store = memory_store();
    store.upsert(rec("2024-01-05", 100, 1)).unwrap();

    let action = RecordAction::from_flagged(rec("2024-02-01", 0, 0), true);
    assert_eq!(action, RecordAction::Remove(day("2024-02-01")));

    let outcome = store.save(action).unwrap();

    assert_eq!(outcome, SaveOutcome::Unchanged);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_remove_then_lookup_is_absent() {
    let mut store = memory_store();
    store.upsert(rec("2024-01-05", 100, 1)).unwrap();

    assert_eq!(store.remove(day("2024-01-05")).unwrap(), SaveOutcome::Removed);
    assert_eq!(store.remove(day("2024-01-05")).unwrap(), SaveOutcome::Unchanged);
    assert!(store.record_by_date(day("2024-01-05")).is_none());
    assert!(store.is_empty());
}

#[test]
fn test_records_by_month_uses_zero_based_month() {
    let mut store = memory_store();
    for d in ["2023-12-31", "2024-01-01", "2024-01-31", "2024-02-01", "2025-01-15"] {
        store.upsert(rec(d, 60, 1)).unwrap();
    }

    let january = store.records_by_month(2024, 0);
    assert_eq!(dates(&january), vec!["2024-01-31", "2024-01-01"]);

    let december = store.records_by_month(2023, 11);
    assert_eq!(dates(&december), vec!["2023-12-31"]);

    assert!(store.records_by_month(2024, 5).is_empty());
    assert!(store.records_by_month(2024, 12).is_empty());
}

#[test]
fn test_months_with_data_distinct_newest_first() {
    let mut store = memory_store();
    for d in ["2024-01-05", "2024-01-20", "2024-03-01", "2023-12-31", "2024-03-15"] {
        store.upsert(rec(d, 60, 1)).unwrap();
    }

    assert_eq!(store.months_with_data(), vec!["2024-03", "2024-01", "2023-12"]);
    assert_eq!(
        store.latest_month().map(|m| m.to_string()),
        Some("2024-03".to_string())
    );
}

#[test]
fn test_login_time_over_a_day_is_rejected() {
    let mut store = memory_store();

    let err = store.upsert(rec("2024-01-05", 90_000, 1)).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(store.is_empty());
    assert!(store.backend().get(DEFAULT_STORAGE_KEY).unwrap().is_none());

    // a full day is still accepted
    store.upsert(rec("2024-01-05", 86_400, 1)).unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn test_persisted_shape_never_contains_deleted_flag() {
    let mut store = memory_store();
    store.upsert(rec("2024-01-05", 100, 7)).unwrap();

    let raw = store.backend().get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(
        raw,
        r#"[{"date":"2024-01-05","loginTimeSeconds":100,"callCount":7}]"#
    );
    assert!(!raw.contains("deleted"));
}

#[test]
fn test_existing_blob_is_loaded() {
    let blob = r#"[
        {"date":"2024-01-05","loginTimeSeconds":100,"callCount":1},
        {"date":"2024-02-10","loginTimeSeconds":200,"callCount":2}
    ]"#;
    let store = RecordStore::open(MemoryBackend::with_entry("dishtvRecords", blob), "dishtvRecords")
        .unwrap();

    assert_eq!(dates(&store.records()), vec!["2024-02-10", "2024-01-05"]);
}

#[test]
fn test_corrupt_blob_reads_empty_and_refuses_writes() {
    let backend = MemoryBackend::with_entry(DEFAULT_STORAGE_KEY, "{not json");
    let mut store = RecordStore::open(backend, DEFAULT_STORAGE_KEY).unwrap();

    assert!(store.is_corrupt());
    assert!(store.records().is_empty());
    assert!(store.record_by_date(day("2024-01-05")).is_none());

    let err = store.upsert(rec("2024-01-05", 100, 1)).unwrap_err();
    assert!(matches!(err, AppError::CorruptStore(_)));

    // the unreadable blob is left alone
    assert_eq!(
        store.backend().get(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
        Some("{not json")
    );
}

#[test]
fn test_reload_picks_up_external_changes() {
    let dir = setup_test_dir("store_reload_external");

    let mut store =
        RecordStore::open(FileBackend::open(&dir).unwrap(), DEFAULT_STORAGE_KEY).unwrap();
    store.upsert(rec("2024-01-05", 100, 1)).unwrap();
    store.upsert(rec("2024-01-06", 200, 2)).unwrap();

    // another writer replaces the blob under the open store
    let mut other = FileBackend::open(&dir).unwrap();
    other
        .set(
            DEFAULT_STORAGE_KEY,
            r#"[{"date":"2024-04-01","loginTimeSeconds":5,"callCount":5}]"#,
        )
        .unwrap();

    // the in-memory index is unchanged until reloaded
    assert_eq!(dates(&store.records()), vec!["2024-01-06", "2024-01-05"]);

    store.load().unwrap();
    assert_eq!(dates(&store.records()), vec!["2024-04-01"]);
    assert!(store.record_by_date(day("2024-01-05")).is_none());
    assert!(!store.is_corrupt());
}

#[test]
fn test_out_of_range_blob_is_treated_as_corrupt() {
    let blob = r#"[
        {"date":"2024-01-05","loginTimeSeconds":18446744073709551615,"callCount":1},
        {"date":"2024-01-06","loginTimeSeconds":10,"callCount":1}
    ]"#;
    let backend = MemoryBackend::with_entry(DEFAULT_STORAGE_KEY, blob);
    let mut store = RecordStore::open(backend, DEFAULT_STORAGE_KEY).unwrap();

    assert!(store.is_corrupt());
    assert!(store.records_by_month(2024, 0).is_empty());
    assert_eq!(
        rcalllog::core::aggregate::total_login_time(&store.records_by_month(2024, 0)),
        0
    );

    let err = store.upsert(rec("2024-01-07", 100, 1)).unwrap_err();
    assert!(matches!(err, AppError::CorruptStore(_)));
    assert_eq!(
        store.backend().get(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
        Some(blob)
    );
}

#[test]
fn test_blob_over_a_day_of_login_is_treated_as_corrupt() {
    let blob = r#"[{"date":"2024-01-05","loginTimeSeconds":86401,"callCount":1}]"#;
    let store =
        RecordStore::open(MemoryBackend::with_entry(DEFAULT_STORAGE_KEY, blob), DEFAULT_STORAGE_KEY)
            .unwrap();

    assert!(store.is_corrupt());
    assert!(store.is_empty());
}

#[test]
fn test_file_backend_persists_between_opens() {
    let dir = setup_test_dir("store_file_backend");

    {
        let backend = FileBackend::open(&dir).unwrap();
        let mut store = RecordStore::open(backend, DEFAULT_STORAGE_KEY).unwrap();
        store.upsert(rec("2024-01-05", 100, 1)).unwrap();
        store.upsert(rec("2024-01-06", 200, 2)).unwrap();
    }

    let backend = FileBackend::open(&dir).unwrap();
    assert!(backend.path_for(DEFAULT_STORAGE_KEY).exists());

    let store = RecordStore::open(backend, DEFAULT_STORAGE_KEY).unwrap();
    assert_eq!(dates(&store.records()), vec!["2024-01-06", "2024-01-05"]);
}

#[test]
fn test_sqlite_backend_persists_between_opens() {
    let db_path = setup_test_db("store_sqlite_backend");

    {
        let backend = SqliteBackend::open(&db_path).unwrap();
        let mut store = RecordStore::open(backend, DEFAULT_STORAGE_KEY).unwrap();
        store.upsert(rec("2024-01-05", 100, 1)).unwrap();
        store.upsert(rec("2024-01-05", 300, 3)).unwrap();
        store.upsert(rec("2024-01-07", 200, 2)).unwrap();
    }

    let backend = SqliteBackend::open(&db_path).unwrap();
    assert!(backend.updated_at(DEFAULT_STORAGE_KEY).unwrap().is_some());
    assert_eq!(backend.integrity_check().unwrap(), "ok");

    let store = RecordStore::open(backend, DEFAULT_STORAGE_KEY).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(
        store.record_by_date(day("2024-01-05")),
        Some(rec("2024-01-05", 300, 3))
    );
}

#[test]
fn test_sqlite_in_memory_keys_are_independent() {
    let backend = SqliteBackend::in_memory().unwrap();
    let mut a = RecordStore::open(backend, "agentA").unwrap();
    a.upsert(rec("2024-01-05", 100, 1)).unwrap();

    let backend = a.into_backend();
    let b = RecordStore::open(backend, "agentB").unwrap();
    assert!(b.is_empty());
}
