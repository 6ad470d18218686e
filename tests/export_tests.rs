use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{add, init_db_with_data, rcl, setup_test_db, temp_out};

#[test]
fn test_export_csv_selected_month() {
    let db_path = setup_test_db("export_csv_month");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_month", "csv");

    rcl()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--month", "2025-09",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv file");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("date,login_time,login_time_seconds,call_count")
    );
    assert!(content.contains("2025-09-01,08:00:00,28800,40"));
    assert!(content.contains("2025-09-15,07:30:15,27015,35"));
    assert!(!content.contains("2025-10-02"));
}

#[test]
fn test_export_defaults_to_latest_month() {
    let db_path = setup_test_db("export_latest_month");
    init_db_with_data(&db_path);

    let out = temp_out("export_latest_month", "csv");

    rcl()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("csv file");
    assert!(content.contains("2025-10-02"));
    assert!(!content.contains("2025-09-01"));
}

#[test]
fn test_export_json_contains_summary() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);

    let out = temp_out("export_json", "json");

    rcl()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "-m", "2025-09",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("json file");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(v["month"], "2025-09");
    assert_eq!(v["month_label"], "September 2025");
    assert_eq!(v["summary"]["days"], 2);
    assert_eq!(v["summary"]["total_calls"], 75);
    assert_eq!(v["summary"]["total_login"], "15:30:15");
    assert_eq!(v["summary"]["salary"]["bonus"], 0.0);

    let entries = v["entries"].as_array().expect("entries array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["date"], "2025-09-15");
    assert_eq!(entries[1]["date"], "2025-09-01");
}

#[test]
fn test_export_pdf_is_written() {
    let db_path = setup_test_db("export_pdf");
    init_db_with_data(&db_path);

    let out = temp_out("export_pdf", "pdf");

    rcl()
        .args([
            "--db", &db_path, "export", "--format", "pdf", "--file", &out, "--month", "2025-09",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("pdf file");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_pdf_many_rows() {
    let db_path = setup_test_db("export_pdf_many_rows");
    for d in 1..=31 {
        add(&db_path, &format!("2025-01-{:02}", d), "08:00:00", "30");
    }

    let out = temp_out("export_pdf_many_rows", "pdf");

    rcl()
        .args(["--db", &db_path, "export", "--format", "pdf", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("pdf file");
    assert!(bytes.starts_with(b"%PDF"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Page 2 of 2"));
}

#[test]
fn test_export_xlsx_is_written() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_data(&db_path);

    let out = temp_out("export_xlsx", "xlsx");

    rcl()
        .args([
            "--db", &db_path, "export", "--format", "xlsx", "--file", &out, "--month", "2025-09",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("xlsx file");
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative_path");
    init_db_with_data(&db_path);

    rcl()
        .args(["--db", &db_path, "export", "--file", "report.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_month_writes_nothing() {
    let db_path = setup_test_db("export_empty_month");
    init_db_with_data(&db_path);

    let out = temp_out("export_empty_month", "csv");

    rcl()
        .args([
            "--db", &db_path, "export", "--file", &out, "--month", "2024-01",
        ])
        .assert()
        .success()
        .stdout(contains("Nothing to export"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let db_path = setup_test_db("export_existing_file");
    init_db_with_data(&db_path);

    let out = temp_out("export_existing_file", "csv");
    fs::write(&out, "keep me").unwrap();

    rcl()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rcl()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("already exists").not());
    assert!(fs::read_to_string(&out).unwrap().contains("2025-10-02"));
}
