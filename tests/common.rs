#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rcalllog::DailyRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rcl() -> Command {
    cargo_bin_cmd!("rcalllog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcalllog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Same as `setup_test_db`, for the file backend (a directory)
pub fn setup_test_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcalllog_data", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn day(s: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn rec(date: &str, seconds: u64, calls: u32) -> DailyRecord {
    DailyRecord::new(day(date), seconds, calls)
}

pub fn add(db_path: &str, date: &str, login: &str, calls: &str) {
    rcl()
        .args([
            "--db", db_path, "add", date, "--login", login, "--calls", calls,
        ])
        .assert()
        .success();
}

/// Initialize the DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    rcl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    add(db_path, "2025-09-01", "08:00:00", "40");
    add(db_path, "2025-09-15", "07:30:15", "35");
    add(db_path, "2025-10-02", "06:00:00", "20");
}
