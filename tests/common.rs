#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn plog() -> Command {
    cargo_bin_cmd!("punchlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique fake home dir for tests that touch the config file
pub fn setup_test_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchlog_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path.to_string_lossy().to_string()
}

/// Initialize DB (creates tables via migrations)
pub fn init_db(db_path: &str) {
    plog()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add a small two-day dataset useful for many tests
pub fn init_db_with_punches(db_path: &str) {
    init_db(db_path);

    for args in [
        ["punch", "in", "--date", "2024-01-01", "--at", "08:05"],
        ["punch", "out", "--date", "2024-01-01", "--at", "17:30"],
        ["punch", "in", "--date", "2024-01-02", "--at", "09:31"],
        ["punch", "out", "--date", "2024-01-02", "--at", "17:00"],
    ] {
        plog()
            .args(["--db", db_path])
            .args(args)
            .assert()
            .success();
    }
}

/// Populate many punches directly via the library DB API for larger datasets
pub fn populate_many_punches(db_path: &str, n: usize) {
    let pool = punchlog::db::pool::DbPool::new(db_path).expect("open db");
    punchlog::db::initialize::init_db(&pool.conn).expect("init db");
    for i in 0..n {
        // generate dates in a range
        let day = (i % 28) + 1; // 1..28
        let date = format!("2025-11-{day:02}");
        punchlog::db::add_punch(&pool.conn, "default", &date, "09:00", "in", Some("ontime"))
            .expect("add punch");
    }
}
