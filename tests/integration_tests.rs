use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, init_db_with_punches, plog, populate_many_punches, setup_test_db};

#[test]
fn test_punch_and_list_summaries() {
    let db_path = setup_test_db("punch_list");
    init_db_with_punches(&db_path);

    // 2024-01-02 check-in at 09:31 is 31 min past the default 09:00 start:
    // both default bands (10 → 100, 30 → 200) trigger.
    plog()
        .args(["--db", &db_path, "list", "--period", "2024-01"])
        .assert()
        .success()
        .stdout(contains("2024-01-01"))
        .stdout(contains("08:05"))
        .stdout(contains("17:30"))
        .stdout(contains("2024-01-02"))
        .stdout(contains("late"))
        .stdout(contains("300"))
        .stdout(contains("Days: 2"));
}

#[test]
fn test_punch_stamps_late_status() {
    let db_path = setup_test_db("late_stamp");
    init_db(&db_path);

    plog()
        .args([
            "--db", &db_path, "punch", "in", "--date", "2024-02-01", "--at", "09:31",
        ])
        .assert()
        .success()
        .stdout(contains("(late)"));

    plog()
        .args([
            "--db", &db_path, "punch", "in", "--date", "2024-02-02", "--at", "09:02",
        ])
        .assert()
        .success()
        .stdout(contains("(late)").not());
}

#[test]
fn test_earliest_in_latest_out_shown() {
    let db_path = setup_test_db("refinement");
    init_db(&db_path);

    for args in [
        ["punch", "in", "--date", "2024-03-04", "--at", "09:05"],
        ["punch", "in", "--date", "2024-03-04", "--at", "08:55"],
        ["punch", "out", "--date", "2024-03-04", "--at", "17:00"],
        ["punch", "out", "--date", "2024-03-04", "--at", "17:30"],
    ] {
        plog()
            .args(["--db", &db_path])
            .args(args)
            .assert()
            .success();
    }

    plog()
        .args(["--db", &db_path, "list", "--period", "2024-03-04"])
        .assert()
        .success()
        .stdout(contains("08:55"))
        .stdout(contains("17:30"))
        .stdout(contains("Days: 1"));
}

#[test]
fn test_list_raw_events() {
    let db_path = setup_test_db("raw_events");
    init_db_with_punches(&db_path);

    plog()
        .args(["--db", &db_path, "list", "--period", "2024-01", "--events"])
        .assert()
        .success()
        .stdout(contains("EVENTS:"))
        .stdout(contains("2024-01-01 08:05"));
}

#[test]
fn test_list_json_output() {
    let db_path = setup_test_db("json_out");
    init_db_with_punches(&db_path);

    plog()
        .args(["--db", &db_path, "list", "--period", "2024-01", "--json"])
        .assert()
        .success()
        .stdout(contains("\"total\": 2"))
        .stdout(contains("\"late\": 1"))
        .stdout(contains("\"total_deduction\": 300"));
}

#[test]
fn test_list_empty_period() {
    let db_path = setup_test_db("empty_period");
    init_db(&db_path);

    plog()
        .args(["--db", &db_path, "list", "--period", "2023-06"])
        .assert()
        .success()
        .stdout(contains("No events"));
}

#[test]
fn test_invalid_time_rejected() {
    let db_path = setup_test_db("bad_time");
    init_db(&db_path);

    plog()
        .args([
            "--db", &db_path, "punch", "in", "--date", "2024-02-01", "--at", "9am",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));
}

#[test]
fn test_invalid_punch_kind_rejected() {
    let db_path = setup_test_db("bad_kind");
    init_db(&db_path);

    plog()
        .args(["--db", &db_path, "punch", "sideways", "--date", "2024-02-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid punch kind"));
}

#[test]
fn test_del_all_events_for_date() {
    let db_path = setup_test_db("del_all");
    init_db_with_punches(&db_path);

    plog()
        .args(["--db", &db_path, "del", "2024-01-01"])
        .write_stdin("y\n")
        .assert()
        .success();

    plog()
        .args(["--db", &db_path, "list", "--period", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("No events"));

    // the other day is untouched
    plog()
        .args(["--db", &db_path, "list", "--period", "2024-01-02"])
        .assert()
        .success()
        .stdout(contains("Days: 1"));
}

#[test]
fn test_del_single_event_by_id() {
    let db_path = setup_test_db("del_by_id");
    init_db_with_punches(&db_path);

    // first inserted event is the 2024-01-01 check-in
    plog()
        .args(["--db", &db_path, "del", "2024-01-01", "--id", "1"])
        .write_stdin("y\n")
        .assert()
        .success();

    // the day survives with only its check-out
    plog()
        .args(["--db", &db_path, "list", "--period", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("--:--"))
        .stdout(contains("17:30"))
        .stdout(contains("Days: 1"));
}

#[test]
fn test_del_is_cancelled_without_confirmation() {
    let db_path = setup_test_db("del_cancel");
    init_db_with_punches(&db_path);

    plog()
        .args(["--db", &db_path, "del", "2024-01-01"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));

    plog()
        .args(["--db", &db_path, "list", "--period", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("Days: 1"));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_check");
    init_db_with_punches(&db_path);

    plog()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("decode cleanly"));

    plog()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total events"));
}

#[test]
fn test_log_records_punches() {
    let db_path = setup_test_db("log_print");
    init_db_with_punches(&db_path);

    plog()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("punch"))
        .stdout(contains("init"));
}

#[test]
fn test_list_many_days() {
    let db_path = setup_test_db("many_days");
    init_db(&db_path);
    populate_many_punches(&db_path, 28);

    plog()
        .args(["--db", &db_path, "list", "--period", "2025-11"])
        .assert()
        .success()
        .stdout(contains("Days: 28"));
}

#[test]
fn test_list_range_period() {
    let db_path = setup_test_db("range_period");
    init_db_with_punches(&db_path);

    plog()
        .args(["--db", &db_path, "list", "--period", "2023-12:2024-02"])
        .assert()
        .success()
        .stdout(contains("Days: 2"));
}

#[test]
fn test_malformed_event_aborts_listing() {
    let db_path = setup_test_db("malformed");
    init_db(&db_path);

    plog()
        .args([
            "--db", &db_path, "punch", "in", "--date", "2024-01-03", "--at", "08:55",
        ])
        .assert()
        .success();

    // Corrupt one row behind the CLI's back: the whole listing must abort,
    // not silently skip the record.
    {
        let pool = punchlog::db::pool::DbPool::new(&db_path).expect("open db");
        pool.conn
            .execute(
                "INSERT INTO events (employee, date, time, kind, source, created_at)
                 VALUES ('default', '2024-01-03', 'banana', 'in', 'cli', 'x')",
                [],
            )
            .expect("insert raw row");
    }

    plog()
        .args(["--db", &db_path, "list", "--period", "2024-01"])
        .assert()
        .failure()
        .stderr(contains("Malformed event record"));
}

#[test]
fn test_separate_employees_are_scoped() {
    let db_path = setup_test_db("scoped_emp");
    init_db(&db_path);

    plog()
        .args([
            "--db", &db_path, "punch", "in", "--date", "2024-06-03", "--at", "08:58",
            "-e", "emp-1",
        ])
        .assert()
        .success();

    plog()
        .args([
            "--db", &db_path, "punch", "in", "--date", "2024-06-03", "--at", "09:45",
            "-e", "emp-2",
        ])
        .assert()
        .success();

    plog()
        .args([
            "--db", &db_path, "list", "--period", "2024-06-03", "-e", "emp-1",
        ])
        .assert()
        .success()
        .stdout(contains("08:58"))
        .stdout(contains("09:45").not());
}
