use punchlog::config::migrate::{migrate_config, missing_keys};
use punchlog::utils::formatting::{describe_status, mins2readable};
use punchlog::utils::time::{format_minutes, minutes_between, parse_time};
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_conf(name: &str, content: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_punchlog.conf", name));
    fs::write(&path, content).expect("write temp config");
    path
}

#[test]
fn test_missing_keys_reports_old_config() {
    let path = temp_conf(
        "old_config",
        "database: /tmp/punchlog.sqlite\nemployee: emp-7\n",
    );

    let missing = missing_keys(&path).unwrap();
    assert!(missing.contains(&"scheduled_start".to_string()));
    assert!(missing.contains(&"late_threshold".to_string()));
    assert!(missing.contains(&"deduction_rules".to_string()));
}

#[test]
fn test_migrate_fills_missing_fields_and_keeps_existing() {
    let path = temp_conf(
        "migrating_config",
        "database: /tmp/custom.sqlite\nemployee: emp-9\n",
    );

    migrate_config(&path).unwrap();

    assert!(missing_keys(&path).unwrap().is_empty());

    let content = fs::read_to_string(&path).unwrap();
    let cfg: punchlog::config::Config = serde_yaml::from_str(&content).unwrap();
    assert_eq!(cfg.database, "/tmp/custom.sqlite");
    assert_eq!(cfg.employee, "emp-9");
    assert_eq!(cfg.scheduled_start, "09:00");
    assert_eq!(cfg.deduction_rules.len(), 2);
}

#[test]
fn test_time_parsing_and_formatting() {
    let start = parse_time("09:00").unwrap();
    let end = parse_time("17:35").unwrap();

    assert_eq!(minutes_between(start, end), 515);
    assert_eq!(format_minutes(515), "08:35");
    assert_eq!(format_minutes(-75), "-01:15");

    assert!(parse_time("9am").is_none());
    assert!(parse_time("25:00").is_none());
}

#[test]
fn test_readable_minutes() {
    assert_eq!(mins2readable(145, true, true), "+02:25");
    assert_eq!(mins2readable(-70, true, false), "-01h 10m");
    assert_eq!(mins2readable(0, true, true), "00:00");
}

#[test]
fn test_describe_status() {
    assert_eq!(describe_status("ontime").0, "On time");
    assert_eq!(describe_status("late").0, "Late");
    assert_eq!(describe_status("unknown").0, "unknown");
}
