#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, Local, NaiveDate, NaiveTime};
use rinterviews::models::interview::NewInterview;
use rinterviews::models::interview_type::InterviewType;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rin() -> Command {
    cargo_bin_cmd!("rinterviews")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rinterviews.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh test database (no config file written).
pub fn init_test_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    rin()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

/// A date `days` days from today, as YYYY-MM-DD.
pub fn future_date(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid test time")
}

pub fn record(candidate: &str, interviewer: &str, date: &str, start: &str, end: &str) -> NewInterview {
    NewInterview {
        candidate: candidate.to_string(),
        interviewer: interviewer.to_string(),
        date: d(date),
        time_slot_start: t(start),
        time_slot_end: t(end),
        interview_type: InterviewType::Technical,
    }
}

/// Ids of the records printed by `list --json`.
pub fn list_ids(db_path: &str) -> Vec<String> {
    let out = rin()
        .args(["--db", db_path, "list", "--json"])
        .output()
        .expect("failed to run list --json");
    assert!(out.status.success());

    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("list --json prints JSON");
    v.as_array()
        .expect("JSON array")
        .iter()
        .map(|iv| iv["id"].as_str().expect("id").to_string())
        .collect()
}
