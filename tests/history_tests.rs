//! Integration tests for dashboard, history and stats

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_journal, moodlog_on};

fn log(root: &std::path::Path, today: &str, mood: &str) {
    moodlog_on(root, today).args(["log", mood]).assert().success();
}

#[test]
fn test_dashboard_before_and_after_logging() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_on(temp.path(), "2024-01-01")
        .assert()
        .success()
        .stdout(predicate::str::contains("not logged yet (2024-01-01)"))
        .stdout(predicate::str::contains("No moods logged yet."));

    log(temp.path(), "2024-01-01", "happy");

    moodlog_on(temp.path(), "2024-01-01")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Today's mood added"))
        .stdout(predicate::str::contains("😊  2024-01-01"));

    moodlog_on(temp.path(), "2024-01-02")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("not logged yet (2024-01-02)"));
}

#[test]
fn test_status_limit() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    for day in ["2024-01-01", "2024-01-02", "2024-01-03"] {
        log(temp.path(), day, "neutral");
    }

    moodlog_on(temp.path(), "2024-01-03")
        .args(["status", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-03"))
        .stdout(predicate::str::contains("2024-01-02").not());
}

#[test]
fn test_history_sorted_newest_first() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    log(temp.path(), "2024-01-01", "happy");
    log(temp.path(), "2024-01-03", "sad");
    log(temp.path(), "2024-01-02", "angry");

    moodlog_on(temp.path(), "2024-01-03")
        .arg("history")
        .assert()
        .success()
        .stdout("😢  2024-01-03\n😠  2024-01-02\n😊  2024-01-01\n");
}

#[test]
fn test_history_empty() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_on(temp.path(), "2024-01-01")
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No moods logged yet."));
}

#[test]
fn test_stats_counts() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    log(temp.path(), "2024-01-01", "😊");
    log(temp.path(), "2024-01-02", "😊");
    log(temp.path(), "2024-01-03", "😢");

    moodlog_on(temp.path(), "2024-01-03")
        .arg("stats")
        .assert()
        .success()
        .stdout("😊  2 times\n😢  1 time\nTotal: 3\n");
}

#[test]
fn test_corrupt_data_reads_as_empty() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    fs::write(temp.path().join(".moodlog/data/moodEntries.json"), "[{").unwrap();

    moodlog_on(temp.path(), "2024-01-01")
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No moods logged yet."));

    moodlog_on(temp.path(), "2024-01-01")
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("No mood data yet."));
}

#[test]
fn test_legacy_entries_without_note_are_listed() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    fs::write(
        temp.path().join(".moodlog/data/moodEntries.json"),
        r#"[{"date":"2023-12-31","mood":"😴"},{"date":"2024-01-01","mood":"😊","note":"new year"}]"#,
    )
    .unwrap();

    moodlog_on(temp.path(), "2024-01-02")
        .arg("history")
        .assert()
        .success()
        .stdout("😊  2024-01-01  Note: new year\n😴  2023-12-31\n");
}
