//! Integration tests for the `slots` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the find subcommand
//! through the actual binary, including stdin/stdout piping, file I/O, JSON
//! output, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the day.json fixture.
fn day_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/day.json")
}

#[test]
fn find_from_file_lists_open_slots() {
    // alice has the standup (09:00-09:15) and the design review (11:00-12:00);
    // the book club is carol's and irrelevant here.
    Command::cargo_bin("slots")
        .unwrap()
        .args(["find", "-i", day_json_path(), "-a", "alice", "-d", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00:00-09:00 (540 min)"))
        .stdout(predicate::str::contains("09:15-11:00 (105 min)"))
        .stdout(predicate::str::contains("12:00-24:00 (720 min)"))
        .stdout(predicate::str::contains("16:00").not());
}

#[test]
fn find_from_stdin() {
    let input = r#"[{"name":"lunch","start":"12:00","end":"13:00","attendees":["alice"]}]"#;

    Command::cargo_bin("slots")
        .unwrap()
        .args(["find", "-a", "alice", "-d", "30"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("00:00-12:00 (720 min)"))
        .stdout(predicate::str::contains("13:00-24:00 (660 min)"));
}

#[test]
fn optional_attendee_constrains_when_possible() {
    // With carol optional, her book club (16:00-17:00) splits the afternoon.
    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "find",
            "-i",
            day_json_path(),
            "-a",
            "alice",
            "--optional",
            "carol",
            "-d",
            "60",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("12:00-16:00 (240 min)"))
        .stdout(predicate::str::contains("17:00-24:00 (420 min)"));
}

#[test]
fn json_output_is_machine_readable() {
    let output = Command::cargo_bin("slots")
        .unwrap()
        .args([
            "find", "-i", day_json_path(), "-a", "alice", "-d", "60", "--json",
        ])
        .output()
        .expect("find --json should run");

    assert!(output.status.success());
    let slots: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("output should be valid JSON");

    let slots = slots.as_array().expect("output should be a JSON array");
    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0]["start"], "00:00");
    assert_eq!(slots[0]["end"], "09:00");
    assert_eq!(slots[0]["duration_minutes"], 540);
    assert_eq!(slots[2]["end"], "24:00");
}

#[test]
fn reports_when_no_slot_fits() {
    let input = r#"[{"name":"all day","start":"00:00","end":"24:00","attendees":["alice"]}]"#;

    Command::cargo_bin("slots")
        .unwrap()
        .args(["find", "-a", "alice", "-d", "30"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("No open slots."));
}

#[test]
fn end_of_day_boundary_time_is_accepted() {
    let input = r#"[{"name":"evening","start":"22:00","end":"24:00","attendees":["alice"]}]"#;

    Command::cargo_bin("slots")
        .unwrap()
        .args(["find", "-a", "alice", "-d", "60"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("00:00-22:00 (1320 min)"));
}

#[test]
fn invalid_events_json_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["find", "-a", "alice", "-d", "30"])
        .write_stdin("not json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse events JSON"));
}

#[test]
fn invalid_wall_clock_time_fails_with_event_name() {
    let input = r#"[{"name":"bad","start":"25:99","end":"10:00","attendees":["alice"]}]"#;

    Command::cargo_bin("slots")
        .unwrap()
        .args(["find", "-a", "alice", "-d", "30"])
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Event 'bad'"));
}

#[test]
fn inverted_event_range_fails() {
    let input = r#"[{"name":"inverted","start":"14:00","end":"13:00","attendees":["alice"]}]"#;

    Command::cargo_bin("slots")
        .unwrap()
        .args(["find", "-a", "alice", "-d", "30"])
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid time range"));
}

#[test]
fn missing_duration_flag_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["find", "-a", "alice"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--duration"));
}

#[test]
fn help_flag_shows_usage() {
    Command::cargo_bin("slots")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("find"))
        .stdout(predicate::str::contains("Meeting slot finder"));
}

#[test]
fn output_file_flag_writes_to_file() {
    let output_path = "/tmp/slots-test-find-output.txt";
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "find",
            "-i",
            day_json_path(),
            "-o",
            output_path,
            "-a",
            "alice",
            "-d",
            "60",
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    assert!(content.contains("00:00-09:00"));

    let _ = std::fs::remove_file(output_path);
}
