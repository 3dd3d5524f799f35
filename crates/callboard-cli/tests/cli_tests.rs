//! Integration tests for the `callboard` CLI binary.
//!
//! Exercises the validate and check subcommands through the actual binary
//! with `assert_cmd` and `predicates`: stdin/file input, exit codes, the
//! JSON error report, and slot checking output.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the availability.txt fixture.
fn availability_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/availability.txt")
}

/// Helper: path to the members.txt fixture.
fn members_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/members.txt")
}

// ─────────────────────────────────────────────────────────────────────────────
// Validate subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn validate_clean_input_succeeds() {
    Command::cargo_bin("callboard")
        .unwrap()
        .arg("validate")
        .write_stdin("m, w 2-4, f after 5pm\nJan 2 26\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success rate: 100.0%"))
        .stdout(predicate::str::contains("Invalid:      0"));
}

#[test]
fn validate_reports_invalid_tokens_and_fails() {
    Command::cargo_bin("callboard")
        .unwrap()
        .args(["validate", "-i", availability_path()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Tokens:       7"))
        .stdout(predicate::str::contains("Valid:        5"))
        .stdout(predicate::str::contains("Invalid:      2"))
        .stdout(predicate::str::contains("71.4%"))
        .stderr(predicate::str::contains("xyzzy"))
        .stderr(predicate::str::contains("Expected:"));
}

#[test]
fn validate_counts_empty_rows() {
    Command::cargo_bin("callboard")
        .unwrap()
        .args(["validate", "-i", availability_path()])
        .assert()
        .stdout(predicate::str::contains("Rows:         6 (1 empty)"));
}

#[test]
fn validate_semantic_errors_carry_the_offending_value() {
    Command::cargo_bin("callboard")
        .unwrap()
        .arg("validate")
        .write_stdin("m after 25\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be greater than 24"));
}

#[test]
fn validate_writes_a_json_error_report() {
    let report_path = "/tmp/callboard-test-errors.json";
    let _ = std::fs::remove_file(report_path);

    Command::cargo_bin("callboard")
        .unwrap()
        .args(["validate", "-i", availability_path(), "-o", report_path])
        .assert()
        .failure();

    let report = std::fs::read_to_string(report_path).expect("report file must exist");
    let records: serde_json::Value = serde_json::from_str(&report).expect("report is valid JSON");
    let records = records.as_array().expect("report is a JSON array");
    assert_eq!(records.len(), 2, "one record per invalid token");
    assert_eq!(records[0]["token"], "xyzzy");
    assert!(
        records[1]["error"]
            .as_str()
            .unwrap()
            .contains("Start time 1700 must be before end time 1400"),
        "semantic message is flattened into the record"
    );

    let _ = std::fs::remove_file(report_path);
}

#[test]
fn validate_empty_input_is_trivially_clean() {
    Command::cargo_bin("callboard")
        .unwrap()
        .arg("validate")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success rate: 100.0%"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_reports_member_and_group_windows() {
    Command::cargo_bin("callboard")
        .unwrap()
        .args([
            "check",
            "--date",
            "2/2/2026",
            "--start",
            "6:00 PM",
            "--end",
            "9:00 PM",
            "-i",
            members_path(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slot: 2026-02-02 (monday)"))
        .stdout(predicate::str::contains(
            "alice: conflicts [m until 7pm] available [7:00 pm - 9:00 pm]",
        ))
        .stdout(predicate::str::contains(
            "bea: conflicts [m after 8pm] available [6:00 pm - 8:00 pm]",
        ))
        .stdout(predicate::str::contains(
            "carol: conflicts [] available [6:00 pm - 9:00 pm]",
        ))
        .stdout(predicate::str::contains("group: [7:00 pm - 8:00 pm]"));
}

#[test]
fn check_skips_bad_tokens_and_continues() {
    Command::cargo_bin("callboard")
        .unwrap()
        .args([
            "check", "--date", "2/2/2026", "--start", "18:00", "--end", "21:00",
        ])
        .write_stdin("dana: xyzzy, m until 7pm\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping 'xyzzy'"))
        .stdout(predicate::str::contains(
            "dana: conflicts [m until 7pm] available [7:00 pm - 9:00 pm]",
        ));
}

#[test]
fn check_rejects_a_backwards_slot() {
    Command::cargo_bin("callboard")
        .unwrap()
        .args([
            "check", "--date", "2/2/2026", "--start", "21:00", "--end", "18:00",
        ])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("start must be before end"));
}

#[test]
fn check_rejects_an_unparsable_date() {
    Command::cargo_bin("callboard")
        .unwrap()
        .args([
            "check", "--date", "2026-02-02", "--start", "18:00", "--end", "21:00",
        ])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --date"));
}

#[test]
fn check_reports_malformed_member_lines() {
    Command::cargo_bin("callboard")
        .unwrap()
        .args([
            "check", "--date", "2/2/2026", "--start", "18:00", "--end", "21:00",
        ])
        .write_stdin("no separator here\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("expected 'member: constraints'"));
}

// ─────────────────────────────────────────────────────────────────────────────
// General CLI behavior
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    Command::cargo_bin("callboard")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("callboard")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("unrecognized")));
}

#[test]
fn missing_input_file_fails_with_context() {
    Command::cargo_bin("callboard")
        .unwrap()
        .args(["validate", "-i", "/nonexistent/availability.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}
