//! Integration tests for the CLI interface
//!
//! Tests argument parsing, the exactly-one source/sink selection groups, and
//! end-to-end runs through the binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("wordfreq").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--from-file"))
        .stdout(predicate::str::contains("--partition-size"));
}

#[test]
fn test_missing_input_selection_rejected() {
    let mut cmd = Command::cargo_bin("wordfreq").unwrap();
    cmd.arg("--to-console")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_missing_output_selection_rejected() {
    let mut cmd = Command::cargo_bin("wordfreq").unwrap();
    cmd.arg("--from-console")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_conflicting_input_selection_rejected() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    fs::write(&input, "hello\n").unwrap();

    let mut cmd = Command::cargo_bin("wordfreq").unwrap();
    cmd.arg("--from-file")
        .arg(&input)
        .arg("--from-console")
        .arg("--to-console")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_file_to_file_roundtrip() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.txt");
    fs::write(&input, "hello again\napple hello\n").unwrap();

    let mut cmd = Command::cargo_bin("wordfreq").unwrap();
    cmd.arg("--from-file")
        .arg(&input)
        .arg("--to-file")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "hello,2\nagain,1\napple,1\n"
    );
}

#[test]
fn test_file_to_console() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    fs::write(&input, "b a b\n").unwrap();

    let mut cmd = Command::cargo_bin("wordfreq").unwrap();
    cmd.arg("--from-file")
        .arg(&input)
        .arg("--to-console")
        .assert()
        .success()
        .stdout("b,2\na,1\n");
}

#[test]
fn test_console_to_console_stops_at_empty_line() {
    let mut cmd = Command::cargo_bin("wordfreq").unwrap();
    cmd.arg("--from-console")
        .arg("--to-console")
        .write_stdin("hello world\nhello\n\nignored after terminator\n")
        .assert()
        .success()
        .stdout("hello,2\nworld,1\n");
}

#[test]
fn test_existing_output_file_rejected() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.txt");
    fs::write(&input, "hello\n").unwrap();
    fs::write(&output, "occupied").unwrap();

    let mut cmd = Command::cargo_bin("wordfreq").unwrap();
    cmd.arg("--from-file")
        .arg(&input)
        .arg("--to-file")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Already exists"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "occupied");
}

#[test]
fn test_zero_partition_size_rejected() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    fs::write(&input, "hello\n").unwrap();

    let mut cmd = Command::cargo_bin("wordfreq").unwrap();
    cmd.arg("--from-file")
        .arg(&input)
        .arg("--to-console")
        .arg("--partition-size")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_partition_size_env_default_applies() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    fs::write(&input, "one two one\n").unwrap();

    let mut cmd = Command::cargo_bin("wordfreq").unwrap();
    cmd.env("WORDFREQ_PARTITION_SIZE", "250")
        .arg("--from-file")
        .arg(&input)
        .arg("--to-console")
        .assert()
        .success()
        .stdout("one,2\ntwo,1\n");
}
