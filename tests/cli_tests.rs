//! Integration tests for the CLI interface
//!
//! Exercise argument parsing, fatal-error exits, and the dry-run path, which
//! never touches the network.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_input(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.csv");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("txbatch").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_run_help() {
    let mut cmd = Command::cargo_bin("txbatch").unwrap();
    cmd.arg("run")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add transaction IDs"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_health_help() {
    let mut cmd = Command::cargo_bin("txbatch").unwrap();
    cmd.arg("health")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("liveness"));
}

#[test]
fn test_run_requires_paths() {
    let mut cmd = Command::cargo_bin("txbatch").unwrap();
    cmd.arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_run_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("txbatch").unwrap();
    cmd.current_dir(dir.path())
        .args(["run", "nope.csv", "out.csv", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_run_unknown_column_lists_available() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "Bestellcode;Transaktions-ID\nORD1;TX1\n");
    let output = dir.path().join("out.csv");

    let mut cmd = Command::cargo_bin("txbatch").unwrap();
    cmd.args([
        "run",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--order-col",
        "Foo",
        "--dry-run",
        "--yes",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Could not find required column 'Foo'"))
    .stderr(predicate::str::contains(
        "Available columns: Bestellcode, Transaktions-ID",
    ));

    assert!(!output.exists());
}

#[test]
fn test_run_invalid_delimiter() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "Bestellcode;Transaktions-ID\nORD1;TX1\n");

    let mut cmd = Command::cargo_bin("txbatch").unwrap();
    cmd.args([
        "run",
        input.to_str().unwrap(),
        dir.path().join("out.csv").to_str().unwrap(),
        "--delimiter",
        ";;",
        "--yes",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains(
        "Delimiter must be a single character",
    ));
}

#[test]
fn test_dry_run_stamps_every_row_without_network() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "Bestellcode;Transaktions-ID\nORD1;TX1\nORD2;TX2\n");
    let output = dir.path().join("out.csv");

    let mut cmd = Command::cargo_bin("txbatch").unwrap();
    cmd.args([
        "run",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--dry-run",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Processing 2 rows"))
    .stdout(predicate::str::contains("[DRY RUN]"))
    .stdout(predicate::str::contains("Successful: 0"))
    .stdout(predicate::str::contains("Failed/Skipped: 0"));

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "Bestellcode;Transaktions-ID;API_Status\nORD1;TX1;DRY_RUN\nORD2;TX2;DRY_RUN\n"
    );
}

#[test]
fn test_dry_run_skips_blank_rows() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "Bestellcode;Transaktions-ID\nORD1;\n");
    let output = dir.path().join("out.csv");

    let mut cmd = Command::cargo_bin("txbatch").unwrap();
    cmd.args([
        "run",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--dry-run",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Failed/Skipped: 1"));

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("ORD1;;Skipped - missing data"));
}

#[test]
fn test_custom_delimiter_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "Bestellcode,Transaktions-ID\nORD1,TX1\n");
    let output = dir.path().join("out.csv");

    let mut cmd = Command::cargo_bin("txbatch").unwrap();
    cmd.args([
        "run",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--delimiter",
        ",",
        "--dry-run",
    ])
    .assert()
    .success();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "Bestellcode,Transaktions-ID,API_Status\nORD1,TX1,DRY_RUN\n"
    );
}
