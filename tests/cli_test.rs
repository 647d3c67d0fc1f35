//! End-to-end tests for the barbertill CLI
//!
//! Each test points BARBERTILL_DATA_DIR at its own temp directory so runs
//! are isolated and leave nothing behind.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn barbertill(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("barbertill").unwrap();
    cmd.env("BARBERTILL_DATA_DIR", dir.path());
    cmd
}

#[test]
fn add_then_summary_shows_the_split() {
    let dir = TempDir::new().unwrap();

    barbertill(&dir)
        .args(["add", "Barber1", "500", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded 500.00 for Barber1"));

    barbertill(&dir)
        .args(["add", "Barber1", "300", "0"])
        .assert()
        .success();

    barbertill(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Barber1")
                .and(predicate::str::contains("800.00"))
                .and(predicate::str::contains("480.00"))
                .and(predicate::str::contains("570.00")),
        );
}

#[test]
fn add_rejects_non_numeric_amount() {
    let dir = TempDir::new().unwrap();

    barbertill(&dir)
        .args(["add", "Barber1", "abc", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    // Nothing was recorded
    barbertill(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 haircuts"));
}

#[test]
fn add_rejects_unknown_barber() {
    let dir = TempDir::new().unwrap();

    barbertill(&dir)
        .args(["add", "Nobody", "500", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Barber not found: Nobody"));
}

#[test]
fn export_with_no_entries_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("report.csv");

    barbertill(&dir)
        .args(["export", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to export"));

    assert!(!output.exists());
}

#[test]
fn export_writes_header_and_rows() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("report.csv");

    barbertill(&dir)
        .args(["add", "Barber2", "250.50", "2"])
        .assert()
        .success();

    barbertill(&dir)
        .args(["export", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 row"));

    let text = std::fs::read_to_string(&output).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Barber,Date,Haircut Amount,Color Packets,Barber Income,Owner Income"
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with("Barber2,"));
    assert!(row.ends_with(",250.50,2,150.30,600.20"));
    assert_eq!(lines.next(), None);
}

#[test]
fn reset_clears_today() {
    let dir = TempDir::new().unwrap();

    barbertill(&dir)
        .args(["add", "Barber3", "400", "0"])
        .assert()
        .success();

    barbertill(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 entry."));

    barbertill(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 haircuts"));
}

#[test]
fn reset_prompt_declines_by_default() {
    let dir = TempDir::new().unwrap();

    barbertill(&dir)
        .args(["add", "Barber1", "100", "0"])
        .assert()
        .success();

    barbertill(&dir)
        .arg("reset")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset cancelled."));

    barbertill(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 haircuts"));
}

#[test]
fn config_shows_roster_and_split() {
    let dir = TempDir::new().unwrap();

    barbertill(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Barber1, Barber2, Barber3, Barber4")
                .and(predicate::str::contains("60% to the barber")),
        );
}
