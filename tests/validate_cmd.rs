use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn validate_command_ok() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("a.csv"),
        "time,median_activity\n0,1\n1,2\n2,3\n",
    )
    .unwrap();
    fs::write(
        tmp.path().join("b.csv"),
        "time,median_activity\n0,1\n2,2\n3,3\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("circadiff").unwrap();
    cmd.arg("validate")
        .arg("--cohort-a")
        .arg(tmp.path().join("a.csv"))
        .arg("--cohort-b")
        .arg(tmp.path().join("b.csv"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("circadiff validate ok"))
        .stdout(predicate::str::contains("Male: 3 samples, 00:00-00:02"))
        .stdout(predicate::str::contains("minute sequences differ"));
}

#[test]
fn validate_rejects_missing_column() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.csv"), "minute,value\n0,1\n").unwrap();
    fs::write(tmp.path().join("b.csv"), "time,median_activity\n0,1\n").unwrap();

    let mut cmd = Command::cargo_bin("circadiff").unwrap();
    cmd.arg("validate")
        .arg("--cohort-a")
        .arg(tmp.path().join("a.csv"))
        .arg("--cohort-b")
        .arg(tmp.path().join("b.csv"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing column 'time'"));
}
