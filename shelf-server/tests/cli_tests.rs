//! Tests for the shelf-server command line

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("shelf-server").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--cors-origins"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("shelf-server").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shelf-server"));
}

#[test]
fn test_invalid_port() {
    let mut cmd = Command::cargo_bin("shelf-server").unwrap();
    cmd.args(["--port", "not-a-port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--port"));
}
