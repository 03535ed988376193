//! Command-line surface of the `orgdir` binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_options() {
    Command::cargo_bin("orgdir")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--data-dir"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_unknown_flag_fails() {
    Command::cargo_bin("orgdir")
        .unwrap()
        .arg("--no-such-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--no-such-flag"));
}
