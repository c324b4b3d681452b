//! CLI argument tests.

use super::zt_demo;
use predicates::prelude::*;

#[test]
fn test_arg_help() {
    zt_demo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--list"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_arg_version() {
    zt_demo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_arg_unknown() {
    zt_demo()
        .arg("--bogus")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_arg_list_conflicts_with_verbose() {
    zt_demo()
        .args(["-l", "-v"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}
