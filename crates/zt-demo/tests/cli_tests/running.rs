//! Run tests: exit codes, diagnostics and the verbose trace.

use super::zt_demo;
use predicates::prelude::*;

const DIAGNOSTICS: [&str; 5] = [
    ": assertion failed because 2 + 2 != 4 is false\n",
    ": assertion failed because 2 + 2 != 5 is true\n",
    ": assertion 2 + 2 == 5 failed because 4 != 5\n",
    ": assertion false == true failed because false != true\n",
    ": assertion 0 == -1 failed because 0 != -1\n",
];

fn stderr_of(cmd: &mut assert_cmd::Command) -> String {
    let output = cmd.output().unwrap();
    String::from_utf8(output.stderr).unwrap()
}

#[test]
fn test_run_fails_with_exit_code_one() {
    zt_demo().assert().code(1).stdout("");
}

#[test]
fn test_run_reports_each_failed_claim() {
    let stderr = stderr_of(&mut zt_demo());
    let lines: Vec<_> = stderr.lines().collect();
    assert_eq!(lines.len(), DIAGNOSTICS.len(), "stderr was:\n{stderr}");
    for (line, expected) in lines.iter().zip(DIAGNOSTICS) {
        assert!(line.contains("main.rs:"), "{line}");
        assert!(
            format!("{line}\n").ends_with(expected),
            "{line:?} does not end with {expected:?}"
        );
    }
}

#[test]
fn test_hard_assertion_stops_the_case() {
    // badly_failing_test aborts the process if its assertion does not end it.
    zt_demo()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("assertion 0 == -1 failed"));
}

#[test]
fn test_verbose_trace() {
    zt_demo()
        .arg("-v")
        .assert()
        .code(1)
        .stdout(
            "- passing_suite\n  - passing_test\n  - root_user_test\n- failing_test\n- badly_failing_test\n",
        )
        .stderr(predicate::str::contains("4 != 5"));
}

#[test]
fn test_logging_goes_to_stderr_only() {
    zt_demo()
        .arg("-v")
        .env("ZT_LOG", "zt_core=debug")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("- passing_suite\n"))
        .stderr(predicate::str::contains("entering suite"));
}
