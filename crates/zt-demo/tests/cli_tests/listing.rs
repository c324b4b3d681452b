//! Listing tests.

use super::zt_demo;

const TREE: &str = "\
- passing_suite
  - passing_test
  - root_user_test
- failing_test
- badly_failing_test
";

#[test]
fn test_list_short_flag() {
    zt_demo().arg("-l").assert().success().stdout(TREE).stderr("");
}

#[test]
fn test_list_long_flag() {
    zt_demo().arg("--list").assert().success().stdout(TREE);
}
