//! Traversal over a tree of test suites and test cases.
//!
//! Suites are plain functions that call back into the active visitor for
//! every nested suite or case:
//!
//! ```
//! use zt_core::{CaseResult, Test, Visitor, visit_case, visit_suite};
//!
//! fn test_math(t: &mut Test<'_>) -> CaseResult {
//!     t.assert(&zt_core::cmp_int!(2 + 2, ==, 4))
//! }
//!
//! fn math_suite(v: &mut dyn Visitor) {
//!     visit_case!(v, test_math);
//! }
//!
//! fn root_suite(v: &mut dyn Visitor) {
//!     visit_suite!(v, math_suite);
//! }
//! # let mut out = Vec::new();
//! # zt_core::list_tests_from(&mut out, root_suite).unwrap();
//! # assert_eq!(out, b"- math_suite\n  - test_math\n");
//! ```

use crate::test::{CaseResult, Test};

/// Body of a test case.
pub type CaseFn<'f> = &'f dyn Fn(&mut Test<'_>) -> CaseResult;

/// Body of a test suite.
pub type SuiteFn<'f> = &'f dyn Fn(&mut dyn Visitor);

/// Behavior applied to every suite and case of a traversal.
pub trait Visitor {
    /// Visit a named suite. Implementations decide whether to recurse.
    fn visit_suite(&mut self, suite: SuiteFn<'_>, name: &str);

    /// Visit a named case. Implementations decide whether to run it.
    fn visit_case(&mut self, case: CaseFn<'_>, name: &str);
}
