//! Core of the zt unit test library.
//!
//! Test cases are functions taking a [`Test`] context. Claims about values
//! are built with the exported macros, which remember the source text of
//! every operand and the location of the claim, so failures read like
//!
//! ```text
//! src/lib.rs:13: assertion len == 3 failed because 2 != 3
//! ```
//!
//! A claim is either *checked* ([`Test::check`]), which records the failure
//! and carries on, or *asserted* ([`Test::assert`]), which also ends the
//! case. Suites group cases and other suites and are traversed by a
//! [`Visitor`]: the [`Lister`] prints the tree, the [`Runner`] executes it.
//!
//! ```
//! use zt_core::{CaseResult, RunnerConfig, Test, Visitor, cmp_str, is_true, visit_case};
//!
//! fn test_greeting(t: &mut Test<'_>) -> CaseResult {
//!     let greeting = "hello";
//!     t.assert(&is_true!(!greeting.is_empty()))?;
//!     t.check(&cmp_str!(greeting, ==, "hello"));
//!     Ok(())
//! }
//!
//! fn suite(v: &mut dyn Visitor) {
//!     visit_case!(v, test_greeting);
//! }
//!
//! let (mut out, mut err) = (Vec::<u8>::new(), Vec::<u8>::new());
//! let summary = zt_core::run_tests_from(&mut out, &mut err, RunnerConfig::default(), suite)?;
//! assert!(summary.is_success());
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod claim;
pub mod failure;
pub mod lister;
pub mod relation;
pub mod render;
pub mod runner;
pub mod test;
pub mod value;
pub mod verifier;
pub mod visitor;

pub use claim::{Claim, Location};
pub use failure::{Expression, Failure, Side, Verdict};
pub use lister::{Lister, list_tests_from};
pub use relation::Relation;
pub use runner::{RunSummary, Runner, RunnerConfig, run_tests_from};
pub use test::{Abort, CaseResult, Outcome, Test};
pub use value::{AsPointer, IntegerOperand, Kind, RuneOperand, UnsignedOperand, Value};
pub use verifier::{ArgInfo, Predicate, Verifier, verify_claim};
pub use visitor::{CaseFn, SuiteFn, Visitor};

/// Major version of the library.
pub const VERSION_MAJOR: u32 = 0;

/// Minor version of the library.
pub const VERSION_MINOR: u32 = 3;

/// Location of the macro invocation.
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new(file!(), line!())
    };
}

/// Claim that a boolean expression is true.
#[macro_export]
macro_rules! is_true {
    ($value:expr) => {
        $crate::claim::is_true(
            $crate::location!(),
            $crate::Value::boolean($value, stringify!($value)),
        )
    };
}

/// Claim that a boolean expression is false.
#[macro_export]
macro_rules! is_false {
    ($value:expr) => {
        $crate::claim::is_false(
            $crate::location!(),
            $crate::Value::boolean($value, stringify!($value)),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __relation {
    ($rel:tt) => {
        $crate::Value::string(stringify!($rel), stringify!($rel))
    };
}

/// Claim a relation between two booleans. Only `==` and `!=` are supported.
#[macro_export]
macro_rules! cmp_bool {
    ($left:expr, $rel:tt, $right:expr) => {
        $crate::claim::cmp_bool(
            $crate::location!(),
            $crate::Value::boolean($left, stringify!($left)),
            $crate::__relation!($rel),
            $crate::Value::boolean($right, stringify!($right)),
        )
    };
}

/// Claim a relation between two byte-sized characters.
///
/// Operands are `u8`, `i8`, `char` or `i32`. A character outside one byte
/// makes the claim fail.
#[macro_export]
macro_rules! cmp_rune {
    ($left:expr, $rel:tt, $right:expr) => {
        $crate::claim::cmp_rune(
            $crate::location!(),
            $crate::Value::rune_operand($left, stringify!($left)),
            $crate::__relation!($rel),
            $crate::Value::rune_operand($right, stringify!($right)),
        )
    };
}

/// Claim a relation between two signed integers.
///
/// Operands are any integer type. One that does not fit in `i64` makes the
/// claim fail. Floats are rejected at compile time:
///
/// ```compile_fail
/// let claim = zt_core::cmp_int!(2.9_f64, ==, 2);
/// ```
#[macro_export]
macro_rules! cmp_int {
    ($left:expr, $rel:tt, $right:expr) => {
        $crate::claim::cmp_int(
            $crate::location!(),
            $crate::Value::integer_operand($left, stringify!($left)),
            $crate::__relation!($rel),
            $crate::Value::integer_operand($right, stringify!($right)),
        )
    };
}

/// Claim a relation between two unsigned integers.
///
/// A negative operand, or one that does not fit in `u64`, makes the claim
/// fail.
#[macro_export]
macro_rules! cmp_uint {
    ($left:expr, $rel:tt, $right:expr) => {
        $crate::claim::cmp_uint(
            $crate::location!(),
            $crate::Value::unsigned_operand($left, stringify!($left)),
            $crate::__relation!($rel),
            $crate::Value::unsigned_operand($right, stringify!($right)),
        )
    };
}

/// Claim a relation between two strings.
///
/// Operands are `&str` or `Option<&str>`; a `None` operand always fails.
#[macro_export]
macro_rules! cmp_str {
    ($left:expr, $rel:tt, $right:expr) => {
        $crate::claim::cmp_str(
            $crate::location!(),
            $crate::Value::string($left, stringify!($left)),
            $crate::__relation!($rel),
            $crate::Value::string($right, stringify!($right)),
        )
    };
}

/// Claim that a pointer is null.
#[macro_export]
macro_rules! is_null {
    ($value:expr) => {
        $crate::claim::is_null(
            $crate::location!(),
            $crate::Value::pointer($value, stringify!($value)),
        )
    };
}

/// Claim that a pointer is not null.
#[macro_export]
macro_rules! not_null {
    ($value:expr) => {
        $crate::claim::not_null(
            $crate::location!(),
            $crate::Value::pointer($value, stringify!($value)),
        )
    };
}

/// Visit a test case, named after its function.
#[macro_export]
macro_rules! visit_case {
    ($visitor:expr, $case:ident) => {
        $visitor.visit_case(&$case, stringify!($case))
    };
}

/// Visit a test suite, named after its function.
#[macro_export]
macro_rules! visit_suite {
    ($visitor:expr, $suite:ident) => {
        $visitor.visit_suite(&$suite, stringify!($suite))
    };
}
