//! Per-case execution context.

use crate::claim::{Claim, Location};
use crate::failure::Failure;
use crate::verifier::verify_claim;
use std::io::{self, Write};

/// Outcome of a single test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Pending,
    Passed,
    Failed,
    /// A numeric outcome outside the known set. Counted as a failure.
    Unknown(i32),
}

impl Outcome {
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Pending => 0,
            Self::Passed => 1,
            Self::Failed => 2,
            Self::Unknown(code) => code,
        }
    }

    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Pending,
            1 => Self::Passed,
            2 => Self::Failed,
            other => Self::Unknown(other),
        }
    }
}

/// Marker returned by a failed hard assertion.
///
/// Case bodies propagate it with `?` so the remaining statements of the case,
/// including those in nested helper calls, are skipped. Only [`Test::assert`]
/// can produce one, and the runner consumes it at the case boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Abort(());

/// Result type of test case bodies.
pub type CaseResult = Result<(), Abort>;

type Deferred<'s> = Box<dyn FnOnce() + 's>;

/// Mutable state of one running test case.
///
/// A fresh context is created for every case and discarded when it ends.
pub struct Test<'s> {
    stream: &'s mut dyn Write,
    location: Location,
    outcome: Outcome,
    deferred: Vec<Deferred<'s>>,
    io_error: Option<io::Error>,
}

impl<'s> Test<'s> {
    /// Create a pending context writing diagnostics to `stream`.
    pub fn new(stream: &'s mut dyn Write) -> Self {
        Self {
            stream,
            location: Location::default(),
            outcome: Outcome::Pending,
            deferred: Vec::new(),
            io_error: None,
        }
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Override the outcome, e.g. to mark a case passed before it returns.
    ///
    /// An `Unknown` carrying a known code is stored as that known outcome.
    pub const fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = Outcome::from_code(outcome.code());
    }

    /// Location of the most recently verified claim.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    pub(crate) const fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    /// Write a `file:line: message` diagnostic for the current location.
    ///
    /// Always returns `false` so predicates can `return test.report(..)`.
    pub fn report(&mut self, failure: &Failure) -> bool {
        let Location { file, line } = self.location;
        if let Err(e) = writeln!(self.stream, "{file}:{line}: {failure}") {
            self.io_error.get_or_insert(e);
        }
        false
    }

    /// Soft check: on failure mark the case failed and carry on.
    pub fn check(&mut self, claim: &Claim<'_>) {
        if !verify_claim(self, claim) {
            self.outcome = Outcome::Failed;
        }
    }

    /// Hard assertion: on failure mark the case failed and abort it.
    ///
    /// # Errors
    /// Returns [`Abort`] when the claim does not hold.
    pub fn assert(&mut self, claim: &Claim<'_>) -> CaseResult {
        if verify_claim(self, claim) {
            return Ok(());
        }
        self.outcome = Outcome::Failed;
        Err(Abort(()))
    }

    /// Register a cleanup to run when the case ends, even if it aborts.
    ///
    /// Cleanups run in reverse registration order.
    pub fn defer(&mut self, cleanup: impl FnOnce() + 's) {
        self.deferred.push(Box::new(cleanup));
    }

    /// Run deferred cleanups and return the final outcome together with the
    /// first error hit while writing diagnostics.
    pub(crate) fn finish(mut self) -> (Outcome, Option<io::Error>) {
        while let Some(cleanup) = self.deferred.pop() {
            cleanup();
        }
        (self.outcome, self.io_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::{cmp_int, is_true};
    use crate::value::Value;
    use std::cell::RefCell;

    fn here() -> Location {
        Location::new("file.rs", 13)
    }

    fn output(buf: &[u8]) -> &str {
        std::str::from_utf8(buf).unwrap_or("<invalid utf-8>")
    }

    #[test]
    fn test_new_context_is_pending() {
        let mut buf = Vec::new();
        let t = Test::new(&mut buf);
        assert_eq!(t.outcome(), Outcome::Pending);
    }

    #[test]
    fn test_outcome_codes() {
        for outcome in [Outcome::Pending, Outcome::Passed, Outcome::Failed] {
            assert_eq!(Outcome::from_code(outcome.code()), outcome);
        }
        assert_eq!(Outcome::from_code(42), Outcome::Unknown(42));
        assert_eq!(Outcome::Unknown(42).code(), 42);
    }

    #[test]
    fn test_set_outcome_normalises_known_codes() {
        let mut buf = Vec::new();
        let mut t = Test::new(&mut buf);
        t.set_outcome(Outcome::Unknown(1));
        assert_eq!(t.outcome(), Outcome::Passed);
        t.set_outcome(Outcome::Unknown(2));
        assert_eq!(t.outcome(), Outcome::Failed);
        t.set_outcome(Outcome::Unknown(0));
        assert_eq!(t.outcome(), Outcome::Pending);
        t.set_outcome(Outcome::Unknown(7));
        assert_eq!(t.outcome(), Outcome::Unknown(7));
    }

    #[test]
    fn test_passing_check_keeps_outcome() {
        let mut buf = Vec::new();
        let mut t = Test::new(&mut buf);
        t.check(&is_true(here(), Value::boolean(true, "1")));
        assert_eq!(t.outcome(), Outcome::Pending);
        drop(t);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_failing_check_continues() {
        let mut buf = Vec::new();
        let mut t = Test::new(&mut buf);
        t.check(&is_true(here(), Value::boolean(false, "0")));
        assert_eq!(t.outcome(), Outcome::Failed);
        t.check(&cmp_int(
            Location::new("file.rs", 14),
            Value::integer(1, "1"),
            Value::string("!=", "!="),
            Value::integer(1, "1"),
        ));
        assert_eq!(t.location(), Location::new("file.rs", 14));
        drop(t);
        assert_eq!(
            output(&buf),
            "file.rs:13: assertion failed because 0 is false\n\
             file.rs:14: assertion 1 != 1 failed because 1 == 1\n"
        );
    }

    #[test]
    fn test_passing_assert_returns_ok() {
        let mut buf = Vec::new();
        let mut t = Test::new(&mut buf);
        assert_eq!(t.assert(&is_true(here(), Value::boolean(true, "1"))), Ok(()));
        assert_eq!(t.outcome(), Outcome::Pending);
    }

    #[test]
    fn test_failing_assert_aborts_remaining_statements() {
        fn helper(t: &mut Test<'_>, reached: &mut bool) -> CaseResult {
            t.assert(&is_true(Location::new("file.rs", 20), Value::boolean(false, "ok")))?;
            *reached = true;
            Ok(())
        }

        fn body(t: &mut Test<'_>, reached: &mut bool) -> CaseResult {
            helper(t, reached)?;
            *reached = true;
            Ok(())
        }

        let mut buf = Vec::new();
        let mut t = Test::new(&mut buf);
        let mut reached = false;
        assert!(body(&mut t, &mut reached).is_err());
        assert!(!reached);
        assert_eq!(t.outcome(), Outcome::Failed);
        drop(t);
        assert_eq!(
            output(&buf),
            "file.rs:20: assertion failed because ok is false\n"
        );
    }

    #[test]
    fn test_explicit_passed_outcome() {
        let mut buf = Vec::new();
        let mut t = Test::new(&mut buf);
        t.set_outcome(Outcome::Passed);
        assert_eq!(t.outcome(), Outcome::Passed);
    }

    #[test]
    fn test_deferred_cleanups_run_in_reverse_order() {
        let log = RefCell::new(Vec::new());
        let mut buf = Vec::new();
        let mut t = Test::new(&mut buf);
        t.defer(|| log.borrow_mut().push("first"));
        t.defer(|| log.borrow_mut().push("second"));
        assert!(log.borrow().is_empty());
        let (outcome, io_error) = t.finish();
        assert_eq!(outcome, Outcome::Pending);
        assert!(io_error.is_none());
        assert_eq!(*log.borrow(), ["second", "first"]);
    }

    #[test]
    fn test_sink_errors_are_remembered() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("broken sink"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = Broken;
        let mut t = Test::new(&mut sink);
        t.check(&is_true(here(), Value::boolean(false, "x")));
        let (outcome, io_error) = t.finish();
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(io_error.map(|e| e.to_string()), Some("broken sink".into()));
    }
}
