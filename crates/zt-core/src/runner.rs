//! Execution of test cases and aggregation of their outcomes.

use crate::render::trace_line;
use crate::test::{Outcome, Test};
use crate::visitor::{CaseFn, SuiteFn, Visitor};
use std::io::{self, Write};
use tracing::{debug, trace, warn};

/// Runner settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunnerConfig {
    /// Print the name of every suite and case before visiting it.
    pub verbose: bool,
}

/// Totals of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Overall result: failed if any case failed, passed otherwise.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        if self.failed > 0 {
            Outcome::Failed
        } else {
            Outcome::Passed
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Visitor running every case it visits.
///
/// Diagnostics of failed claims go to `err`; the verbose trace goes to `out`.
pub struct Runner<'w> {
    out: &'w mut dyn Write,
    err: &'w mut dyn Write,
    config: RunnerConfig,
    nesting: usize,
    summary: RunSummary,
    io_error: Option<io::Error>,
}

impl<'w> Runner<'w> {
    pub fn new(out: &'w mut dyn Write, err: &'w mut dyn Write, config: RunnerConfig) -> Self {
        Self {
            out,
            err,
            config,
            nesting: 0,
            summary: RunSummary::default(),
            io_error: None,
        }
    }

    /// Totals so far.
    #[must_use]
    pub const fn summary(&self) -> RunSummary {
        self.summary
    }

    fn remember(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            self.io_error.get_or_insert(e);
        }
    }

    fn trace_name(&mut self, name: &str) {
        if self.config.verbose {
            let line = trace_line(self.nesting, name);
            let result = writeln!(self.out, "{line}");
            self.remember(result);
        }
    }

    fn record(&mut self, name: &str, outcome: Outcome) {
        match outcome {
            Outcome::Pending | Outcome::Passed => self.summary.passed += 1,
            Outcome::Failed => self.summary.failed += 1,
            Outcome::Unknown(code) => {
                warn!(case = name, code, "unexpected outcome");
                let line = trace_line(self.nesting, name);
                let result = writeln!(self.err, "{line} - unexpected outcome code {code}");
                self.remember(result);
                self.summary.failed += 1;
            }
        }
    }

    /// Flush both streams and return the totals.
    ///
    /// # Errors
    /// Returns the first error hit while writing the trace or diagnostics.
    pub fn finish(self) -> io::Result<RunSummary> {
        if let Some(e) = self.io_error {
            return Err(e);
        }
        self.out.flush()?;
        self.err.flush()?;
        Ok(self.summary)
    }
}

impl Visitor for Runner<'_> {
    fn visit_suite(&mut self, suite: SuiteFn<'_>, name: &str) {
        debug!(suite = name, nesting = self.nesting, "entering suite");
        self.trace_name(name);
        self.nesting += 1;
        suite(self);
        self.nesting -= 1;
    }

    fn visit_case(&mut self, case: CaseFn<'_>, name: &str) {
        self.trace_name(name);
        trace!(case = name, "running case");
        let mut test = Test::new(&mut *self.err);
        if case(&mut test).is_err() {
            debug!(case = name, location = ?test.location(), "case aborted");
        }
        let (outcome, io_error) = test.finish();
        debug!(case = name, ?outcome, "case finished");
        if let Some(e) = io_error {
            self.io_error.get_or_insert(e);
        }
        self.record(name, outcome);
    }
}

/// Run the tests reachable from `suite`.
///
/// # Errors
/// Returns the first error hit while writing to `out` or `err`. Every case
/// still runs when a stream fails.
pub fn run_tests_from(
    out: &mut dyn Write,
    err: &mut dyn Write,
    config: RunnerConfig,
    suite: impl Fn(&mut dyn Visitor),
) -> io::Result<RunSummary> {
    let mut runner = Runner::new(out, err, config);
    suite(&mut runner);
    let summary = runner.summary();
    debug!(passed = summary.passed, failed = summary.failed, "run complete");
    runner.finish()
}
