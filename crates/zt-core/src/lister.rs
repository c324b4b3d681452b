//! Listing of test suites and cases without running them.

use crate::render::trace_line;
use crate::visitor::{CaseFn, SuiteFn, Visitor};
use std::io::{self, Write};
use tracing::debug;

/// Visitor printing one indented line per suite and case.
///
/// Case bodies are never invoked.
pub struct Lister<'w> {
    out: &'w mut dyn Write,
    nesting: usize,
    io_error: Option<io::Error>,
}

impl<'w> Lister<'w> {
    pub fn new(out: &'w mut dyn Write) -> Self {
        Self {
            out,
            nesting: 0,
            io_error: None,
        }
    }

    fn print(&mut self, name: &str) {
        if self.io_error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", trace_line(self.nesting, name)) {
            self.io_error = Some(e);
        }
    }

    /// Flush the output stream.
    ///
    /// # Errors
    /// Returns the first error hit while writing the listing.
    pub fn finish(self) -> io::Result<()> {
        if let Some(e) = self.io_error {
            return Err(e);
        }
        self.out.flush()
    }
}

impl Visitor for Lister<'_> {
    fn visit_suite(&mut self, suite: SuiteFn<'_>, name: &str) {
        debug!(suite = name, nesting = self.nesting, "listing suite");
        self.print(name);
        self.nesting += 1;
        suite(self);
        self.nesting -= 1;
    }

    fn visit_case(&mut self, _case: CaseFn<'_>, name: &str) {
        self.print(name);
    }
}

/// List the tests reachable from `suite` to `out`.
///
/// # Errors
/// Returns the first error hit while writing to `out`.
pub fn list_tests_from(out: &mut dyn Write, suite: impl Fn(&mut dyn Visitor)) -> io::Result<()> {
    let mut lister = Lister::new(out);
    suite(&mut lister);
    lister.finish()
}
