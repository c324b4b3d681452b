//! Entry point for test programs built with zt.
//!
//! A test program declares its suites with the `zt-core` API, re-exported
//! here, and hands the root suite to [`main`]:
//!
//! ```no_run
//! use zt::{CaseResult, Test, Visitor, cmp_int, visit_case};
//!
//! fn test_math(t: &mut Test<'_>) -> CaseResult {
//!     t.assert(&cmp_int!(2 + 2, ==, 4))
//! }
//!
//! fn root(v: &mut dyn Visitor) {
//!     visit_case!(v, test_math);
//! }
//!
//! fn main() -> std::process::ExitCode {
//!     zt::main(root)
//! }
//! ```
//!
//! Without arguments the program runs every case and prints diagnostics of
//! failed claims to stderr. `-v` also prints each suite and case name to
//! stdout as it runs, and `-l` lists the tree without running anything.

pub mod cli;
pub mod logging;

pub use cli::{Cli, Mode, parse_mode};
pub use logging::{LOG_ENV, init_logging};
pub use zt_core::*;

use anyhow::Context;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;

/// Process exit codes of test programs.
pub mod exit_code {
    pub const SUCCESS: u8 = 0;
    pub const TESTS_FAILED: u8 = 1;
    pub const USAGE_ERROR: u8 = 2;
    pub const IO_ERROR: u8 = 3;
}

/// Run a test program over the process arguments and standard streams.
pub fn main(suite: impl Fn(&mut dyn Visitor)) -> ExitCode {
    init_logging();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    ExitCode::from(main_from(std::env::args_os(), suite, &mut out, &mut err))
}

/// Run a test program over explicit arguments and streams.
///
/// `args` includes the program name. Returns the process exit code.
pub fn main_from<I, T>(
    args: I,
    suite: impl Fn(&mut dyn Visitor),
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mode = match parse_mode(args) {
        Ok(mode) => mode,
        Err(e) => {
            let (stream, code): (&mut dyn Write, u8) = if e.use_stderr() {
                (&mut *err, exit_code::USAGE_ERROR)
            } else {
                (&mut *out, exit_code::SUCCESS)
            };
            if write!(stream, "{}", e.render()).is_err() {
                return exit_code::IO_ERROR;
            }
            return code;
        }
    };

    match execute(mode, suite, out, err) {
        Ok(code) => code,
        Err(e) => {
            let _ = writeln!(err, "error: {e:#}");
            exit_code::IO_ERROR
        }
    }
}

fn execute(
    mode: Mode,
    suite: impl Fn(&mut dyn Visitor),
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<u8> {
    match mode {
        Mode::List => {
            list_tests_from(out, suite).context("failed to write test listing")?;
            Ok(exit_code::SUCCESS)
        }
        Mode::Run(config) => {
            let summary =
                run_tests_from(out, err, config, suite).context("failed to write test output")?;
            info!(
                passed = summary.passed,
                failed = summary.failed,
                "tests finished"
            );
            if summary.is_success() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::TESTS_FAILED)
            }
        }
    }
}
