//! Command line flags of a test program.

use clap::Parser;
use std::ffi::OsString;
use zt_core::RunnerConfig;

#[derive(Parser, Debug)]
#[command(about = "Run or list the unit tests built into this program")]
#[command(version)]
pub struct Cli {
    /// List test suites and cases without running them
    #[arg(short, long, conflicts_with = "verbose")]
    pub list: bool,

    /// Print the name of every suite and case as it runs
    #[arg(short, long)]
    pub verbose: bool,
}

/// What a test program was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Run(RunnerConfig),
}

impl From<&Cli> for Mode {
    fn from(cli: &Cli) -> Self {
        if cli.list {
            Self::List
        } else {
            Self::Run(RunnerConfig {
                verbose: cli.verbose,
            })
        }
    }
}

/// Parse the program arguments, including the program name.
///
/// # Errors
/// Returns the clap error for invalid arguments and for `--help` and
/// `--version`, which are rendered by the caller.
pub fn parse_mode<I, T>(args: I) -> Result<Mode, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    Ok(Mode::from(&cli))
}
