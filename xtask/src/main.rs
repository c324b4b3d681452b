use std::process::{Command, ExitCode, ExitStatus};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

/// Exit code of a test program whose tests ran and failed.
const TESTS_FAILED: i32 = 1;

#[derive(Parser)]
#[command(name = "xtask", about = "Build tasks for zt")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run cargo fmt --check
    Fmt,
    /// Run cargo check
    Check,
    /// Run cargo clippy
    Clippy,
    /// Run cargo test
    Test,
    /// Build the API documentation
    Doc,
    /// Run all CI checks (fmt, check, clippy, test, doc, demo)
    Ci,
    /// Run the demo test program
    Demo {
        /// Arguments to pass to zt-demo
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:?}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Fmt => cmd_fmt(),
        Commands::Check => cmd_check(),
        Commands::Clippy => cmd_clippy(),
        Commands::Test => cmd_test(),
        Commands::Doc => cmd_doc(),
        Commands::Ci => cmd_ci(),
        Commands::Demo { args } => cmd_demo(&args),
    }
}

fn cmd_fmt() -> Result<()> {
    cargo(&["fmt", "--all", "--check"])
}

fn cmd_check() -> Result<()> {
    cargo(&["check", "--workspace", "--all-targets"])
}

fn cmd_clippy() -> Result<()> {
    cargo(&["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])
}

fn cmd_test() -> Result<()> {
    cargo(&["test", "--workspace"])
}

fn cmd_doc() -> Result<()> {
    cargo(&["doc", "--workspace", "--no-deps"])
}

fn cmd_ci() -> Result<()> {
    cmd_fmt()?;
    cmd_check()?;
    cmd_clippy()?;
    cmd_test()?;
    cmd_doc()?;
    cmd_demo(&[])?;
    Ok(())
}

/// Run zt-demo. Its failing cases are intentional, so exit code 1 counts
/// as success; anything else means the engine itself broke.
fn cmd_demo(args: &[String]) -> Result<()> {
    let mut cmd_args = vec!["run", "-q", "-p", "zt-demo", "--"];
    cmd_args.extend(args.iter().map(String::as_str));
    let status = spawn("cargo", &cmd_args)?;
    match status.code() {
        Some(0 | TESTS_FAILED) => Ok(()),
        _ => bail!("zt-demo: {}", describe(status)),
    }
}

fn cargo(args: &[&str]) -> Result<()> {
    exec("cargo", args)
}

fn exec(program: &str, args: &[&str]) -> Result<()> {
    let status = spawn(program, args)?;
    if !status.success() {
        bail!("{program} {}: {}", args.join(" "), describe(status));
    }
    Ok(())
}

fn spawn(program: &str, args: &[&str]) -> Result<ExitStatus> {
    let cmd_line = format!("{program} {}", args.join(" "));
    eprintln!("$ {cmd_line}");

    Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to execute: {cmd_line}"))
}

fn describe(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}
