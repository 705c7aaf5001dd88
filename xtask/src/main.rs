//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use std::{path::PathBuf, process};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter, applying fixes.
    Tidy,
    /// Check formatting and lints without modifying files.
    Check,
    /// Run tests using cargo nextest.
    Test,
    /// Run the search benchmarks.
    Bench {
        /// Only run benchmarks whose name contains this filter.
        filter: Option<String>,
    },
}

/// Repository root, computed relative to the `xtask` crate.
fn repo_root() -> Result<PathBuf> {
    let xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    Ok(xtask_dir
        .parent()
        .context("xtask crate must live at <repo>/xtask")?
        .to_path_buf())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

/// Dispatch the selected `xtask` command.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let sh = repo_shell()?;

    match cli.command {
        CommandName::Tidy => tidy(&sh),
        CommandName::Check => check(&sh),
        CommandName::Test => test(&sh),
        CommandName::Bench { filter } => bench(&sh, filter.as_deref()),
    }
}

/// Run `cargo fmt` and the workspace linter.
fn tidy(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo fmt --all").run()?;
    cmd!(
        sh,
        "cargo clippy -q --fix --all --all-targets --all-features --allow-dirty --tests --benches"
    )
    .run()?;
    cmd!(sh, "cargo fmt --all").run()?;
    Ok(())
}

/// Fail on unformatted code or lint warnings.
fn check(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo fmt --all -- --check").run()?;
    cmd!(sh, "cargo clippy -q --all --all-targets -- -D warnings").run()?;
    Ok(())
}

/// Run tests using cargo nextest.
fn test(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo nextest run --all").run()?;
    Ok(())
}

/// Run the criterion benchmarks of the search library.
fn bench(sh: &Shell, filter: Option<&str>) -> Result<()> {
    cmd!(sh, "cargo bench -p dimsearch --bench search -- {filter...}").run()?;
    Ok(())
}

/// Create a shell rooted at the repository root.
fn repo_shell() -> Result<Shell> {
    let sh = Shell::new()?;
    sh.change_dir(repo_root()?);
    Ok(sh)
}
