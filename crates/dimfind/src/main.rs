//! Command‑line entry point for the `dimfind` tool.
//!
//! Provides subcommands that search for the dimensions of a golden-ratio or
//! √2 box, a sphere, or an oblate spheroid with a given volume.

use std::{
    fmt::Display,
    io::{self, IsTerminal},
    process,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use dimsearch::{RatioFamily, registry};
use tracing::Level;

/// CLI command implementations.
mod cmd;

use crate::cmd::{ScanOptions, ShapeSelection};

/// Parse a scan step, which must be a finite number greater than zero.
fn parse_step(s: &str) -> Result<f64, String> {
    let step: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid step '{s}': expected a number"))?;
    if step.is_finite() && step > 0.0 {
        Ok(step)
    } else {
        Err(format!("step must be greater than zero, got {step}"))
    }
}

/// Parse a tolerance half-width, which must be a finite number >= 0.
fn parse_exit_range(s: &str) -> Result<f64, String> {
    let range: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid exit range '{s}': expected a number"))?;
    if range.is_finite() && range >= 0.0 {
        Ok(range)
    } else {
        Err(format!("exit range must be >= 0, got {range}"))
    }
}

/// Parse a ratio family selector (`GOLDEN` or `SQRT`, any case).
fn parse_ratio_family(s: &str) -> Result<RatioFamily, String> {
    s.parse::<RatioFamily>().map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "dimfind")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v` traces every sample).
    #[arg(short, global = true, action = clap::ArgAction::Count, help = "Sets the level of verbosity")]
    v: u8,

    #[arg(
        short = 's',
        long = "start-cm",
        global = true,
        default_value_t = 20.0,
        allow_negative_numbers = true,
        help = "First height or radius to try, in cm"
    )]
    /// First driving-parameter value.
    start_cm: f64,

    #[arg(
        short = 'e',
        long = "end-cm",
        global = true,
        default_value_t = 40.0,
        allow_negative_numbers = true,
        help = "Stop before this height or radius, in cm"
    )]
    /// Exclusive end of the scan.
    end_cm: f64,

    #[arg(
        short = 'x',
        long = "step-size",
        global = true,
        default_value_t = 0.5,
        value_parser = parse_step,
        help = "Increment between tries, in cm"
    )]
    /// Step between samples.
    step_size: f64,

    #[arg(
        short = 'r',
        long = "exit-range",
        global = true,
        default_value_t = 100.0,
        value_parser = parse_exit_range,
        help = "Accept volumes within this many cm^3 of the target"
    )]
    /// Tolerance half-width.
    exit_range: f64,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Scan settings from the global options.
    fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            start: self.start_cm,
            end: self.end_cm,
            step: self.step_size,
            exit_range: self.exit_range,
        }
    }
}

#[derive(Subcommand)]
/// Subcommands supported by the `dimfind` tool.
enum Commands {
    #[command(about = "Find a golden ratio box with the given volume")]
    /// Search for a golden ratio box.
    CalculateGoldenRatio {
        #[arg(help = "Target volume in cm^3")]
        /// Target volume in cm³.
        box_volume_cm3: f64,
    },

    #[command(about = "Find a square root of two box with the given volume")]
    /// Search for a √2 box.
    CalculateSqrtTwo {
        #[arg(help = "Target volume in cm^3")]
        /// Target volume in cm³.
        box_volume_cm3: f64,
    },

    #[command(about = "Find a sphere with the given volume")]
    /// Search for a sphere.
    CalculateSphere {
        #[arg(help = "Target volume in cm^3")]
        /// Target volume in cm³.
        volume_cm3: f64,
    },

    #[command(about = "Find an oblate spheroid with the given volume")]
    /// Search for an oblate spheroid.
    CalculateOblateSpheroid {
        #[arg(
            long = "ratio",
            value_parser = parse_ratio_family,
            default_value = "GOLDEN",
            help = "Polar radius ratio family (GOLDEN or SQRT)"
        )]
        /// Ratio family for the polar radius.
        ratio: RatioFamily,

        #[arg(long = "narrow", help = "Use the narrow (ratio - 1) factor")]
        /// Use the family's narrow factor.
        narrow: bool,

        #[arg(help = "Target volume in cm^3")]
        /// Target volume in cm³.
        volume_cm3: f64,
    },

    #[command(name = "list-shapes", about = "List supported shapes and their options")]
    /// List supported shapes.
    ListShapes,
}

/// Install the log output sink. `-v` enables per-sample traces.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_level(false)
        .without_time()
        .with_ansi(io::stdout().is_terminal())
        .init();
}

/// Exit with an error message if `result` failed.
fn report<E: Display>(result: Result<(), E>) {
    if let Err(e) = result {
        eprintln!("{e:#}");
        process::exit(1);
    }
}

/// Run a search for the registry shape `key` and discard the result, which
/// has already been logged.
fn handle_find(
    key: &str,
    family: RatioFamily,
    narrow: bool,
    target: f64,
    options: ScanOptions,
) -> Result<()> {
    cmd::find(
        ShapeSelection {
            key,
            family,
            narrow,
        },
        target,
        options,
    )
    .map(|_| ())
}

/// Handle the `list-shapes` subcommand.
fn handle_list_shapes() {
    println!("Supported shapes (key — display — options):");
    for entry in registry::REGISTRY {
        println!("- {} — {} — {}", entry.key, entry.display, entry.options);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);
    let options = cli.scan_options();

    match cli.command {
        Commands::CalculateGoldenRatio { box_volume_cm3 } => report(handle_find(
            "golden-box",
            RatioFamily::Golden,
            false,
            box_volume_cm3,
            options,
        )),
        Commands::CalculateSqrtTwo { box_volume_cm3 } => report(handle_find(
            "sqrt-box",
            RatioFamily::Sqrt,
            false,
            box_volume_cm3,
            options,
        )),
        Commands::CalculateSphere { volume_cm3 } => report(handle_find(
            "sphere",
            RatioFamily::default(),
            false,
            volume_cm3,
            options,
        )),
        Commands::CalculateOblateSpheroid {
            ratio,
            narrow,
            volume_cm3,
        } => report(handle_find(
            "oblate-spheroid",
            ratio,
            narrow,
            volume_cm3,
            options,
        )),
        Commands::ListShapes => handle_list_shapes(),
    }
}
