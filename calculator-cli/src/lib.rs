//! Calculator CLI - argument parsing and reporting for `add_numbers`.
//!
//! The binary is a thin wrapper: [`Cli`] parses the operands, [`run`] writes
//! the sum, and [`report`] applies the catch-and-report policy to whatever
//! went wrong while doing so.

use std::io::Write;

use calculator::{Result, Sum, parse_number};
use clap::Parser;
use tracing::{Level, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for `add_numbers`.
#[derive(Debug, Clone, Copy, PartialEq, Parser)]
#[command(name = "add_numbers")]
#[command(version, about = "Simple calculator to add two numbers.", long_about = None)]
pub struct Cli {
    /// First number
    #[arg(value_parser = parse_number, allow_hyphen_values = true)]
    pub num1: f64,

    /// Second number
    #[arg(value_parser = parse_number, allow_hyphen_values = true)]
    pub num2: f64,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Initialize logging on stderr with the given verbosity level.
///
/// `RUST_LOG` takes precedence over the verbosity flag when set.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "calculator={level},calculator_cli={level},add_numbers={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .init();
}

/// Compute the sum of the parsed operands and write it to `out`.
///
/// # Errors
///
/// Returns [`calculator::CalcError::Io`] if writing to `out` fails.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let sum = Sum::of(cli.num1, cli.num2);
    writeln!(out, "{sum}")?;
    out.flush()?;
    Ok(())
}

/// Report the outcome of [`run`] without propagating it.
///
/// Errors are written to `out` as `An error occurred: {message}` and then
/// dropped; the process still exits successfully.
pub fn report<W: Write>(outcome: Result<()>, out: &mut W) {
    if let Err(e) = outcome {
        warn!(error = %e, "failed to report sum");
        // stdout may be the thing that failed; nothing left to tell.
        let _ = writeln!(out, "An error occurred: {e}");
        let _ = out.flush();
    }
}
