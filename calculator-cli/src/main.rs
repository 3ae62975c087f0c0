//! `add_numbers` - add two numbers from the command line.

use std::io;
use std::process::ExitCode;

use calculator_cli::{Cli, init_logging, report, run};
use clap::Parser;

fn main() -> ExitCode {
    // Exits with status 2 and a usage message on stderr if parsing fails.
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut stdout = io::stdout().lock();
    report(run(&cli, &mut stdout), &mut stdout);

    ExitCode::SUCCESS
}
