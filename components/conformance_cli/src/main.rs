//! Conformance runner CLI
//!
//! Entry point for batch conformance runs. Parses CLI arguments and
//! delegates to the runner, mapping errors to exit codes: 1 for a run with
//! failures, 2 for a session that could not run at all.

use clap::Parser;
use conformance_cli::{runner, Cli, CliError};

fn main() {
    let cli = Cli::parse();

    match runner::run(&cli) {
        Ok(report) => {
            println!("\n{}", report.detailed_summary());
            if !report.is_success() {
                std::process::exit(1);
            }
        }
        Err(CliError::Usage(message)) => {
            eprintln!("Error: {}", message);
            std::process::exit(2);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(2);
        }
    }
}
