//! lambdeploy: prints the commands that ship a container image to AWS Lambda.
//!
//! This is the main entry point for the `lambdeploy` CLI. It parses
//! arguments, sets up logging, runs the generator, and maps errors to exit
//! codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
mod logging;
pub mod params;
mod prompt;
pub mod steps;
pub mod template;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
