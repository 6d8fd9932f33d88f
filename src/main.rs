//! tfscaffold: generate commented HCL templates from Terraform provider schemas.
//!
//! This is the main entry point for the `tfscaffold` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and handles
//! errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod export;
mod logging;
pub mod render;
pub mod schema;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_logging(cli.global.verbose, cli.global.quiet);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
