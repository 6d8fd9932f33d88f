//! Command implementations for tfscaffold.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command resolves a [`RunContext`] first.

mod explore;
mod generate;
mod search;

use crate::cli::{Cli, Command};
use crate::context::RunContext;
use crate::error::{Result, ScaffoldError};
use crate::export::SystemClipboard;
use std::io::{self, Write};

pub use explore::Explorer;

/// Dispatch a command to its implementation.
///
/// Running without a subcommand starts the interactive explorer.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = RunContext::resolve(&cli.global)?;
    tracing::debug!(
        schema = %ctx.schema_path.display(),
        provider = %ctx.config.provider,
        "resolved run context"
    );
    let stdout = io::stdout();

    match cli.command {
        Some(Command::Generate(args)) => generate::cmd_generate(&ctx, &args, &mut stdout.lock()),
        Some(Command::Search(args)) => search::cmd_search(&ctx, &args, &mut stdout.lock()),
        Some(Command::Explore) | None => {
            let stdin = io::stdin();
            let mut explorer =
                Explorer::new(&ctx, stdin.lock(), stdout.lock(), SystemClipboard::new());
            explorer.run()
        }
    }
}

/// Map a failed terminal write to an I/O error.
fn output_error(e: io::Error) -> ScaffoldError {
    ScaffoldError::Io(format!("failed to write output: {}", e))
}

/// `writeln!` with the error mapped into [`ScaffoldError`].
fn write_line<W: Write>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{}", line).map_err(output_error)
}
