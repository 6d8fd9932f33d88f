//! Implementation of the `tfscaffold search` command.

use super::write_line;
use crate::cli::SearchArgs;
use crate::context::RunContext;
use crate::error::Result;
use std::io::Write;

/// Execute the `tfscaffold search` command.
///
/// Prints matching names one per line. No matches is not an error.
pub fn cmd_search<W: Write>(ctx: &RunContext, args: &SearchArgs, out: &mut W) -> Result<()> {
    let matches = ctx.schema.filter_names(&args.query, args.data);
    tracing::debug!(query = %args.query, matches = matches.len(), "searched schema");

    for name in matches {
        write_line(out, name)?;
    }
    Ok(())
}
