//! Implementation of the `tfscaffold generate` command.

use super::write_line;
use crate::cli::GenerateArgs;
use crate::context::RunContext;
use crate::error::Result;
use crate::export::save_template;
use crate::render::RenderOptions;
use std::io::Write;

/// Execute the `tfscaffold generate` command.
///
/// Renders one entry and prints it, or saves it to `--output` and prints
/// where it went.
pub fn cmd_generate<W: Write>(ctx: &RunContext, args: &GenerateArgs, out: &mut W) -> Result<()> {
    let options = RenderOptions {
        with_descriptions: ctx.config.with_descriptions && !args.no_descriptions,
        required_only: args.required_only,
    };
    tracing::debug!(name = %args.name, ?options, "rendering template");

    let template = ctx.renderer().render(&args.name, options)?;

    match &args.output {
        Some(path) => {
            save_template(path, &template)?;
            write_line(out, &format!("Saved to {}", path.display()))
        }
        None => write_line(out, &template),
    }
}
