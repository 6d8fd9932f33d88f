//! Implementation of the interactive `tfscaffold explore` loop.
//!
//! Each round searches entry names, lets the user pick a match, prints the
//! full template, and offers one export action. The loop is generic over its
//! input, output and clipboard so it can be driven from tests.
//!
//! # Actions
//!
//! - `p` print the full template again
//! - `f` save the full template to a file
//! - `c` copy the required-only template to the clipboard
//! - `o` copy the full template to the clipboard
//! - `b` (or anything else) back to search

use super::output_error;
use crate::context::RunContext;
use crate::error::{Result, ScaffoldError};
use crate::export::{Clipboard, save_template};
use std::io::{BufRead, Write};


const QUERY_PROMPT: &str = "Enter search query (or 'q' to quit, 'data' to toggle data sources): ";
const SELECT_PROMPT: &str = "Select number: ";
const ACTION_PROMPT: &str = "What do you want to do? (p: print again, f: save to file, \
                             c: copy required only, o: copy full version, b: back): ";
const PATH_PROMPT: &str = "Enter file path (e.g., resource.tf): ";

/// The interactive explorer.
pub struct Explorer<'a, R, W, C> {
    ctx: &'a RunContext,
    input: R,
    output: W,
    clipboard: C,
    include_data: bool,
}

/// Templates rendered for the selected entry.
struct Rendered {
    full: String,
    required: String,
}

impl<'a, R: BufRead, W: Write, C: Clipboard> Explorer<'a, R, W, C> {
    pub fn new(ctx: &'a RunContext, input: R, output: W, clipboard: C) -> Self {
        Self {
            include_data: ctx.config.include_data_sources,
            ctx,
            input,
            output,
            clipboard,
        }
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.say("Entering interactive mode. Search for resources by partial name.")?;

        while let Some(query) = self.prompt(&format!("\n{}", QUERY_PROMPT))? {
            if query.eq_ignore_ascii_case("q") {
                break;
            }
            if query.eq_ignore_ascii_case("data") {
                self.include_data = !self.include_data;
                let state = if self.include_data { "included" } else { "excluded" };
                self.say(&format!("Data sources {}.", state))?;
                continue;
            }

            let ctx = self.ctx;
            let matches = ctx.schema.filter_names(&query, self.include_data);
            if matches.is_empty() {
                self.say("No matches found. Try again.")?;
                continue;
            }

            let Some(selected) = self.select(&matches)? else {
                continue;
            };
            tracing::info!(name = selected, "selected entry");

            let rendered = match self.render(selected) {
                Ok(rendered) => rendered,
                Err(e) => {
                    self.say(&format!("Error: {}", e))?;
                    continue;
                }
            };

            self.say("\nGenerated HCL Template (Full Version):")?;
            self.say(&rendered.full)?;

            if !self.act(&rendered)? {
                break;
            }
        }

        Ok(())
    }

    /// Show the numbered matches and read a choice.
    ///
    /// Returns `None` after reporting an invalid choice or at end of input.
    fn select<'m>(&mut self, matches: &[&'m str]) -> Result<Option<&'m str>> {
        self.say("\nMatches:")?;
        for (i, name) in matches.iter().enumerate() {
            self.say(&format!("{}. {}", i + 1, name))?;
        }

        let Some(answer) = self.prompt(SELECT_PROMPT)? else {
            return Ok(None);
        };
        let Ok(number) = answer.parse::<usize>() else {
            self.say("Invalid input. Enter a number.")?;
            return Ok(None);
        };

        match number.checked_sub(1).and_then(|i| matches.get(i).copied()) {
            Some(name) => Ok(Some(name)),
            None => {
                self.say("Invalid selection.")?;
                Ok(None)
            }
        }
    }

    fn render(&self, name: &str) -> Result<Rendered> {
        let renderer = self.ctx.renderer();
        let options = self.ctx.render_options();
        Ok(Rendered {
            full: renderer.render(name, options)?,
            required: renderer.render(name, options.required_only())?,
        })
    }

    /// Handle one export action. Returns `false` when input has ended.
    fn act(&mut self, rendered: &Rendered) -> Result<bool> {
        let Some(action) = self.prompt(&format!("\n{}", ACTION_PROMPT))? else {
            return Ok(false);
        };

        match action.to_lowercase().as_str() {
            "p" => self.say(&rendered.full)?,
            "f" => {
                let Some(path) = self.prompt(PATH_PROMPT)? else {
                    return Ok(false);
                };
                if path.is_empty() {
                    self.say("No file path given.")?;
                } else {
                    match save_template(&path, &rendered.full) {
                        Ok(()) => self.say(&format!("Saved full version to {}", path))?,
                        Err(e) => self.say(&format!("Error: {}", e))?,
                    }
                }
            }
            "c" => self.copy(&rendered.required, "Copied required-only version to clipboard.")?,
            "o" => self.copy(&rendered.full, "Copied full version to clipboard.")?,
            _ => {}
        }

        Ok(true)
    }

    fn copy(&mut self, text: &str, confirmation: &str) -> Result<()> {
        match self.clipboard.copy(text) {
            Ok(()) => self.say(confirmation),
            Err(e) => self.say(&e.to_string()),
        }
    }

    /// Print `text` without a newline and read one trimmed line.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text).map_err(output_error)?;
        self.output.flush().map_err(output_error)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| ScaffoldError::Io(format!("failed to read input: {}", e)))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).map_err(output_error)
    }
}
