//! CLI argument parsing for tfscaffold.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// tfscaffold: generate commented HCL templates from Terraform provider schemas.
///
/// Reads the JSON written by `terraform providers schema -json` and renders a
/// starter `resource` or `data` block for any entry, with every attribute
/// annotated by requirement tier and type.
#[derive(Parser, Debug)]
#[command(name = "tfscaffold")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Defaults to `explore` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to the schema JSON file (overrides the config file).
    #[arg(long, global = true)]
    pub schema_path: Option<PathBuf>,

    /// Provider name, e.g. `azurerm` or `aws` (overrides the config file).
    #[arg(long, global = true)]
    pub provider: Option<String>,

    /// Config file (default: `./tfscaffold.yaml` when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands for tfscaffold.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the template for one resource or data source.
    ///
    /// Prints to stdout, or writes to `--output`.
    Generate(GenerateArgs),

    /// List resource names containing a search string.
    Search(SearchArgs),

    /// Interactive search, preview, and export loop.
    Explore,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Resource or data-source name, e.g. `azurerm_storage_account`.
    pub name: String,

    /// Write the template to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only include required attributes and blocks with `min_items > 0`.
    #[arg(long)]
    pub required_only: bool,

    /// Leave schema descriptions out of the template.
    #[arg(long)]
    pub no_descriptions: bool,
}

/// Arguments for the `search` command.
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Case-insensitive substring to match.
    pub query: String,

    /// Also search data sources.
    #[arg(long)]
    pub data: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
