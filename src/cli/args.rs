//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// inline-svg asset processor CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: inline-svg.toml)
    #[arg(short = 'C', long, default_value = "inline-svg.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Inline SVG data URIs into built assets
    #[command(visible_alias = "p")]
    Process {
        #[command(flatten)]
        args: ProcessArgs,
    },
}

/// Process command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ProcessArgs {
    /// Build output directories (or single files) to process
    #[arg(value_name = "PATH", default_value = ".", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Override the asset name pattern from config
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Report what would be rewritten without writing changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}
