//! inline-svg - a post-build asset processor that replaces base64 SVG
//! data-URI `<img>` elements in built HTML with their literal `<svg>` markup.

mod asset;
mod cli;
mod config;
mod inline;
mod logger;
mod pipeline;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = Config::load(&cli)?;

    match &cli.command {
        Commands::Process { args } => cli::process::run(args, &config),
    }
}
