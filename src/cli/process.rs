//! `process` command: run the asset pipeline over built output trees.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use regex::Regex;

use crate::cli::ProcessArgs;
use crate::config::Config;
use crate::inline::InlineSvgProcessor;
use crate::log;
use crate::logger;
use crate::pipeline::{Pipeline, RunSummary};

pub fn run(args: &ProcessArgs, config: &Config) -> Result<()> {
    logger::set_verbose(args.verbose);

    let pattern = effective_pattern(args, config);
    let regex =
        Regex::new(pattern).with_context(|| format!("invalid asset pattern `{pattern}`"))?;
    let can_print = config.process.can_print && !args.quiet;

    let pipeline = Pipeline::new(can_print, args.dry_run).register(InlineSvgProcessor::new(regex));

    let mut total = RunSummary::default();
    for path in &args.paths {
        total.merge(run_on_path(&pipeline, path)?);
    }

    if can_print {
        let verb = if args.dry_run {
            "would rewrite"
        } else {
            "rewrote"
        };
        log!("process"; "{} {} of {} matching asset(s)", verb, total.rewritten, total.matched);
    }
    Ok(())
}

/// CLI `--pattern` beats the config file value.
fn effective_pattern<'a>(args: &'a ProcessArgs, config: &'a Config) -> &'a str {
    args.pattern
        .as_deref()
        .unwrap_or(&config.process.asset_pattern)
}

fn run_on_path(pipeline: &Pipeline, path: &Path) -> Result<RunSummary> {
    if !path.exists() {
        return Err(anyhow!("no such path: {}", path.display()));
    }
    pipeline.run(path)
}
