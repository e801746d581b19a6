//! Configuration loading and validation.
//!
//! Reads `inline-svg.toml` (or the `-C/--config` override). A missing file is
//! not an error - every option has a default. A present file is parsed with
//! unknown-key warnings, and option values that can fail at run time (the
//! asset name pattern) are validated up front.
//!
//! # Example
//!
//! ```toml
//! [process]
//! asset_pattern = "\\.html$"
//! can_print = true
//! ```

mod error;

use std::fs;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::log;

pub use error::ConfigError;

/// Default asset name pattern: process `.html` assets.
pub const DEFAULT_ASSET_PATTERN: &str = r"\.html$";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub process: ProcessConfig,
}

/// `[process]` section: which assets to process and how loudly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    /// Regex selecting which asset names to process.
    /// Matched against root-relative names with `/` separators.
    pub asset_pattern: String,

    /// Whether the pipeline prints progress and summary output.
    /// Errors are printed regardless.
    pub can_print: bool,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            asset_pattern: DEFAULT_ASSET_PATTERN.to_string(),
            can_print: true,
        }
    }
}

impl Config {
    /// Load configuration for this invocation.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let config = match fs::read_to_string(&cli.config) {
            Ok(text) => Self::parse(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(ConfigError::Io(cli.config.clone(), e)),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML, warning about unrecognized keys.
    fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut unknown = Vec::new();
        let config = serde_ignored::deserialize(toml::Deserializer::new(text), |path| {
            unknown.push(path.to_string());
        })?;
        for key in &unknown {
            log!("warning"; "unknown config key `{key}`");
        }
        Ok(config)
    }

    /// Validate option values that can fail at run time.
    fn validate(&self) -> Result<(), ConfigError> {
        compile_pattern(&self.process.asset_pattern).map(|_| ())
    }
}

/// Compile an asset name pattern, naming the offending field on failure.
fn compile_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|e| {
        ConfigError::Validation(format!("[process.asset_pattern] not a valid regex: {e}"))
    })
}
