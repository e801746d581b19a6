//! Inline SVG image transform.
//!
//! Finds `<img>` elements whose `src` is a base64-encoded `image/svg+xml`
//! data URI and replaces each one with the `<svg>` markup it encodes. HTML
//! attributes on the original `<img>` element are carried over onto the
//! `<svg>` root element.
//!
//! This is a scoped text-substitution pass, not an HTML parse: elements are
//! located with non-greedy single-line tag patterns, and the result is a new
//! string (the input is never mutated). The whole pass either succeeds or
//! returns the first error - no partially rewritten text is produced.

mod attrs;
mod decode;
mod error;
mod rewrite;
mod scan;

use anyhow::Result;
use regex::Regex;

use crate::pipeline::AssetProcessor;

pub use error::InlineError;

/// Replace every matching data-URI `<img>` element in `html` with its
/// decoded `<svg>` markup.
///
/// Input without any matching element is returned unchanged.
pub fn inline_svg_images(html: &str) -> Result<String, InlineError> {
    rewrite::rewrite(html)
}

/// Pipeline processor wrapping [`inline_svg_images`].
pub struct InlineSvgProcessor {
    pattern: Regex,
}

impl InlineSvgProcessor {
    /// Create a processor selecting assets whose name matches `pattern`.
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl AssetProcessor for InlineSvgProcessor {
    fn name(&self) -> &str {
        "inline-svg"
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn process(&self, _asset_name: &str, text: &str) -> Result<String> {
        Ok(inline_svg_images(text)?)
    }
}
