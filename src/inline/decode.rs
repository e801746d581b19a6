//! Payload decoder: base64 to SVG source text, plus opening-tag extraction.

use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;

use super::error::InlineError;

/// First `<svg ...>` opening tag, through its terminating `>`.
static SVG_OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<svg[^>]*>").unwrap());

/// Decoded SVG markup plus its identified opening tag.
#[derive(Debug, Clone)]
pub struct SvgBlock {
    /// Full decoded SVG source text.
    pub content: String,
    /// The first `<svg ...>` opening tag within `content`.
    pub open_tag: String,
}

/// Decode a base64 payload and locate its `<svg>` opening tag.
///
/// A payload that is not valid base64 (or does not decode to text) is an
/// [`InlineError::Decode`]/[`InlineError::DecodeText`]; decoded text with no
/// `<svg` opening tag did not actually encode SVG content and is an
/// [`InlineError::MissingSvgTag`].
pub fn decode_payload(payload: &str) -> Result<SvgBlock, InlineError> {
    let bytes = STANDARD.decode(payload)?;
    let content = String::from_utf8(bytes)?;

    let open_tag = SVG_OPEN_TAG
        .find(&content)
        .ok_or(InlineError::MissingSvgTag)?
        .as_str()
        .to_string();

    Ok(SvgBlock { content, open_tag })
}
