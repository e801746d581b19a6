//! Inline transform error types.

use thiserror::Error;

/// Errors produced while inlining one asset's SVG images.
///
/// Every variant is fatal to the current asset: there is no per-match
/// recovery, and the first error aborts the whole pass. The transform is
/// deterministic, so retrying with the same input never helps.
#[derive(Debug, Error)]
pub enum InlineError {
    /// The captured payload is not valid base64.
    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The payload decoded, but not to text.
    #[error("decoded payload is not valid UTF-8: {0}")]
    DecodeText(#[from] std::string::FromUtf8Error),

    /// The decoded text contains no `<svg>` opening tag.
    #[error("decoded payload contains no <svg> opening tag")]
    MissingSvgTag,
}
