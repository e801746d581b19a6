//! Output rewriter: folds decoded SVG blocks back into the asset text.

use super::attrs::merge_opening_tag;
use super::decode::decode_payload;
use super::error::InlineError;
use super::scan::scan;

/// Rewrite `html`, replacing each matched `<img>` element with its decoded
/// SVG content carrying the merged opening tag.
///
/// Substitutions apply sequentially in scan order, each consuming the first
/// remaining occurrence of its `<img>` element text, so textually identical
/// elements are each replaced exactly once. The first decode or tag error
/// aborts the pass - the caller sees either the fully rewritten text or the
/// error, never a partially rewritten asset.
pub fn rewrite(html: &str) -> Result<String, InlineError> {
    let mut output = html.to_string();

    for img in scan(html) {
        let svg = decode_payload(img.payload)?;
        let merged = merge_opening_tag(img.element, &svg.open_tag);
        let body = svg.content.replacen(&svg.open_tag, &merged, 1);
        output = output.replacen(img.element, &body, 1);
    }

    Ok(output)
}
