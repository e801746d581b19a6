//! Attribute extraction and merge.

use std::sync::LazyLock;

use regex::Regex;

/// `name="value"` pairs: names are letters and hyphens, values any run of
/// non-quote characters.
static ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([a-zA-Z-]+)="([^"]+)""#).unwrap());

/// A single `name="value"` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// Collect `name="value"` attributes from an element's text, left to right.
pub fn collect_attributes(element: &str) -> Vec<Attribute<'_>> {
    ATTRIBUTE
        .captures_iter(element)
        .map(|cap| Attribute {
            name: cap.get(1).unwrap().as_str(),
            value: cap.get(2).unwrap().as_str(),
        })
        .collect()
}

/// Build the merged `<svg ...>` opening tag from the original `<img>` element
/// and the decoded `<svg>` opening tag.
///
/// `<img>` attributes come first (minus `src`, which never carries over),
/// then the `<svg>` tag's own attributes. Same-named attributes are not
/// de-duplicated: both occurrences are kept in source order, so the later
/// (rightmost) one wins when the output is parsed downstream. An empty
/// combined list serializes as `<svg >`.
pub fn merge_opening_tag(img_element: &str, svg_open_tag: &str) -> String {
    let attrs: Vec<String> = collect_attributes(img_element)
        .into_iter()
        .filter(|a| a.name != "src")
        .chain(collect_attributes(svg_open_tag))
        .map(|a| format!("{}=\"{}\"", a.name, a.value))
        .collect();

    format!("<svg {}>", attrs.join(" "))
}
