//! Match scanner: locates data-URI `<img>` elements.

use std::sync::LazyLock;

use regex::Regex;

/// `<img ... src="data:image/svg+xml;base64,<payload>" ... >` within a single
/// line, non-greedy up to the element's terminating `>` or `/>`. Unterminated
/// tags never match.
static IMG_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<img[^>\n]*?src="data:image/svg\+xml;base64,([^"]+)"[^>\n]*?/?>"#).unwrap()
});

/// One scanned `<img>` element and its captured base64 payload.
///
/// Borrows from the scanned text; matches only live for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImgMatch<'a> {
    /// Full matched `<img ...>` element text.
    pub element: &'a str,
    /// Base64 payload captured from the `src` data URI.
    pub payload: &'a str,
}

/// Scan `html` for data-URI `<img>` elements, in document order, one match
/// per non-overlapping occurrence.
///
/// Each call returns a fresh sequence - no scan state is carried between
/// calls. Elements that do not match never appear here and are left
/// untouched by the rewrite.
pub fn scan(html: &str) -> impl Iterator<Item = ImgMatch<'_>> {
    IMG_TAG.captures_iter(html).map(|cap| ImgMatch {
        element: cap.get(0).unwrap().as_str(),
        payload: cap.get(1).unwrap().as_str(),
    })
}
