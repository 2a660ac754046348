//! Text scanning for `<meta>` and `<title>` elements.
//!
//! This is a tag scanner, not an HTML parser. A `<meta` followed by whitespace
//! opens a tag and the next `>` closes it, so a `>` inside an attribute value
//! cuts the tag short. Offsets are byte positions into the scanned text.

use crate::constants::REGEXPS;
use crate::error::{MetacardError, Result};
use serde::Serialize;

/// Which element a [`TagMatch`] was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Meta,
    Title,
}

/// A located occurrence of an element in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagMatch {
    pub element: Element,
    /// The matched text. For titles this includes the closing tag.
    pub html: String,
    pub start: usize,
    pub end: usize,
}

impl TagMatch {
    fn new(element: Element, m: regex::Match<'_>) -> Self {
        Self {
            element,
            html: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
        }
    }
}

/// Lazy iterator over the `<meta>` tags of a document, in document order.
pub struct MetaTags<'h> {
    inner: regex::Matches<'static, 'h>,
}

impl Iterator for MetaTags<'_> {
    type Item = TagMatch;

    fn next(&mut self) -> Option<TagMatch> {
        self.inner.next().map(|m| TagMatch::new(Element::Meta, m))
    }
}

/// Scan `html` for `<meta ...>` opening tags.
pub fn meta_tags(html: &str) -> MetaTags<'_> {
    MetaTags {
        inner: REGEXPS.meta_tag.find_iter(html),
    }
}

/// The first `<title>` element of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleMatch {
    pub tag: TagMatch,
    /// Inner text exactly as written, without trimming or entity decoding.
    pub text: String,
}

/// Locate the first `<title>...</title>` element.
pub fn find_title(html: &str) -> Result<TitleMatch> {
    let caps = REGEXPS
        .title
        .captures(html)
        .ok_or(MetacardError::MissingTitle)?;
    let whole = caps.get(0).ok_or(MetacardError::MissingTitle)?;
    let text = caps.get(1).map_or("", |m| m.as_str()).to_string();

    Ok(TitleMatch {
        tag: TagMatch::new(Element::Title, whole),
        text,
    })
}
