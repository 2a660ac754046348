//! The resolved metadata record handed to renderers.
//!
//! ## Example
//!
//! ```rust
//! use metacard::PageDetails;
//!
//! let html = r#"<title>Home</title><meta name="twitter:card" content="summary">"#;
//! let doc = PageDetails::new(html, Some("https://example.com"), None)?.parse()?;
//!
//! assert_eq!(doc.get_content("title"), "Home");
//! assert_eq!(doc.get_content("twitter:card"), "summary");
//! assert_eq!(doc.get_content("display_url"), "example.com");
//! assert!(doc.get("missing").is_empty());
//! # Ok::<(), metacard::MetacardError>(())
//! ```

use serde::Serialize;
use std::collections::BTreeMap;

/// Content of a metadata value plus the raw HTML it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagInfo {
    pub content: String,
    pub html: String,
}

impl TagInfo {
    pub fn new(content: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            html: html.into(),
        }
    }
}

/// Namespaced metadata keyed by the full identifier (`twitter:card`, `og:image`).
pub type TagMap = BTreeMap<String, TagInfo>;

/// Resolved metadata for one page.
///
/// Field order is part of the contract: serializers emit the fields in
/// declaration order, so the output always reads title, description, image,
/// image_alt, url, display_url, twitter, open_graph, meta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataDocument {
    pub title: TagInfo,
    pub description: Option<TagInfo>,
    pub image: String,
    pub image_alt: String,
    pub url: String,
    /// Host of `url` without the scheme, empty when `url` is not http(s).
    pub display_url: String,
    pub twitter: TagMap,
    pub open_graph: TagMap,
    /// Tags with no recognised namespace, e.g. `author` or `theme-color`.
    pub meta: TagMap,
}

/// Result of a key lookup on a [`MetadataDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// A tag value, either a top-level field or a namespaced entry.
    Tag(&'a TagInfo),
    /// A derived top-level string field such as `image` or `display_url`.
    Text(&'a str),
    /// Nothing stored under the key.
    Empty,
}

impl<'a> Lookup<'a> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Lookup::Empty)
    }

    /// The content string, or `""` for [`Lookup::Empty`].
    pub fn content(&self) -> &'a str {
        match *self {
            Lookup::Tag(info) => &info.content,
            Lookup::Text(text) => text,
            Lookup::Empty => "",
        }
    }

    pub fn tag(&self) -> Option<&'a TagInfo> {
        match *self {
            Lookup::Tag(info) => Some(info),
            _ => None,
        }
    }
}

impl MetadataDocument {
    fn field(&self, key: &str) -> Option<Lookup<'_>> {
        let found = match key {
            "title" => Lookup::Tag(&self.title),
            "description" => self.description.as_ref().map_or(Lookup::Empty, Lookup::Tag),
            "image" => Lookup::Text(&self.image),
            "image_alt" => Lookup::Text(&self.image_alt),
            "url" => Lookup::Text(&self.url),
            "display_url" => Lookup::Text(&self.display_url),
            _ => return None,
        };
        Some(found)
    }

    /// Look up `key` among the top-level fields, then the `twitter` map, then
    /// the `open_graph` map, then the generic `meta` map.
    ///
    /// Misses return [`Lookup::Empty`].
    pub fn get(&self, key: &str) -> Lookup<'_> {
        if let Some(found) = self.field(key) {
            return found;
        }

        self.twitter
            .get(key)
            .or_else(|| self.open_graph.get(key))
            .or_else(|| self.meta.get(key))
            .map_or(Lookup::Empty, Lookup::Tag)
    }

    /// Content string stored under `key`, or `""` when nothing is.
    pub fn get_content(&self, key: &str) -> &str {
        self.get(key).content()
    }

    /// The description text, or `""` when the page declared none.
    pub fn description_content(&self) -> &str {
        self.description.as_ref().map_or("", |d| d.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MetadataDocument {
        let mut twitter = TagMap::new();
        twitter.insert(
            "twitter:card".to_string(),
            TagInfo::new("summary", r#"<meta name="twitter:card" content="summary">"#),
        );
        let mut open_graph = TagMap::new();
        open_graph.insert(
            "og:card".to_string(),
            TagInfo::new("shadowed", r#"<meta property="og:card" content="shadowed">"#),
        );
        open_graph.insert(
            "twitter:card".to_string(),
            TagInfo::new("never", r#"<meta property="twitter:card" content="never">"#),
        );

        MetadataDocument {
            title: TagInfo::new("Home", "<title>Home</title>"),
            description: None,
            image: String::new(),
            image_alt: String::new(),
            url: "https://example.com".to_string(),
            display_url: "example.com".to_string(),
            twitter,
            open_graph,
            meta: TagMap::new(),
        }
    }

    #[test]
    fn test_lookup_order_prefers_twitter_over_open_graph() {
        let doc = sample();
        assert_eq!(doc.get_content("twitter:card"), "summary");
        assert_eq!(doc.get_content("og:card"), "shadowed");
    }

    #[test]
    fn test_lookup_miss_is_empty_sentinel() {
        let doc = sample();
        assert_eq!(doc.get("nonexistent_key"), Lookup::Empty);
        assert_eq!(doc.get_content("nonexistent_key"), "");
        assert!(doc.get("description").is_empty());
        assert_eq!(doc.description_content(), "");
    }

    #[test]
    fn test_top_level_fields() {
        let doc = sample();
        assert_eq!(doc.get("title").tag().map(|t| t.html.as_str()), Some("<title>Home</title>"));
        assert_eq!(doc.get("display_url"), Lookup::Text("example.com"));
        assert_eq!(doc.get("image"), Lookup::Text(""));
    }
}
