//! Post-scan resolution of derived document fields.

use crate::classifier::Classified;
use crate::constants::REGEXPS;
use crate::document::{MetadataDocument, TagInfo, TagMap};

/// Content stored under `key`, unless missing or empty.
fn non_empty_content(map: &TagMap, key: &str) -> Option<String> {
    map.get(key)
        .map(|info| info.content.as_str())
        .filter(|content| !content.is_empty())
        .map(str::to_string)
}

/// Prefer the Twitter value for `field`, falling back to Open Graph.
fn twitter_then_open_graph(classified: &Classified, field: &str) -> String {
    non_empty_content(&classified.twitter, &format!("twitter:{field}"))
        .or_else(|| non_empty_content(&classified.open_graph, &format!("og:{field}")))
        .unwrap_or_default()
}

/// Host of an http(s) URL with the scheme removed.
///
/// `https://` is tried before `http://`. Anything else, or a host without a
/// dot, yields an empty string.
pub fn display_url(url: &str) -> String {
    REGEXPS
        .https_host
        .captures(url)
        .or_else(|| REGEXPS.http_host.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// The last description-bearing tag in document order.
pub fn resolve_description(descriptions: &[TagInfo]) -> Option<TagInfo> {
    descriptions.last().cloned()
}

/// Build the final document from the title and classified tags.
///
/// `requested_url` wins over any URL the page declares about itself.
pub fn resolve(
    title: TagInfo,
    classified: Classified,
    requested_url: Option<&str>,
) -> MetadataDocument {
    let description = resolve_description(&classified.descriptions);
    let image = twitter_then_open_graph(&classified, "image");
    let image_alt = twitter_then_open_graph(&classified, "image:alt");

    let url = match requested_url.filter(|u| !u.is_empty()) {
        Some(url) => url.to_string(),
        None => twitter_then_open_graph(&classified, "url"),
    };
    let display_url = display_url(&url);

    tracing::trace!(
        image = %image,
        image_alt = %image_alt,
        url = %url,
        display_url = %display_url,
        has_description = description.is_some(),
        "resolved document fields"
    );

    MetadataDocument {
        title,
        description,
        image,
        image_alt,
        url,
        display_url,
        twitter: classified.twitter,
        open_graph: classified.open_graph,
        meta: classified.meta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeTag;

    fn classified(tags: &[(&str, &str)]) -> Classified {
        let mut classified = Classified::new();
        for (key, content) in tags {
            let attr = AttributeTag {
                key: key.to_string(),
                content: content.to_string(),
            };
            classified.push(attr, "<meta>", true);
        }
        classified
    }

    fn title() -> TagInfo {
        TagInfo::new("Title", "<title>Title</title>")
    }

    #[test]
    fn test_display_url() {
        assert_eq!(display_url("https://example.com/page"), "example.com");
        assert_eq!(display_url("http://example.com/page"), "example.com");
        assert_eq!(display_url("https://www.example.co.uk"), "www.example.co.uk");
        assert_eq!(display_url("https://example.com?q=1"), "example.com");
        assert_eq!(display_url("https://example.com:8080/a.html"), "example.com:8080");
        assert_eq!(display_url("ftp://example.com"), "");
        assert_eq!(display_url("https://localhost/"), "");
        assert_eq!(display_url(""), "");
    }

    #[test]
    fn test_image_prefers_twitter_regardless_of_order() {
        let c = classified(&[("og:image", "I2"), ("twitter:image", "I1")]);
        let doc = resolve(title(), c, None);
        assert_eq!(doc.image, "I1");
    }

    #[test]
    fn test_image_falls_back_to_open_graph() {
        let c = classified(&[
            ("og:image", "I2"),
            ("og:image:alt", "alt2"),
            ("twitter:image", ""),
        ]);
        let doc = resolve(title(), c, None);
        assert_eq!(doc.image, "I2");
        assert_eq!(doc.image_alt, "alt2");
    }

    #[test]
    fn test_requested_url_wins() {
        let c = classified(&[("twitter:url", "https://t.example.com"), ("og:url", "https://o.example.com")]);
        let doc = resolve(title(), c.clone(), Some("http://requested.example.org/x"));
        assert_eq!(doc.url, "http://requested.example.org/x");
        assert_eq!(doc.display_url, "requested.example.org");

        let doc = resolve(title(), c, None);
        assert_eq!(doc.url, "https://t.example.com");
        assert_eq!(doc.display_url, "t.example.com");
    }

    #[test]
    fn test_url_falls_back_to_open_graph() {
        let c = classified(&[("og:url", "https://o.example.com/a")]);
        let doc = resolve(title(), c, Some(""));
        assert_eq!(doc.url, "https://o.example.com/a");
        assert_eq!(doc.display_url, "o.example.com");
    }

    #[test]
    fn test_description_last_one_wins() {
        let c = classified(&[
            ("description", "A"),
            ("og:description", "B"),
        ]);
        let doc = resolve(title(), c, None);
        assert_eq!(doc.description.map(|d| d.content), Some("B".to_string()));

        let c = classified(&[
            ("twitter:description", "T"),
            ("og:description", "B"),
            ("description", "A"),
        ]);
        let doc = resolve(title(), c, None);
        assert_eq!(doc.description.map(|d| d.content), Some("A".to_string()));
    }

    #[test]
    fn test_no_metadata_resolves_to_empty_fields() {
        let doc = resolve(title(), Classified::new(), None);
        assert_eq!(doc.description, None);
        assert_eq!(doc.image, "");
        assert_eq!(doc.image_alt, "");
        assert_eq!(doc.url, "");
        assert_eq!(doc.display_url, "");
    }
}
