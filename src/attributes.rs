//! Attribute extraction for a single matched `<meta>` tag.

use crate::constants::REGEXPS;
use crate::error::{MetacardError, Result};

/// An identifying key and its raw `content` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTag {
    pub key: String,
    pub content: String,
}

/// Value of the first attribute called `name` (ASCII case-insensitive).
///
/// Attributes are read left to right with their values consumed whole, so
/// text inside a quoted value never reads as an attribute. An attribute
/// written without a value has the empty string as its value.
fn attribute_value<'t>(tag: &'t str, name: &str) -> Option<&'t str> {
    let body = match tag.get(..5) {
        Some(open) if open.eq_ignore_ascii_case("<meta") => &tag[5..],
        _ => tag,
    };

    REGEXPS
        .attribute
        .captures_iter(body)
        .find(|caps| caps[1].eq_ignore_ascii_case(name))
        .map(|caps| {
            caps.get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map_or("", |m| m.as_str())
        })
}

/// Identifying attribute of a tag, checked as `property`, then `name`, then
/// `http-equiv`. Empty values count as absent.
pub fn identifying_attribute(tag: &str) -> Option<&str> {
    ["property", "name", "http-equiv"]
        .into_iter()
        .find_map(|name| attribute_value(tag, name).filter(|v| !v.is_empty()))
}

/// Value of the `content` attribute, if present.
pub fn content_attribute(tag: &str) -> Option<&str> {
    attribute_value(tag, "content")
}

/// Extract the key/content pair from one `<meta>` tag.
///
/// Returns `Ok(None)` for tags without an identifying attribute (e.g.
/// `<meta charset="utf-8">`) and [`MetacardError::MalformedMetaTag`] for tags
/// that name themselves but carry no content.
pub fn extract(tag: &str) -> Result<Option<AttributeTag>> {
    let Some(key) = identifying_attribute(tag) else {
        return Ok(None);
    };

    let content = content_attribute(tag).ok_or_else(|| MetacardError::MalformedMetaTag {
        key: key.to_string(),
        html: tag.to_string(),
    })?;

    Ok(Some(AttributeTag {
        key: key.to_string(),
        content: content.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_wins_over_name() {
        let tag = r#"<meta name="description" property="og:description" content="x">"#;
        assert_eq!(identifying_attribute(tag), Some("og:description"));
    }

    #[test]
    fn test_http_equiv_is_last_resort() {
        let tag = r#"<meta http-equiv="X-UA-Compatible" content="IE=edge">"#;
        assert_eq!(identifying_attribute(tag), Some("X-UA-Compatible"));

        let tag = r#"<meta http-equiv="refresh" name="robots" content="noindex">"#;
        assert_eq!(identifying_attribute(tag), Some("robots"));
    }

    #[test]
    fn test_content_is_raw() {
        let tag = r#"<meta name="twitter:title" content="Tom &amp; Jerry's">"#;
        let attr = extract(tag).unwrap().unwrap();
        assert_eq!(attr.key, "twitter:title");
        assert_eq!(attr.content, "Tom &amp; Jerry's");
    }

    #[test]
    fn test_single_quotes_and_spacing() {
        let tag = "<meta property = 'og:image' content= 'https://a.b/c.png' />";
        let attr = extract(tag).unwrap().unwrap();
        assert_eq!(attr.key, "og:image");
        assert_eq!(attr.content, "https://a.b/c.png");
    }

    #[test]
    fn test_empty_content_is_kept() {
        let attr = extract(r#"<meta name="keywords" content="">"#)
            .unwrap()
            .unwrap();
        assert_eq!(attr.content, "");
    }

    #[test]
    fn test_tag_without_identity_is_skipped() {
        assert_eq!(extract(r#"<meta charset="utf-8">"#).unwrap(), None);
        assert_eq!(extract(r#"<meta name="" content="x">"#).unwrap(), None);
    }

    #[test]
    fn test_missing_content_is_malformed() {
        let err = extract(r#"<meta name="author">"#).unwrap_err();
        match err {
            MetacardError::MalformedMetaTag { key, html } => {
                assert_eq!(key, "author");
                assert_eq!(html, r#"<meta name="author">"#);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_names_inside_quoted_values_are_ignored() {
        let attr = extract(r#"<meta content="see name='x'" name="author">"#)
            .unwrap()
            .unwrap();
        assert_eq!(attr.key, "author");
        assert_eq!(attr.content, "see name='x'");

        let tag = r#"<meta name="robots" content='property="og:title"'>"#;
        assert_eq!(identifying_attribute(tag), Some("robots"));
    }

    #[test]
    fn test_content_inside_other_value_is_not_content() {
        let err = extract(r#"<meta name="a" data-x='content="b"'>"#).unwrap_err();
        assert!(matches!(err, MetacardError::MalformedMetaTag { .. }));
    }

    #[test]
    fn test_unquoted_and_uppercase_attributes() {
        let attr = extract("<META NAME=author CONTENT=me>").unwrap().unwrap();
        assert_eq!(attr.key, "author");
        assert_eq!(attr.content, "me");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let attr = extract(r#"<meta name="a" name="b" content="1" content="2">"#)
            .unwrap()
            .unwrap();
        assert_eq!(attr.key, "a");
        assert_eq!(attr.content, "1");
    }

    #[test]
    fn test_content_prefix_is_not_content() {
        let err = extract(r#"<meta name="a" data-content="b">"#).unwrap_err();
        assert!(matches!(err, MetacardError::MalformedMetaTag { .. }));
    }
}
