//! Configuration options for extraction and card rendering.
//!
//! This module provides [`ExtractOptions`] and [`ExtractOptionsBuilder`].
//!
//! ## Example
//!
//! ```rust
//! use metacard::{CardType, ExtractOptions, PageDetails};
//!
//! let html = "<title>Home</title><meta name=\"author\">";
//!
//! // Default options abort on the malformed author tag
//! assert!(PageDetails::new(html, None, None).unwrap().parse().is_err());
//!
//! // Builder for custom options
//! let options = ExtractOptions::builder()
//!     .skip_malformed(true)
//!     .card_type(CardType::Linkedin)
//!     .build();
//!
//! let doc = PageDetails::new(html, None, Some(options)).unwrap().parse().unwrap();
//! assert_eq!(doc.title.content, "Home");
//! ```

use crate::card::CardType;
use crate::constants::DEFAULT_STYLES_DIR;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Headers sent with every page request.
pub type RequestHeaders = BTreeMap<String, String>;

/// Headers used when the caller supplies none.
pub fn default_request_headers() -> RequestHeaders {
    RequestHeaders::from([
        ("Content-Type".to_string(), "text/html".to_string()),
        ("accept".to_string(), "text/html".to_string()),
    ])
}

/// Configuration for fetching, extraction and rendering.
///
/// ## Creating Options
///
/// ```rust
/// use metacard::ExtractOptions;
///
/// let options = ExtractOptions::default();
/// assert_eq!(options.request_headers["accept"], "text/html");
///
/// let options = ExtractOptions::builder()
///     .header("accept-language", "en")
///     .keep_unknown(false)
///     .build();
/// assert_eq!(options.request_headers.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Headers sent by the fetcher.
    ///
    /// Default: `Content-Type: text/html` and `accept: text/html`
    pub request_headers: RequestHeaders,

    /// Skip `<meta>` tags that have an identifying attribute but no `content`.
    ///
    /// When `false`, such a tag aborts the extraction with
    /// [`MetacardError::MalformedMetaTag`](crate::MetacardError::MalformedMetaTag).
    ///
    /// Default: `false`
    pub skip_malformed: bool,

    /// Keep tags outside the Twitter and Open Graph namespaces in the
    /// document's `meta` map.
    ///
    /// Default: `true`
    pub keep_unknown: bool,

    /// Directory holding the card stylesheets.
    ///
    /// Default: `card-styles`
    pub styles_dir: PathBuf,

    /// Card rendered when the caller does not name one.
    ///
    /// Default: [`CardType::TwitterSummary`]
    pub card_type: CardType,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            request_headers: default_request_headers(),
            skip_malformed: false,
            keep_unknown: true,
            styles_dir: PathBuf::from(DEFAULT_STYLES_DIR),
            card_type: CardType::default(),
        }
    }
}

impl ExtractOptions {
    /// Creates a new builder for ExtractOptions
    pub fn builder() -> ExtractOptionsBuilder {
        ExtractOptionsBuilder::default()
    }
}

/// Builder for [`ExtractOptions`].
#[derive(Default)]
pub struct ExtractOptionsBuilder {
    request_headers: Option<RequestHeaders>,
    extra_headers: Vec<(String, String)>,
    skip_malformed: Option<bool>,
    keep_unknown: Option<bool>,
    styles_dir: Option<PathBuf>,
    card_type: Option<CardType>,
}

impl ExtractOptionsBuilder {
    /// Replace the request headers entirely
    pub fn request_headers(mut self, headers: RequestHeaders) -> Self {
        self.request_headers = Some(headers);
        self
    }

    /// Add or override a single request header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }

    /// Skip malformed meta tags instead of failing
    pub fn skip_malformed(mut self, skip: bool) -> Self {
        self.skip_malformed = Some(skip);
        self
    }

    /// Keep tags with no recognised namespace
    pub fn keep_unknown(mut self, keep: bool) -> Self {
        self.keep_unknown = Some(keep);
        self
    }

    /// Set the stylesheet directory
    pub fn styles_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.styles_dir = Some(dir.into());
        self
    }

    /// Set the default card type
    pub fn card_type(mut self, card_type: CardType) -> Self {
        self.card_type = Some(card_type);
        self
    }

    /// Build the ExtractOptions
    pub fn build(self) -> ExtractOptions {
        let defaults = ExtractOptions::default();
        let mut request_headers = self
            .request_headers
            .unwrap_or(defaults.request_headers);
        request_headers.extend(self.extra_headers);

        ExtractOptions {
            request_headers,
            skip_malformed: self.skip_malformed.unwrap_or(defaults.skip_malformed),
            keep_unknown: self.keep_unknown.unwrap_or(defaults.keep_unknown),
            styles_dir: self.styles_dir.unwrap_or(defaults.styles_dir),
            card_type: self.card_type.unwrap_or(defaults.card_type),
        }
    }
}
