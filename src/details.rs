//! Main PageDetails struct and extraction pipeline.
//!
//! This module contains [`PageDetails`], which runs the scan, classification
//! and resolution stages over one HTML document, and [`fetch_details`], which
//! fetches the page first.
//!
//! ## Example
//!
//! ```rust
//! use metacard::PageDetails;
//!
//! let html = r#"
//!     <html><head>
//!         <title>Tanner Dolby</title>
//!         <meta name="description" content="Hi, I'm Tanner.">
//!         <meta name="twitter:image" content="https://site/img.jpg">
//!     </head></html>
//! "#;
//!
//! let details = PageDetails::new(html, Some("https://tannerdolby.com"), None)?;
//! let doc = details.parse()?;
//!
//! assert_eq!(doc.title.content, "Tanner Dolby");
//! assert_eq!(doc.description_content(), "Hi, I'm Tanner.");
//! assert_eq!(doc.image, "https://site/img.jpg");
//! assert_eq!(doc.display_url, "tannerdolby.com");
//! # Ok::<(), metacard::MetacardError>(())
//! ```

use crate::{
    attributes,
    classifier::{Bucket, Classified},
    document::{MetadataDocument, TagInfo},
    error::{MetacardError, Result},
    fetch::Fetch,
    options::ExtractOptions,
    resolver,
    tokenizer::{self, TagMatch},
};
use url::Url;

/// Metadata extraction for a single HTML document.
///
/// ## Lifecycle
///
/// Construct with [`PageDetails::new()`], then call
/// [`parse()`](PageDetails::parse). Parsing consumes the instance, so every
/// extraction starts from a fresh document. The engine performs no I/O and
/// holds no shared state; independent documents can be parsed on separate
/// threads.
///
/// ## With Custom Options
///
/// ```rust
/// use metacard::{ExtractOptions, PageDetails};
///
/// let html = r#"<title>Page</title><meta name="author" content="me">"#;
/// let options = ExtractOptions::builder().keep_unknown(false).build();
///
/// let doc = PageDetails::new(html, None, Some(options))?.parse()?;
/// assert!(doc.meta.is_empty());
/// # Ok::<(), metacard::MetacardError>(())
/// ```
#[derive(Debug)]
pub struct PageDetails<'h> {
    html: &'h str,

    /// URL the page was requested from, if any
    url: Option<String>,

    options: ExtractOptions,
}

/// Check that `url` is an absolute http(s) URL.
pub(crate) fn validate_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url).map_err(|_| MetacardError::InvalidUrl(url.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(MetacardError::InvalidUrl(url.to_string())),
    }
}

impl<'h> PageDetails<'h> {
    /// Create a new PageDetails instance
    ///
    /// # Arguments
    /// * `html` - The HTML source text
    /// * `url` - Optional URL the page was requested from
    /// * `options` - Optional configuration options
    ///
    /// The URL is taken as given. An empty URL counts as none, and a URL
    /// without an `http://` or `https://` prefix resolves to an empty
    /// `display_url`.
    ///
    /// # Returns
    /// Result containing the PageDetails instance
    pub fn new(html: &'h str, url: Option<&str>, options: Option<ExtractOptions>) -> Result<Self> {
        let url = url.filter(|u| !u.is_empty()).map(str::to_string);

        Ok(Self {
            html,
            url,
            options: options.unwrap_or_default(),
        })
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Every matched element in document order: the first title and each
    /// `<meta>` tag, including those the classifier ignores.
    pub fn tokenize(&self) -> Result<Vec<TagMatch>> {
        let title = tokenizer::find_title(self.html)?;
        let mut matches: Vec<TagMatch> = tokenizer::meta_tags(self.html).collect();
        let at = matches.partition_point(|m| m.start < title.tag.start);
        matches.insert(at, title.tag);
        Ok(matches)
    }

    /// Scan the document and resolve its metadata.
    ///
    /// # Returns
    /// The finished [`MetadataDocument`], or the error that aborted it.
    pub fn parse(self) -> Result<MetadataDocument> {
        let title = tokenizer::find_title(self.html).map_err(|e| {
            tracing::debug!(url = ?self.url, "document has no <title>");
            e
        })?;
        let title = TagInfo::new(title.text, title.tag.html);

        let classified = self.classify_meta_tags()?;

        Ok(resolver::resolve(title, classified, self.url.as_deref()))
    }

    fn classify_meta_tags(&self) -> Result<Classified> {
        let mut classified = Classified::new();
        let mut scanned = 0usize;
        let mut discarded = 0usize;

        for tag in tokenizer::meta_tags(self.html) {
            scanned += 1;

            let attr = match attributes::extract(&tag.html) {
                Ok(Some(attr)) => attr,
                Ok(None) => continue,
                Err(MetacardError::MalformedMetaTag { key, html }) if self.options.skip_malformed => {
                    tracing::warn!(key = %key, offset = tag.start, html = %html, "skipping meta tag without content");
                    continue;
                }
                Err(e) => return Err(e),
            };

            if classified.push(attr, &tag.html, self.options.keep_unknown) == Bucket::Discard {
                discarded += 1;
            }
        }

        tracing::debug!(
            url = ?self.url,
            scanned,
            stored = classified.len(),
            discarded,
            "classified meta tags"
        );

        Ok(classified)
    }
}

/// Fetch `url` and extract its metadata.
///
/// The URL is validated before anything is sent. Fetch failures abort with
/// [`MetacardError::Fetch`] and no document.
///
/// ```rust
/// use metacard::{fetch_details, ExtractOptions, Fetch, RequestHeaders, Result};
///
/// struct Canned;
///
/// impl Fetch for Canned {
///     fn fetch(&self, _url: &str, _headers: &RequestHeaders) -> Result<String> {
///         Ok("<title>Canned</title>".to_string())
///     }
/// }
///
/// let doc = fetch_details("https://example.com", &Canned, &ExtractOptions::default())?;
/// assert_eq!(doc.title.content, "Canned");
/// # Ok::<(), metacard::MetacardError>(())
/// ```
pub fn fetch_details<F>(url: &str, fetcher: &F, options: &ExtractOptions) -> Result<MetadataDocument>
where
    F: Fetch + ?Sized,
{
    validate_url(url)?;

    let html = fetcher.fetch(url, &options.request_headers)?;
    tracing::debug!(url = %url, bytes = html.len(), "fetched page");

    PageDetails::new(&html, Some(url), Some(options.clone()))?.parse()
}
