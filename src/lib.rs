//! # metacard
//!
//! Extract Open Graph and Twitter Card metadata from HTML pages and render it
//! as social share cards.
//!
//! ## Overview
//!
//! metacard scans raw HTML for `<meta>` tags and the `<title>` element,
//! sorts the tags into the plain, Open Graph (`og:`) and Twitter (`twitter:`)
//! namespaces, and resolves them into a [`MetadataDocument`] with a fixed field
//! order. That document can then be rendered as the HTML of a Twitter
//! summary, Twitter large-image, LinkedIn or Facebook preview card.
//!
//! ## Key Features
//!
//! - **Tag Scanning**: Fast regex-driven scan, no DOM construction
//! - **Namespace Fallback**: Twitter values win over Open Graph for image, image alt and URL
//! - **Strongly Typed Output**: Title, description and derived fields plus namespaced maps
//! - **Card Rendering**: Four card layouts with shipped stylesheets
//! - **Pluggable Fetching**: Bring your own [`Fetch`] or use [`HttpFetcher`]
//!
//! ## Basic Usage
//!
//! ```rust
//! use metacard::{render_card, CardType, PageDetails};
//!
//! let html = r#"
//!     <head>
//!         <title>Tanner Dolby</title>
//!         <meta name="description" content="Hi, I'm Tanner.">
//!         <meta name="twitter:image" content="https://site/img.jpg">
//!     </head>
//! "#;
//!
//! let details = PageDetails::new(html, Some("https://tannerdolby.com"), None)?;
//! let doc = details.parse()?;
//!
//! assert_eq!(doc.title.content, "Tanner Dolby");
//! assert_eq!(doc.display_url, "tannerdolby.com");
//!
//! let card = render_card(&doc, CardType::TwitterSummary);
//! assert!(card.contains("<p class=\"card-title\">Tanner Dolby</p>"));
//! # Ok::<(), metacard::MetacardError>(())
//! ```
//!
//! ## Fetching Pages
//!
//! ```rust,no_run
//! use metacard::{build_card, fetch_details, ExtractOptions, HttpFetcher, StyleSheets};
//!
//! let options = ExtractOptions::default();
//! let fetcher = HttpFetcher::new()?;
//! let doc = fetch_details("https://tannerdolby.com", &fetcher, &options)?;
//!
//! let styles = StyleSheets::new(&options.styles_dir);
//! let card = build_card(&doc, options.card_type, &styles)?;
//! println!("{card}");
//! # Ok::<(), metacard::MetacardError>(())
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use metacard::{MetacardError, PageDetails};
//!
//! let html = "<html><head></head></html>";
//!
//! match PageDetails::new(html, None, None).and_then(|d| d.parse()) {
//!     Ok(doc) => println!("Title: {}", doc.title.content),
//!     Err(MetacardError::MissingTitle) => eprintln!("page has no title"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! ## Resolution Rules
//!
//! The description comes from whichever of `description`, `og:description`
//! and `twitter:description` appears last in the document. The image and its
//! alt text prefer `twitter:image` / `twitter:image:alt` and fall back to the
//! `og:` equivalents. The URL is the one the page was requested from, falling
//! back to `twitter:url` then `og:url`, and the display URL is its host.
//!
//! ## Logging
//!
//! Pipeline stages emit [`tracing`] events at `debug` and `trace` level.
//! Install a subscriber to see them.

mod attributes;
mod card;
mod classifier;
mod constants;
mod details;
mod document;
mod error;
mod fetch;
mod options;
mod resolver;
mod style;
mod tokenizer;

// Public exports
pub use attributes::{content_attribute, extract as extract_attributes, identifying_attribute, AttributeTag};
pub use card::{build_card, render_card, CardField, CardType};
pub use classifier::{classify, Bucket, Classified};
pub use details::{fetch_details, PageDetails};
pub use document::{Lookup, MetadataDocument, TagInfo, TagMap};
pub use error::{MetacardError, Result};
pub use fetch::{Fetch, HttpFetcher, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use options::{default_request_headers, ExtractOptions, ExtractOptionsBuilder, RequestHeaders};
pub use resolver::{display_url, resolve};
pub use style::{LoadStyle, StyleSheets};
pub use tokenizer::{find_title, meta_tags, Element, MetaTags, TagMatch, TitleMatch};
