//! Error types for the metacard library.

use thiserror::Error;

/// Result type alias for metacard operations
pub type Result<T> = std::result::Result<T, MetacardError>;

/// Errors that can occur while fetching, extracting or rendering
#[derive(Error, Debug)]
pub enum MetacardError {
    /// The page could not be fetched
    #[error("Failed to fetch '{url}': {reason}")]
    Fetch { url: String, reason: String },

    /// The document has no `<title>` element
    #[error("Document has no <title> element")]
    MissingTitle,

    /// A `<meta>` tag names itself but carries no `content` attribute
    #[error("Meta tag '{key}' has no content attribute: {html}")]
    MalformedMetaTag { key: String, html: String },

    /// A card stylesheet could not be read
    #[error("Missing stylesheet '{name}': {source}")]
    MissingStyle {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid URL provided
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Card identifier outside the supported presets
    #[error("Unknown card type: {0}")]
    UnknownCardType(String),
}
