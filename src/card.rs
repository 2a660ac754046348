//! Social share card rendering.
//!
//! ## Example
//!
//! ```rust
//! use metacard::{render_card, CardType, PageDetails};
//!
//! let html = r#"<title>Home</title><meta property="og:image" content="https://example.com/a.png">"#;
//! let doc = PageDetails::new(html, Some("https://example.com"), None)?.parse()?;
//!
//! let card = render_card(&doc, CardType::Linkedin);
//! assert!(card.contains(r#"<div class="card linkedin">"#));
//! assert!(card.contains(r#"<img src="https://example.com/a.png" alt="Missing image" />"#));
//! # Ok::<(), metacard::MetacardError>(())
//! ```

use crate::constants::BASE_STYLESHEET;
use crate::document::MetadataDocument;
use crate::error::{MetacardError, Result};
use crate::style::LoadStyle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Preset card layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    /// Twitter `summary` card
    #[default]
    TwitterSummary,
    /// Twitter `summary_large_image` card
    TwitterSummaryLarge,
    Linkedin,
    Facebook,
}

/// A text line shown in the card body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Url,
    Title,
    Description,
}

impl CardField {
    fn class(self) -> &'static str {
        match self {
            CardField::Url => "card-url",
            CardField::Title => "card-title",
            CardField::Description => "card-desc",
        }
    }

    fn value(self, doc: &MetadataDocument) -> &str {
        match self {
            CardField::Url => &doc.display_url,
            CardField::Title => &doc.title.content,
            CardField::Description => doc.description_content(),
        }
    }
}

impl CardType {
    pub const ALL: [CardType; 4] = [
        CardType::TwitterSummary,
        CardType::TwitterSummaryLarge,
        CardType::Linkedin,
        CardType::Facebook,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CardType::TwitterSummary => "twitter_summary",
            CardType::TwitterSummaryLarge => "twitter_summary_large",
            CardType::Linkedin => "linkedin",
            CardType::Facebook => "facebook",
        }
    }

    /// Stylesheet applied on top of `base.css`.
    pub fn stylesheet(self) -> &'static str {
        match self {
            CardType::TwitterSummary => "twitter-summary-image.css",
            CardType::TwitterSummaryLarge => "twitter-summary-large-image.css",
            CardType::Linkedin => "linkedin.css",
            CardType::Facebook => "facebook.css",
        }
    }

    /// Body lines in display order.
    pub fn fields(self) -> &'static [CardField] {
        match self {
            CardType::TwitterSummary => &[CardField::Url, CardField::Title, CardField::Description],
            CardType::TwitterSummaryLarge => {
                &[CardField::Title, CardField::Description, CardField::Url]
            }
            CardType::Linkedin => &[CardField::Title, CardField::Url],
            CardType::Facebook => &[CardField::Url, CardField::Title, CardField::Description],
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardType {
    type Err = MetacardError;

    fn from_str(s: &str) -> Result<Self> {
        CardType::ALL
            .into_iter()
            .find(|card| card.as_str() == s)
            .ok_or_else(|| MetacardError::UnknownCardType(s.to_string()))
    }
}

fn escape_attr(value: &str) -> String {
    value.replace('"', "&quot;")
}

/// Card markup for `doc` in the `card_type` layout.
///
/// Values are inserted as they appeared in the page source, which is already
/// HTML text; only double quotes in attribute values are escaped.
pub fn render_card(doc: &MetadataDocument, card_type: CardType) -> String {
    let image_alt = if doc.image_alt.is_empty() {
        "Missing image"
    } else {
        doc.image_alt.as_str()
    };

    let body: String = card_type
        .fields()
        .iter()
        .map(|field| format!("<p class=\"{}\">{}</p>\n\t", field.class(), field.value(doc)))
        .collect();

    format!(
        "<a class=\"card-link\" href=\"{url}\" aria-label=\"Link to website\">\n\t\
         <div class=\"card {card_type}\">\n\t\
         <img src=\"{image}\" alt=\"{alt}\" />\n\t\
         <div class=\"card-info\">\n\t\
         {body}\
         </div>\n\t\
         </div>\n\
         </a>",
        url = escape_attr(&doc.url),
        image = escape_attr(&doc.image),
        alt = escape_attr(image_alt),
    )
}

/// Card markup preceded by a `<style>` block holding `base.css` and the card
/// type's stylesheet.
pub fn build_card<S>(doc: &MetadataDocument, card_type: CardType, styles: &S) -> Result<String>
where
    S: LoadStyle + ?Sized,
{
    let base_css = styles.load_style(BASE_STYLESHEET)?;
    let css = styles.load_style(card_type.stylesheet())?;
    let html = render_card(doc, card_type);

    Ok(format!("<style>\n{base_css}{css}\n</style>\n{html}"))
}
