//! Shared patterns and lookup tables.

use once_cell::sync::Lazy;
use regex::Regex;

/// Keys that feed the top-level description, in no particular precedence.
/// Resolution between them is by document order.
pub const DESCRIPTION_KEYS: [&str; 3] = ["description", "og:description", "twitter:description"];

/// Keys that carry no card metadata and are dropped during classification.
pub const DISCARDED_KEYS: [&str; 2] = ["viewport", "X-UA-Compatible"];

pub const TWITTER_PREFIX: &str = "twitter:";
pub const OPEN_GRAPH_PREFIX: &str = "og:";

pub const DEFAULT_STYLES_DIR: &str = "card-styles";
pub const BASE_STYLESHEET: &str = "base.css";

/// Compiled regular expressions used by the scanner and resolver.
pub struct Regexps {
    pub meta_tag: Regex,
    pub title: Regex,
    pub attribute: Regex,
    pub https_host: Regex,
    pub http_host: Regex,
}

pub static REGEXPS: Lazy<Regexps> = Lazy::new(|| Regexps {
    meta_tag: Regex::new(r"(?i)<meta\s[^>]*>").unwrap(),
    title: Regex::new(r"(?is)<title(?:\s[^>]*)?>(.*?)</title\s*>").unwrap(),
    // Name in group 1; value in group 2 (double quotes), 3 (single) or 4 (bare).
    attribute: Regex::new(r#"([^\s"'=<>/]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .unwrap(),
    https_host: Regex::new(r"^https://([^/?#\s]*\.[^/?#\s]+)").unwrap(),
    http_host: Regex::new(r"^http://([^/?#\s]*\.[^/?#\s]+)").unwrap(),
});
