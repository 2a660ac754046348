//! HTTP fetch layer supplying page HTML to the extractor.

use crate::error::{MetacardError, Result};
use crate::options::RequestHeaders;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str =
    concat!("metacard/", env!("CARGO_PKG_VERSION"), " (+https://crates.io/crates/metacard)");
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_REDIRECTS: usize = 10;

/// Source of page HTML.
///
/// Implementations perform the blocking request; the extractor never does I/O.
pub trait Fetch {
    /// Return the response body of `url`, sending `headers` with the request.
    fn fetch(&self, url: &str, headers: &RequestHeaders) -> Result<String>;
}

/// [`Fetch`] implementation backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Client with the default user agent and a 30 second timeout.
    pub fn new() -> Result<Self> {
        Self::with_config(DEFAULT_USER_AGENT, DEFAULT_TIMEOUT)
    }

    pub fn with_config(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| MetacardError::Fetch {
                url: String::new(),
                reason: format!("HTTP client error: {e}"),
            })?;

        Ok(Self { client })
    }
}

fn fetch_error(url: &str, reason: impl std::fmt::Display) -> MetacardError {
    MetacardError::Fetch {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str, headers: &RequestHeaders) -> Result<String> {
        let request = headers
            .iter()
            .fold(self.client.get(url), |req, (name, value)| req.header(name, value));

        let response = request.send().map_err(|e| {
            tracing::warn!(error = %e, url = %url, "failed to fetch page");
            fetch_error(url, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, "page returned error status");
            return Err(fetch_error(url, format!("HTTP status {status}")));
        }

        response
            .text()
            .map_err(|e| fetch_error(url, format!("body read error: {e}")))
    }
}
