//! Front page retrieval.
//!
//! The rest of the pipeline only sees the [`PageFetcher`] trait: a page body
//! or a [`FetchError`]. [`HttpFetcher`] is the `reqwest` implementation used
//! in production; tests substitute in-memory fetchers.

use crate::error::FetchError;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

/// Desktop browser identity; several of the sites serve reduced markup to
/// unknown clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// Headers sent with every front page request.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    headers
}

/// Trait for retrieving a page body.
///
/// Implementations treat a fetch as all-or-nothing: either the full body
/// comes back or an error does.
pub trait PageFetcher {
    /// Fetch `url` with the given request headers.
    async fn fetch(&self, url: &str, headers: &HeaderMap) -> Result<String, FetchError>;
}

/// [`PageFetcher`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(level = "info", skip(self, headers))]
    async fn fetch(&self, url: &str, headers: &HeaderMap) -> Result<String, FetchError> {
        let response = self.client.get(url).headers(headers.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Fetched page");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers_carry_user_agent() {
        let headers = default_headers();
        let ua = headers.get(USER_AGENT).unwrap().to_str().unwrap();
        assert!(ua.starts_with("Mozilla/5.0"));
        assert!(ua.contains("Chrome/58.0.3029.110"));
    }

    #[test]
    fn test_http_fetcher_builds() {
        assert!(HttpFetcher::new(Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status {
            url: "https://www.vg.no/".to_string(),
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(err.to_string(), "https://www.vg.no/ responded with 503 Service Unavailable");
    }
}
