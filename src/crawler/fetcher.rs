//! HTTP fetch primitive
//!
//! This module provides the single operation the coordinator needs from the
//! network: given a URL, return the page body or a classified failure.
//! Each URL gets exactly one attempt; there is no retry logic.

use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// User agent sent when no `[user-agent]` section is configured
pub const DEFAULT_USER_AGENT: &str = concat!("AnchorAudit/", env!("CARGO_PKG_VERSION"));

/// Reasons a page yields no markup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("Empty response body from {url}")]
    EmptyBody { url: String },
}

/// Source of page markup
///
/// The coordinator runs one `fetch` per URL concurrently, so implementations
/// must be shareable across tasks.
pub trait PageFetcher: Send + Sync + 'static {
    /// Fetches the body of `url`, giving up after `timeout`
    fn fetch(
        &self,
        url: &str,
        timeout: Duration,
    ) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Builds an HTTP client with the given user agent
///
/// Redirects follow reqwest's default policy.
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// `PageFetcher` backed by a `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a fresh client using `user_agent`
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(user_agent)?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| classify_transport_error(url, e))
    }
}

fn classify_transport_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}
