//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with the configured user agent and timeouts
//! - Gating every GET behind the run's rate limiter
//! - Disabling caches so submission state is always fresh
//! - Error classification

use crate::config::Config;
use crate::crawler::rate_limiter::RateLimiter;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Reasons a page could not be fetched
///
/// None of these are retried; the caller decides what a failure means.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {source}")]
    Connect { url: String, source: reqwest::Error },

    #[error("HTTP error for {url}: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("Failed to read response body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

impl FetchError {
    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. }
            | Self::Timeout { url }
            | Self::Connect { url, .. }
            | Self::Request { url, .. }
            | Self::Body { url, .. } => url,
        }
    }

    fn from_send(url: &str, e: reqwest::Error) -> Self {
        let url = url.to_string();
        if e.is_timeout() {
            Self::Timeout { url }
        } else if e.is_connect() {
            Self::Connect { url, source: e }
        } else {
            Self::Request { url, source: e }
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// Every request carries `Cache-Control: no-cache` and `Pragma: no-cache`.
///
/// # Example
///
/// ```no_run
/// use cf_crawler::config::Config;
/// use cf_crawler::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

    Client::builder()
        .user_agent(config.user_agent.header_value())
        .default_headers(headers)
        .timeout(Duration::from_secs(config.crawler.request_timeout))
        .connect_timeout(Duration::from_secs(config.crawler.connect_timeout))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Performs rate-limited GET requests
pub struct PageFetcher {
    client: Client,
    limiter: RateLimiter,
}

impl PageFetcher {
    pub fn new(client: Client, limiter: RateLimiter) -> Self {
        Self { client, limiter }
    }

    /// Builds the client and limiter described by `config`
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let client = build_http_client(config)?;
        let limiter = RateLimiter::new(config.crawler.requests_per_second);
        Ok(Self::new(client, limiter))
    }

    /// Fetches `url` and returns the full response body as text
    ///
    /// Exactly one GET is sent per call, after the rate limiter grants a slot.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The body of a 2xx response
    /// * `Err(FetchError)` - Non-2xx status or transport failure
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let waited = self.limiter.acquire().await;
        if !waited.is_zero() {
            tracing::trace!("Rate limiter held request to {} for {:?}", url, waited);
        }

        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_send(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}
