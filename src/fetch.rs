// src/fetch.rs
// =============================================================================
// This module retrieves page content over HTTP.
//
// The crawler only needs "give me the HTML for this URL", so that is all the
// Fetcher trait asks for. HttpFetcher is the real implementation; tests plug
// in an in-memory site instead.
//
// Key functionality:
// - One reqwest Client reused for every page (connection pooling)
// - Per-request timeout so a hung server can't stall the crawl forever
// - Any HTTP status is accepted unless require_success is set
//
// Rust concepts:
// - Traits: A shared interface with more than one implementation
// - async_trait: Lets a trait method be async
// - RAII: The response is dropped (and its connection released) on every path
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::config::CrawlConfig;
use crate::error::{CrawlError, FetchError};

/// Redirects followed before the request is treated as failed
const MAX_REDIRECTS: usize = 10;

/// Something that can turn a URL into page content.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url` and returns its body as text.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetches pages with a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    require_success: bool,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, require_success: bool) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .user_agent(concat!("sitemap-builder/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(CrawlError::Client)?;

        Ok(Self {
            client,
            require_success,
        })
    }

    /// Builds a fetcher from the timeout and status settings of a crawl.
    pub fn from_config(config: &CrawlConfig) -> Result<Self, CrawlError> {
        Self::new(config.timeout, config.require_success)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "fetched");

        if self.require_success && !status.is_success() {
            return Err(FetchError::Status(status));
        }

        // text() consumes the response, so the connection is released here
        // whether the body decodes or not
        response.text().await.map_err(FetchError::Body)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of calling reqwest directly?
//    - The crawler is generic over Fetcher
//    - Tests pass a HashMap-backed fetcher, so crawl logic is tested offline
//
// 2. What does #[async_trait] do?
//    - It rewrites the async method into one returning a boxed future
//    - That keeps the trait usable on stable Rust with a Send future
//
// 3. What is concat!(..., env!("CARGO_PKG_VERSION"))?
//    - Both run at compile time
//    - The user agent ends up as "sitemap-builder/0.1.0"
// -----------------------------------------------------------------------------
