// src/error.rs
// =============================================================================
// Error types for the crawl engine.
//
// The library uses typed errors (thiserror) so callers and tests can match on
// what went wrong. The binary wraps them with anyhow at the top level.
//
// Messages don't repeat their source; anyhow's "{:#}" prints the whole chain,
// e.g. "error fetching URL https://example.com/a: request failed: <reason>".
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

/// Why a single page could not be fetched.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connect, DNS, TLS, redirect-loop or timeout failure
    #[error("request failed")]
    Request(#[source] reqwest::Error),

    /// The response head arrived but the body could not be read or decoded
    #[error("failed to read response body")]
    Body(#[source] reqwest::Error),

    /// Non-2xx status while `require_success` is enabled
    #[error("HTTP {0}")]
    Status(StatusCode),
}

impl FetchError {
    /// True when the underlying request hit the per-fetch timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            FetchError::Request(e) | FetchError::Body(e) => e.is_timeout(),
            FetchError::Status(_) => false,
        }
    }
}

/// A failure that ends the whole crawl.
#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("root domain must not be empty")]
    EmptyRoot,

    #[error("error fetching URL {url}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}

impl CrawlError {
    /// The page that caused the failure, if the error belongs to one.
    pub fn url(&self) -> Option<&str> {
        match self {
            CrawlError::Fetch { url, .. } => Some(url),
            CrawlError::EmptyRoot | CrawlError::Client(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CrawlError>;
