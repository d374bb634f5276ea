// src/lib.rs
// =============================================================================
// sitemap-builder: crawl a website from its root domain and list every
// same-site page reachable within a depth limit.
//
// Modules:
// - config: settings for one crawl
// - crawl: the crawl loop, frontier, link extraction and scope check
// - error: typed errors for fetching and crawling
// - fetch: the Fetcher trait and its HTTP implementation
// - sitemap: the result list and its XML / JSON output
// =============================================================================

pub mod config;
pub mod crawl;
pub mod error;
pub mod fetch;
pub mod sitemap;

pub use config::{CrawlConfig, ErrorPolicy, TraversalOrder};
pub use crawl::Crawler;
pub use error::{CrawlError, FetchError};
pub use fetch::{Fetcher, HttpFetcher};
pub use sitemap::Sitemap;
