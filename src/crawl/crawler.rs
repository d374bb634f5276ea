// src/crawl/crawler.rs
// =============================================================================
// This module drives a crawl from the root domain to a finished sitemap.
//
// How it works:
// 1. Start with the root URL in the frontier
// 2. Take the next unvisited URL that is within the depth limit
// 3. Fetch the page and extract its links
// 4. Record the page in the sitemap and mark it visited
// 5. Push every same-domain link back into the frontier
// 6. Repeat until the frontier is empty
//
// Pages are fetched one at a time. By default the first fetch failure ends
// the crawl and no sitemap is returned; ErrorPolicy::Skip logs and moves on.
//
// Rust concepts:
// - Generics: Crawler<F> works with any Fetcher
// - Ownership: Each crawl() builds its own frontier and sitemap, so the
//   Crawler itself holds no per-crawl state and can be reused
// =============================================================================

use tracing::{debug, info, warn};

use super::frontier::Frontier;
use super::links::{extract_links, resolve_link};
use super::scope::is_same_domain;
use crate::config::{CrawlConfig, ErrorPolicy};
use crate::error::{CrawlError, Result};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::sitemap::Sitemap;

pub struct Crawler<F> {
    fetcher: F,
    config: CrawlConfig,
}

impl Crawler<HttpFetcher> {
    /// Creates a crawler that fetches over HTTP using `config`'s timeout.
    pub fn http(config: CrawlConfig) -> Result<Self> {
        let fetcher = HttpFetcher::from_config(&config)?;
        Ok(Self::new(fetcher, config))
    }
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(fetcher: F, config: CrawlConfig) -> Self {
        Self { fetcher, config }
    }

    // Crawls the site under `root` and returns the pages visited, in visit order
    //
    // Parameters:
    //   root: the root domain, e.g. "https://example.com". It is both the first
    //         URL fetched and the prefix every followed link must start with.
    //
    // Returns: the sitemap, or the first error when the policy is Abort
    pub async fn crawl(&self, root: &str) -> Result<Sitemap> {
        if root.is_empty() {
            return Err(CrawlError::EmptyRoot);
        }

        info!(
            root,
            max_depth = self.config.max_depth,
            order = ?self.config.order,
            "starting crawl"
        );

        let mut frontier = Frontier::new(root, self.config.order);
        let mut sitemap = Sitemap::new();
        let mut skipped = 0usize;

        while let Some(url) = frontier.next(self.config.max_depth) {
            debug!(%url, "visiting");

            let html = match self.fetcher.fetch(&url).await {
                Ok(html) => html,
                Err(source) => match self.config.on_error {
                    ErrorPolicy::Abort => return Err(CrawlError::Fetch { url, source }),
                    ErrorPolicy::Skip => {
                        warn!(%url, error = ?source, "skipping page");
                        frontier.mark_visited(&url);
                        skipped += 1;
                        continue;
                    }
                },
            };

            let links = extract_links(&html);

            sitemap.push(url.as_str());
            frontier.mark_visited(&url);

            for link in links {
                let link = if self.config.resolve_relative {
                    match resolve_link(&url, &link) {
                        Some(resolved) => resolved,
                        None => continue,
                    }
                } else {
                    link
                };

                if is_same_domain(root, &link) {
                    frontier.push(link);
                }
            }
        }

        info!(
            pages = sitemap.len(),
            skipped,
            visited = frontier.visited_count(),
            "crawl finished"
        );

        Ok(sitemap)
    }
}
