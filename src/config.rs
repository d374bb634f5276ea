// src/config.rs
// =============================================================================
// Settings for a single crawl.
//
// The CLI builds one of these from its flags; tests build them directly with
// the with_* methods.
// =============================================================================

use std::time::Duration;

/// Default maximum link-following depth.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Default per-fetch timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The order in which pending URLs leave the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// Last in, first out: the newest page's links are explored first
    #[default]
    DepthFirst,
    /// First in, first out: pages are explored level by level
    BreadthFirst,
}

/// What to do when a page cannot be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop the crawl and return the error; no sitemap is produced
    #[default]
    Abort,
    /// Log a warning, leave the page out of the sitemap and keep going
    Skip,
}

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub max_depth: usize,
    pub order: TraversalOrder,
    pub on_error: ErrorPolicy,
    pub timeout: Duration,
    /// Join non-absolute hrefs against the page they were found on
    pub resolve_relative: bool,
    /// Treat non-2xx responses as fetch errors
    pub require_success: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            order: TraversalOrder::default(),
            on_error: ErrorPolicy::default(),
            timeout: DEFAULT_TIMEOUT,
            resolve_relative: false,
            require_success: false,
        }
    }
}

impl CrawlConfig {
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_resolve_relative(mut self, resolve: bool) -> Self {
        self.resolve_relative = resolve;
        self
    }

    pub fn with_require_success(mut self, require: bool) -> Self {
        self.require_success = require;
        self
    }
}
