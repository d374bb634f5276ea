// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Example:
//   sitemap-builder --domain https://example.com --depth 2
// =============================================================================

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use sitemap_builder::config::{
    CrawlConfig, ErrorPolicy, TraversalOrder, DEFAULT_MAX_DEPTH, DEFAULT_TIMEOUT,
};

#[derive(Parser, Debug)]
#[command(
    name = "sitemap-builder",
    version,
    about = "Crawl a website and print an XML sitemap of its pages",
    long_about = "sitemap-builder starts at a root domain, follows every link that starts with \
                  that domain up to a maximum depth, and prints the pages it visited as a \
                  sitemaps.org style <urlset> document."
)]
pub struct Cli {
    /// Website domain to build the sitemap for (e.g., https://example.com)
    ///
    /// Only links that start with exactly this string are followed.
    /// Optional so that a missing domain prints a hint instead of an error.
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Maximum depth to follow links
    ///
    /// Depth is the number of '/'-separated pieces after the host:
    /// https://example.com is 0, https://example.com/a is 1, and so on.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub depth: usize,

    /// Order in which discovered pages are visited
    #[arg(long, value_enum, default_value_t = Order::Dfs)]
    pub order: Order,

    /// What to do when a page can't be fetched
    #[arg(long = "on-error", value_enum, default_value_t = OnError::Abort)]
    pub on_error: OnError,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Resolve relative links (e.g. href="/about") against the page they're on
    #[arg(long)]
    pub resolve_relative: bool,

    /// Treat non-2xx responses as fetch errors
    #[arg(long)]
    pub require_success: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Xml)]
    pub format: Format,

    /// Write the sitemap to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log more (-v: info, -vv: debug). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Depth-first: follow the newest links first
    Dfs,
    /// Breadth-first: visit pages level by level
    Bfs,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnError {
    /// Stop at the first page that fails; print no sitemap
    Abort,
    /// Warn, leave the page out and continue
    Skip,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Xml,
    Json,
}

impl Cli {
    /// The root domain, if one was given and it isn't blank.
    pub fn root_domain(&self) -> Option<&str> {
        self.domain.as_deref().filter(|d| !d.is_empty())
    }

    pub fn crawl_config(&self) -> CrawlConfig {
        let order = match self.order {
            Order::Dfs => TraversalOrder::DepthFirst,
            Order::Bfs => TraversalOrder::BreadthFirst,
        };
        let on_error = match self.on_error {
            OnError::Abort => ErrorPolicy::Abort,
            OnError::Skip => ErrorPolicy::Skip,
        };

        CrawlConfig::default()
            .with_max_depth(self.depth)
            .with_order(order)
            .with_error_policy(on_error)
            .with_timeout(Duration::from_secs(self.timeout))
            .with_resolve_relative(self.resolve_relative)
            .with_require_success(self.require_success)
    }
}
