// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Depth-first (default) or breadth-first traversal from a root URL
// - Same-site restriction by prefix match on the root domain
// - Depth limit computed from the URL text
// - Each page fetched at most once
//
// Submodules:
// - crawler: the crawl loop
// - frontier: work queue + visited set
// - links: pulls href values out of HTML
// - scope: the same-site check
// =============================================================================

mod crawler;
mod frontier;
mod links;
mod scope;

// Re-export the public API
pub use crawler::Crawler;
pub use frontier::{url_depth, Frontier};
pub use links::{extract_links, resolve_link};
pub use scope::is_same_domain;
