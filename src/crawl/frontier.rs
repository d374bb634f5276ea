// src/crawl/frontier.rs
// =============================================================================
// The work queue and visited set of one crawl.
//
// How it works:
// 1. Links are pushed as they are discovered, duplicates and all
// 2. next() hands back the next URL that has not been visited yet
// 3. A URL only becomes "visited" when mark_visited() is called for it,
//    after the page has been processed
//
// Deduplication is lazy: it happens when a URL comes out of the queue, not
// when it goes in.
//
// Rust concepts:
// - VecDeque: Double-ended queue; pop_back gives a stack, pop_front a queue
// - HashSet: O(1) "have we seen this?" checks
// =============================================================================

use std::collections::{HashSet, VecDeque};

use crate::config::TraversalOrder;

/// Pieces produced by splitting "scheme://host" on '/'
const PREFIX_SEGMENTS: usize = 3;

// Depth of a URL, read from its text
//
// Splits on '/' and counts the pieces after "scheme:", "" and the host.
// Purely textual: a trailing slash, "//" or a '/' inside a query string all
// count as another level.
//
// Examples:
//   "https://example.com"      -> 0
//   "https://example.com/"     -> 1
//   "https://example.com/a"    -> 1
//   "https://example.com/a/b"  -> 2
pub fn url_depth(url: &str) -> usize {
    url.split('/').count().saturating_sub(PREFIX_SEGMENTS)
}

#[derive(Debug)]
pub struct Frontier {
    pending: VecDeque<String>,
    visited: HashSet<String>,
    order: TraversalOrder,
}

impl Frontier {
    /// Creates a frontier holding only `root`.
    pub fn new(root: &str, order: TraversalOrder) -> Self {
        let mut pending = VecDeque::new();
        pending.push_back(root.to_string());
        Self {
            pending,
            visited: HashSet::new(),
            order,
        }
    }

    pub fn push(&mut self, url: String) {
        self.pending.push_back(url);
    }

    // Pops until it finds a URL that is unvisited and within max_depth
    //
    // Entries that fail either check are dropped with no other side effect.
    pub fn next(&mut self, max_depth: usize) -> Option<String> {
        while let Some(url) = self.pop() {
            if self.visited.contains(&url) {
                continue;
            }
            if url_depth(&url) > max_depth {
                tracing::debug!(%url, depth = url_depth(&url), "beyond max depth");
                continue;
            }
            return Some(url);
        }
        None
    }

    /// Records `url` as processed. Returns false if it already was.
    pub fn mark_visited(&mut self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    fn pop(&mut self) -> Option<String> {
        match self.order {
            TraversalOrder::DepthFirst => self.pending.pop_back(),
            TraversalOrder::BreadthFirst => self.pending.pop_front(),
        }
    }
}
