// src/crawl/scope.rs
// =============================================================================
// Decides whether a discovered link belongs to the site being crawled.
//
// The check is a plain string prefix match against the root domain exactly as
// the user typed it. There is no host parsing, so:
//   - "https://example.com.evil.com" matches a root of "https://example.com"
//   - "http://example.com/a" does not match a root of "https://example.com"
//   - relative links ("/a") never match unless they were resolved first
// =============================================================================

/// True when `link` starts with the exact `root` string.
pub fn is_same_domain(root: &str, link: &str) -> bool {
    link.starts_with(root)
}
