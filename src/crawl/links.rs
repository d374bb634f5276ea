// src/crawl/links.rs
// =============================================================================
// This module pulls hyperlink targets out of an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Is built on html5ever, which recovers from malformed markup the way
//   browsers do, so parsing itself never fails
//
// The walk is pre-order and depth-first, so links come out in document order.
// Values are returned exactly as written in the href attribute.
// =============================================================================

use scraper::{ElementRef, Html};
use url::{ParseError, Url};

// Extracts the href of every <a> element, in document order
//
// Parameters:
//   html: the page content
//
// Returns: Vec<String> with one entry per anchor. An anchor without an href
// yields "" so the count always matches the number of anchors found.
//
// Example:
//   html = "<a href='https://example.com/a'>A</a><a>no target</a>"
//   result = ["https://example.com/a", ""]
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();
    collect_anchors(document.root_element(), &mut links);
    links
}

// Recursive pre-order walk. An anchor's own children are not searched.
fn collect_anchors(element: ElementRef<'_>, links: &mut Vec<String>) {
    if element.value().name() == "a" {
        let href = element.value().attr("href").unwrap_or_default();
        links.push(href.to_string());
        return;
    }

    // Only element children can contain anchors; text and comments are skipped
    for child in element.children().filter_map(ElementRef::wrap) {
        collect_anchors(child, links);
    }
}

// Resolves an href against the page it was found on
//
// Absolute links come back untouched, byte for byte. Relative links are joined
// with the page URL. Fragment-only links ("#top") point back at the same page
// and are dropped.
//
// Examples:
//   page = "https://example.com/docs/"
//   href = "intro"                  -> Some("https://example.com/docs/intro")
//   href = "/about"                 -> Some("https://example.com/about")
//   href = "https://other.com/x"    -> Some("https://other.com/x")
//   href = "#section"               -> None
pub fn resolve_link(page_url: &str, href: &str) -> Option<String> {
    if href.starts_with('#') {
        return None;
    }

    match Url::parse(href) {
        Ok(_) => Some(href.to_string()),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(page_url).ok()?;
            base.join(href).ok().map(String::from)
        }
        Err(_) => None,
    }
}
