// src/sitemap.rs
// =============================================================================
// The sitemap: the ordered list of pages a crawl visited.
//
// The crawler appends to it once per visited page. When the crawl is done it
// is written out as a sitemaps.org style document:
//
//   <?xml version="1.0" encoding="UTF-8"?>
//   <urlset>
//     <url>
//       <loc>https://example.com</loc>
//     </url>
//   </urlset>
//
// serde describes the shape, quick-xml writes the XML and serde_json writes
// the JSON variant.
// =============================================================================

use anyhow::{Context, Result};
use quick_xml::se::Serializer;
use serde::Serialize;

/// Standard XML declaration printed before the document
pub const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// One `<url>` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapUrl {
    pub loc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename = "urlset")]
pub struct Sitemap {
    #[serde(rename = "url")]
    urls: Vec<SitemapUrl>,
}

impl Sitemap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a visited page. The crawler calls this once per URL.
    pub fn push(&mut self, loc: impl Into<String>) {
        let loc = loc.into();
        debug_assert!(!self.contains(&loc), "{loc} recorded twice");
        self.urls.push(SitemapUrl { loc });
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn contains(&self, loc: &str) -> bool {
        self.urls.iter().any(|u| u.loc == loc)
    }

    /// Page URLs in the order they were visited.
    pub fn locs(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(|u| u.loc.as_str())
    }

    // Renders the XML document, header included, indented two spaces per level
    pub fn to_xml(&self) -> Result<String> {
        let mut body = String::new();
        let mut serializer = Serializer::new(&mut body);
        serializer.indent(' ', 2);
        self.serialize(serializer)
            .context("failed to serialize sitemap as XML")?;

        Ok(format!("{}\n{}", XML_HEADER, body))
    }

    /// Renders the records as a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.urls).context("failed to serialize sitemap as JSON")
    }
}

impl FromIterator<String> for Sitemap {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut sitemap = Sitemap::new();
        for loc in iter {
            sitemap.push(loc);
        }
        sitemap
    }
}
