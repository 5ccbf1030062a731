// src/extract/html.rs
// =============================================================================
// Extracts hyperlink targets from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which recovers from broken markup the same way
//   browsers do, so "malformed HTML" still yields whatever links it has
// =============================================================================

use scraper::{Html, Selector};

use super::LinkExtractor;
use crate::error::{CrawlError, Result};

// Every <a> tag that has an href attribute
const LINK_SELECTOR: &str = "a[href]";

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlLinkExtractor;

impl HtmlLinkExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl LinkExtractor for HtmlLinkExtractor {
    // Returns the href values exactly as written in the page
    //
    // Example:
    //   html = "<a href='/docs'>Docs</a><a href='https://x.org'>X</a>"
    //   result = ["/docs", "https://x.org"]
    fn extract_links(&self, body: &str) -> Result<Vec<String>> {
        let selector = Selector::parse(LINK_SELECTOR)
            .map_err(|e| CrawlError::Extraction(format!("bad selector {LINK_SELECTOR}: {e:?}")))?;

        let document = Html::parse_document(body);

        let links = document
            .select(&selector)
            .filter_map(|element| element.value().attr("href"))
            .map(str::trim)
            .filter(|href| !href.is_empty())
            .map(str::to_string)
            .collect();

        Ok(links)
    }
}
