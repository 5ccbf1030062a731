// src/extract/mod.rs
// =============================================================================
// Finding links in a fetched page.
//
// A `LinkExtractor` returns the raw link strings it finds. It does not
// resolve or filter them; that's the URL normalizer's job, so an extractor
// for another format (sitemaps, JSON APIs...) only has to find strings.
//
// Submodules:
// - html: the default extractor, every <a href> in an HTML document
// =============================================================================

mod html;

use crate::error::Result;

pub use html::HtmlLinkExtractor;

pub trait LinkExtractor: Send + Sync {
    // Returns every candidate link in `body`
    //
    // An Err is treated by the scheduler as "no links on this page".
    fn extract_links(&self, body: &str) -> Result<Vec<String>>;
}
