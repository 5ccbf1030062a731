// src/handler.rs
// =============================================================================
// The hook for whatever a crawl is actually *for*: indexing, archiving,
// scraping prices... It's called once for every page fetched with HTTP 200,
// on the fetch task's thread, after the page's links have been queued.
// =============================================================================

pub trait PageHandler: Send + Sync {
    fn on_page_scraped(&self, url: &str, body: &str);
}

// Does nothing with the page; the crawl's only output is the visited set
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHandler;

impl PageHandler for NoopHandler {
    fn on_page_scraped(&self, _url: &str, _body: &str) {}
}
