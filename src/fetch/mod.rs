// src/fetch/mod.rs
// =============================================================================
// Downloading pages.
//
// The scheduler only knows about the `Fetcher` trait: hand it a URL, get
// back a status code and a body, or a CrawlError::Fetch. Anything that can
// go wrong on the network must come back as that error value. A fetcher
// that panics still won't bring the crawl down, but it loses the log line.
//
// Submodules:
// - http: the default fetcher, a plain reqwest GET
// =============================================================================

mod http;

use async_trait::async_trait;

use crate::error::Result;

pub use http::HttpFetcher;

// What came back from the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub status: u16,
    pub body: String,
}

impl FetchResult {
    // Only a plain 200 page gets its links followed
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResult>;
}
