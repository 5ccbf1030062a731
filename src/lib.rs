// src/lib.rs
// =============================================================================
// site-crawler: walks every page of one site reachable from a seed URL.
//
// The engine (crawl) is fixed; the three collaborators it drives are traits
// so they can be swapped:
// - fetch::Fetcher         URL -> status + body       (default: reqwest GET)
// - extract::LinkExtractor body -> candidate links   (default: <a href>)
// - handler::PageHandler   what to do with each page (default: nothing)
// =============================================================================

pub mod config;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod handler;
pub mod report;

pub use config::CrawlConfig;
pub use crawl::{Crawler, Scope};
pub use error::{CrawlError, Result};
pub use extract::{HtmlLinkExtractor, LinkExtractor};
pub use fetch::{FetchResult, Fetcher, HttpFetcher};
pub use handler::{NoopHandler, PageHandler};
pub use report::CrawlReport;
