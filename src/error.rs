// src/error.rs
// =============================================================================
// Error types for the crawl library.
//
// Only the setup errors (bad seed, bad config) ever reach the caller of
// `Crawler::new`. Fetch and extraction failures are produced by the pluggable
// collaborators during a crawl; the scheduler logs them and keeps going.
//
// Rust concepts:
// - thiserror: derives std::error::Error + Display from attributes
// - #[source]: chains the underlying cause so `{:#}` shows the full story
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrawlError {
    /// The seed could not be parsed as an absolute URL
    #[error("invalid seed URL '{url}': {source}")]
    InvalidSeed {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The seed parsed, but has no host to scope the crawl to (e.g. `data:`)
    #[error("seed URL has no host: {0}")]
    SeedWithoutHost(String),

    #[error("invalid crawl configuration: {0}")]
    InvalidConfig(String),

    /// Network/transport failure while fetching a page
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The page body could not be turned into a list of links
    #[error("could not extract links: {0}")]
    Extraction(String),
}

pub type Result<T> = std::result::Result<T, CrawlError>;
