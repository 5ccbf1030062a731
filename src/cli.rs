// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is a single command: crawl one site, starting from a seed URL.
// Every flag maps onto a field of `CrawlConfig`.
// =============================================================================

use clap::Parser;
use std::time::Duration;

use site_crawler::config::default_workers;
use site_crawler::CrawlConfig;

#[derive(Parser, Debug)]
#[command(
    name = "site-crawler",
    version,
    about = "Crawl every same-site page reachable from a seed URL",
    long_about = "site-crawler fetches the seed page, follows every link that stays on the \
                  seed's origin (same scheme, host and port), and keeps going until no new \
                  pages turn up. It prints every page it visited."
)]
pub struct Cli {
    /// Seed URL to start from (e.g., https://example.com)
    pub seed: String,

    /// Maximum number of pages fetched at the same time
    ///
    /// Defaults to five per CPU core
    #[arg(short = 'w', long, default_value_t = default_workers())]
    pub workers: usize,

    /// Seconds the frontier may stay empty before checking whether the crawl is over
    #[arg(long, default_value_t = 10)]
    pub idle_timeout: u64,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, default_value_t = 10)]
    pub request_timeout: u64,

    /// Output results in JSON format instead of a list
    #[arg(long)]
    pub json: bool,

    /// Log every claim, skip and link count (same as RUST_LOG=debug)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig::new(self.seed.clone())
            .with_workers(self.workers)
            .with_idle_timeout(Duration::from_secs(self.idle_timeout))
            .with_request_timeout(Duration::from_secs(self.request_timeout))
    }
}
