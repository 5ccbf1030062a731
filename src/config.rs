// src/config.rs
// =============================================================================
// Settings for one crawl run.
//
// The CLI fills this in from its flags; library users build it directly:
//
//   let config = CrawlConfig::new("https://example.com")
//       .with_workers(8)
//       .with_idle_timeout(Duration::from_secs(2));
// =============================================================================

use std::time::Duration;

use crate::error::{CrawlError, Result};

/// How long the scheduler waits on an empty frontier before re-checking
/// whether the crawl is finished.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-request timeout used by the default HTTP fetcher.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Outstanding fetches spend nearly all their time waiting on the network,
// so the pool is a multiple of the core count rather than equal to it.
const WORKERS_PER_CPU: usize = 5;

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// The URL the crawl starts from; its origin is the crawl's scope
    pub seed: String,
    /// Maximum number of fetches in flight at once
    pub workers: usize,
    pub idle_timeout: Duration,
    pub request_timeout: Duration,
}

impl CrawlConfig {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            workers: default_workers(),
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Rejects settings that would make the crawl hang or spin.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(CrawlError::InvalidConfig(
                "workers must be at least 1".to_string(),
            ));
        }
        if self.idle_timeout.is_zero() {
            return Err(CrawlError::InvalidConfig(
                "idle timeout must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout.is_zero() {
            return Err(CrawlError::InvalidConfig(
                "request timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn default_workers() -> usize {
    num_cpus::get().max(1) * WORKERS_PER_CPU
}
