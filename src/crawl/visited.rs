// src/crawl/visited.rs
// =============================================================================
// The set of URLs that have been claimed for fetching.
//
// "Claimed" means "will be or has been fetched", not "fetched successfully".
// A URL that failed to download is still in here, which is what stops it
// being tried again. Nothing is ever removed.
//
// Rust concepts:
// - DashSet: a HashSet split into independently locked shards, so many
//   tasks can insert at once without a single global Mutex
// =============================================================================

use dashmap::DashSet;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: DashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    // Claims a URL for fetching
    //
    // Returns: true if this call inserted the URL (the caller should fetch
    // it), false if someone claimed it first.
    //
    // The membership check and the insert happen under one shard lock, so
    // two callers racing on the same URL can never both get `true`.
    pub fn try_claim(&self, url: &str) -> bool {
        self.urls.insert(url.to_string())
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    // Consumes the set once the crawl is over
    pub fn into_set(self) -> HashSet<String> {
        self.urls.into_iter().collect()
    }

    // Copies the current contents while others may still hold the set
    pub fn snapshot(&self) -> HashSet<String> {
        self.urls.iter().map(|url| url.key().clone()).collect()
    }
}
