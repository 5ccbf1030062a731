// src/report.rs
// =============================================================================
// What a finished crawl looks like from the outside: the seed and every page
// that was claimed, sorted so runs are easy to diff. Serializes to the JSON
// printed by `--json`.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlReport {
    pub seed: String,
    pub total: usize,
    /// Includes pages whose fetch failed; they were still claimed
    pub pages: Vec<String>,
}

impl CrawlReport {
    pub fn new(seed: impl Into<String>, visited: HashSet<String>) -> Self {
        let mut pages: Vec<String> = visited.into_iter().collect();
        pages.sort();

        Self {
            seed: seed.into(),
            total: pages.len(),
            pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_sorted_and_counted() {
        let visited: HashSet<String> = ["http://example.com/b", "http://example.com", "http://example.com/a"]
            .into_iter()
            .map(String::from)
            .collect();

        let report = CrawlReport::new("http://example.com", visited);

        assert_eq!(report.total, 3);
        assert_eq!(
            report.pages,
            vec!["http://example.com", "http://example.com/a", "http://example.com/b"]
        );
    }

    #[test]
    fn test_json_shape() {
        let report = CrawlReport::new("http://example.com", HashSet::from(["http://example.com".to_string()]));
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();

        assert_eq!(json["seed"], "http://example.com");
        assert_eq!(json["total"], 1);
        assert_eq!(json["pages"][0], "http://example.com");
    }
}
