// src/fetch/http.rs
// =============================================================================
// The default fetcher: one HTTP GET per URL with reqwest.
//
// Key functionality:
// - One shared Client (connection pooling across all fetch tasks)
// - Per-request timeout
// - No custom headers, no auth, no retries
// - Network errors are sorted into readable reasons (timeout, DNS, TLS...)
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{FetchResult, Fetcher};
use crate::error::{CrawlError, Result};

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the fetcher
    //
    // Fails only if reqwest can't set up its TLS backend.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| CrawlError::InvalidConfig(format!("could not build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(url, &e))?;

        let status = response.status().as_u16();

        // Non-200 bodies are read too; the scheduler decides what to do
        // with the status, not the fetcher
        let body = response.text().await.map_err(|e| fetch_error(url, &e))?;

        Ok(FetchResult { status, body })
    }
}

// Turns a reqwest error into a CrawlError::Fetch with a short reason
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - SSL certificate issues
// - Too many redirects
// - A body that isn't valid text
fn fetch_error(url: &str, error: &reqwest::Error) -> CrawlError {
    CrawlError::Fetch {
        url: url.to_string(),
        reason: categorize_error(error),
    }
}

fn categorize_error(error: &reqwest::Error) -> String {
    let error_string = error.to_string();

    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_connect() {
        if error_string.contains("dns") {
            "could not resolve hostname".to_string()
        } else {
            "connection failed".to_string()
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        "SSL certificate error".to_string()
    } else if error.is_body() || error.is_decode() {
        format!("could not read response body: {error_string}")
    } else {
        error_string
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_ok_page() {
        let mut server = mockito::Server::new_async().await;
        let page = server
            .mock("GET", "/")
            .with_status(200)
            .with_body(r#"<a href="/next">next</a>"#)
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        let result = fetcher.fetch(&server.url()).await.unwrap();

        assert!(result.is_ok());
        assert!(result.body.contains("/next"));
        page.assert_async().await;
    }

    #[tokio::test]
    async fn test_not_found_is_a_result_not_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _missing = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("gone")
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        let result = fetcher
            .fetch(&format!("{}/missing", server.url()))
            .await
            .unwrap();

        assert_eq!(result.status, 404);
        assert!(!result.is_ok());
    }

    #[tokio::test]
    async fn test_connection_failure_becomes_fetch_error() {
        // Port 9 (discard) on localhost is as good as closed in test envs
        let fetcher = HttpFetcher::new(Duration::from_secs(2)).unwrap();
        let error = fetcher.fetch("http://127.0.0.1:9/").await.unwrap_err();

        match error {
            CrawlError::Fetch { url, .. } => assert_eq!(url, "http://127.0.0.1:9/"),
            other => panic!("expected a fetch error, got {other:?}"),
        }
    }
}
