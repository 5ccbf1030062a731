// tests/crawl_site.rs
// =============================================================================
// End-to-end crawls through the library API, using the real HTTP fetcher
// against a local mockito server.
// =============================================================================

use site_crawler::{CrawlConfig, Crawler};
use std::time::Duration;

fn config(seed: &str) -> CrawlConfig {
    CrawlConfig::new(seed)
        .with_workers(4)
        .with_idle_timeout(Duration::from_millis(200))
        .with_request_timeout(Duration::from_secs(5))
}

/// Seed links to /a, an absolute /b and an external page; /b links back home.
#[tokio::test]
async fn test_crawls_local_site_once_per_page() {
    let mut server = mockito::Server::new_async().await;
    let origin = server.url();

    let home = server
        .mock("GET", "/")
        .with_status(200)
        .with_body(format!(
            r#"<a href="/a">A</a><a href="{origin}/b">B</a><a href="http://other.invalid/c">C</a>"#
        ))
        .expect(1)
        .create_async()
        .await;
    let a = server
        .mock("GET", "/a")
        .with_status(200)
        .with_body("<p>leaf</p>")
        .expect(1)
        .create_async()
        .await;
    let b = server
        .mock("GET", "/b")
        .with_status(200)
        .with_body(r#"<a href="/">home</a><a href="/a#again">A again</a>"#)
        .expect(1)
        .create_async()
        .await;

    let visited = Crawler::new(config(&origin)).unwrap().run().await;

    let mut pages: Vec<String> = visited.into_iter().collect();
    pages.sort();
    assert_eq!(
        pages,
        vec![origin.clone(), format!("{origin}/a"), format!("{origin}/b")]
    );

    home.assert_async().await;
    a.assert_async().await;
    b.assert_async().await;
}

/// A server error on one page keeps it out of the expansion, not the result.
#[tokio::test]
async fn test_server_error_page_is_not_expanded() {
    let mut server = mockito::Server::new_async().await;
    let origin = server.url();

    let _home = server
        .mock("GET", "/")
        .with_status(200)
        .with_body(r#"<a href="/flaky">flaky</a><a href="/fine">fine</a>"#)
        .create_async()
        .await;
    let _flaky = server
        .mock("GET", "/flaky")
        .with_status(500)
        .with_body(r#"<a href="/only-from-flaky">hidden</a>"#)
        .create_async()
        .await;
    let _fine = server
        .mock("GET", "/fine")
        .with_status(200)
        .with_body("ok")
        .create_async()
        .await;
    let hidden = server
        .mock("GET", "/only-from-flaky")
        .expect(0)
        .create_async()
        .await;

    let visited = Crawler::new(config(&origin)).unwrap().run().await;

    assert_eq!(visited.len(), 3);
    assert!(visited.contains(&format!("{origin}/flaky")));
    assert!(visited.contains(&format!("{origin}/fine")));
    hidden.assert_async().await;
}
