// Crawls against a local HTTP server

use std::time::Duration;

use reqwest::StatusCode;
use sitemap_builder::{CrawlConfig, CrawlError, Crawler, ErrorPolicy, FetchError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page(links: &[String]) -> String {
    let anchors: String = links
        .iter()
        .map(|l| format!(r#"<li><a href="{}">{}</a></li>"#, l, l))
        .collect();
    format!("<html><body><ul>{}</ul></body></html>", anchors)
}

async fn serve(server: &MockServer, route: &str, body: String, expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(expected_hits)
        .mount(server)
        .await;
}

fn crawler(config: CrawlConfig) -> Crawler<sitemap_builder::HttpFetcher> {
    Crawler::http(config).expect("client should build")
}

// ============================================================================
// Traversal
// ============================================================================

#[tokio::test]
async fn test_depth_and_scope_over_http() {
    let server = MockServer::start().await;
    let root = server.uri();

    serve(
        &server,
        "/",
        page(&[
            format!("{}/a", root),
            format!("{}/a/b", root),
            "http://other.invalid/x".to_string(),
        ]),
        1,
    )
    .await;
    serve(&server, "/a", page(&[]), 1).await;
    serve(&server, "/a/b", page(&[]), 0).await;

    let sitemap = crawler(CrawlConfig::default().with_max_depth(1))
        .crawl(&root)
        .await
        .unwrap();

    let a = format!("{}/a", root);
    assert_eq!(sitemap.locs().collect::<Vec<_>>(), vec![root.as_str(), a.as_str()]);
}

#[tokio::test]
async fn test_each_page_fetched_once() {
    let server = MockServer::start().await;
    let root = server.uri();
    let a = format!("{}/a", root);

    serve(&server, "/", page(&[a.clone(), a.clone()]), 1).await;
    serve(&server, "/a", page(&[root.clone(), a.clone()]), 1).await;

    let sitemap = crawler(CrawlConfig::default()).crawl(&root).await.unwrap();

    assert_eq!(sitemap.len(), 2);
    // MockServer verifies the expect(1) counts when dropped
}

#[tokio::test]
async fn test_page_without_links() {
    let server = MockServer::start().await;
    let root = server.uri();
    serve(&server, "/", "<html><body><p>hello</p></body></html>".into(), 1).await;

    let sitemap = crawler(CrawlConfig::default()).crawl(&root).await.unwrap();

    assert_eq!(sitemap.locs().collect::<Vec<_>>(), vec![root.as_str()]);
    let xml = sitemap.to_xml().unwrap();
    assert!(xml.contains(&format!("<loc>{}</loc>", root)));
}

#[tokio::test]
async fn test_error_status_pages_are_listed_by_default() {
    let server = MockServer::start().await;
    let root = server.uri();
    let gone = format!("{}/gone", root);

    serve(&server, "/", page(&[gone.clone()]), 1).await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<h1>Not found</h1>"))
        .mount(&server)
        .await;

    let sitemap = crawler(CrawlConfig::default()).crawl(&root).await.unwrap();

    assert!(sitemap.contains(&gone));
}

#[tokio::test]
async fn test_relative_links_resolved_when_enabled() {
    let server = MockServer::start().await;
    let root = server.uri();

    serve(&server, "/", page(&["/docs/".to_string()]), 1).await;
    serve(&server, "/docs/", page(&["intro".to_string()]), 1).await;
    serve(&server, "/docs/intro", page(&[]), 1).await;

    let config = CrawlConfig::default().with_resolve_relative(true);
    let sitemap = crawler(config).crawl(&root).await.unwrap();

    assert_eq!(sitemap.len(), 3);
    assert!(sitemap.contains(&format!("{}/docs/intro", root)));
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_timeout_on_second_page_aborts() {
    let server = MockServer::start().await;
    let root = server.uri();
    let fast = format!("{}/fast", root);
    let slow = format!("{}/slow", root);

    // "/slow" is pushed last, so it is the second page fetched
    serve(&server, "/", page(&[fast.clone(), slow.clone()]), 1).await;
    serve(&server, "/fast", page(&[]), 0).await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let config = CrawlConfig::default().with_timeout(Duration::from_millis(200));
    let err = crawler(config).crawl(&root).await.unwrap_err();

    assert_eq!(err.url(), Some(slow.as_str()));
    match err {
        CrawlError::Fetch { source, .. } => assert!(source.is_timeout()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_require_success_rejects_server_errors() {
    let server = MockServer::start().await;
    let root = server.uri();
    let broken = format!("{}/broken", root);

    serve(&server, "/", page(&[broken.clone()]), 1).await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = CrawlConfig::default().with_require_success(true);
    let err = crawler(config).crawl(&root).await.unwrap_err();

    match err {
        CrawlError::Fetch { url, source } => {
            assert_eq!(url, broken);
            assert!(matches!(
                source,
                FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR)
            ));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_skip_policy_returns_partial_sitemap() {
    let server = MockServer::start().await;
    let root = server.uri();
    let ok = format!("{}/ok", root);
    let broken = format!("{}/broken", root);

    serve(&server, "/", page(&[ok.clone(), broken.clone(), broken.clone()]), 1).await;
    serve(&server, "/ok", page(&[]), 1).await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let config = CrawlConfig::default()
        .with_require_success(true)
        .with_error_policy(ErrorPolicy::Skip);
    let sitemap = crawler(config).crawl(&root).await.unwrap();

    assert_eq!(sitemap.locs().collect::<Vec<_>>(), vec![root.as_str(), ok.as_str()]);
}

#[tokio::test]
async fn test_unreachable_root_fails() {
    // Bind then drop a listener to get a port nothing is listening on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let root = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = crawler(CrawlConfig::default()).crawl(&root).await.unwrap_err();

    assert_eq!(err.url(), Some(root.as_str()));
    assert!(matches!(
        err,
        CrawlError::Fetch {
            source: FetchError::Request(_),
            ..
        }
    ));
}
