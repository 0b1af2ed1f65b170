//! Integration tests for the audit pipeline
//!
//! These tests use wiremock to create mock HTTP servers and drive the real
//! HTTP fetcher through fetch, classification and report writing.

use anchor_audit::crawler::{crawl, FetchError, HttpFetcher, UrlStatus, DEFAULT_USER_AGENT};
use anchor_audit::output::{to_rows, write_csv};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NEWS_PAGE: &str = r#"<html><head><title>News</title></head><body>
    <a href="/world"></a>
    <a href="/sport" aria-label="Sport"></a>
    <a href="/save" title="save file">save file</a>
    <a href="/"><img src="logo.png" alt="Front page"></a>
    <a href="/more">More</a>
</body></html>"#;

const SHOP_PAGE: &str = r#"<html><body>
    <a title="Basket"></a>
    <a href="/deals" title="Today's deals">Deals</a>
</body></html>"#;

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html")
}

fn fetcher() -> Arc<HttpFetcher> {
    Arc::new(HttpFetcher::new(DEFAULT_USER_AGENT).expect("Failed to build client"))
}

#[tokio::test]
async fn test_audit_mixed_batch() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(html(NEWS_PAGE))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/shop"))
        .respond_with(html(SHOP_PAGE))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/blog"))
        .respond_with(html("<html><body><a>Archive</a></body></html>"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html(NEWS_PAGE).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let urls: Vec<String> = ["/news", "/shop", "/missing", "/slow", "/blog"]
        .iter()
        .map(|p| format!("{}{}", base_url, p))
        .collect();

    let report = crawl(&urls, fetcher(), Duration::from_millis(500)).await;

    // news: positions 1, 3, 5; shop: 1, 2; blog: 1
    assert_eq!(report.findings.len(), 6);
    assert_eq!(report.succeeded(), 3);
    assert_eq!(report.failed(), 2);

    assert_eq!(report.outcomes[0].status, UrlStatus::Audited { findings: 3 });
    assert_eq!(report.outcomes[1].status, UrlStatus::Audited { findings: 2 });
    assert_eq!(
        report.outcomes[2].status,
        UrlStatus::Failed(FetchError::HttpStatus {
            url: urls[2].clone(),
            status: 404
        })
    );
    assert!(matches!(
        report.outcomes[3].status,
        UrlStatus::Failed(FetchError::Timeout { .. })
    ));
    assert_eq!(report.outcomes[4].status, UrlStatus::Audited { findings: 1 });

    let news: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.source_url == urls[0])
        .map(|f| (f.position, f.rules.as_str(), f.severity.as_str()))
        .collect();
    assert_eq!(
        news,
        vec![
            (1, "2_4_4_H77,H78,H79,H80,H81", "WARNING"),
            (3, "2_4_4_H77,H78,H79,H80,H81,H33", "WARNING"),
            (5, "2_4_4_H77,H78,H79,H80,H81", "NOTICE"),
        ]
    );

    let shop: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.source_url == urls[1])
        .map(|f| (f.position, f.rules.as_str(), f.severity.as_str()))
        .collect();
    assert_eq!(
        shop,
        vec![
            (1, "2_4_4_H77,H78,H79,H80,H81,H33", "WARNING"),
            (2, "2_4_4_H77,H78,H79,H80,H81,H33", "NOTICE"),
        ]
    );

    let rows = to_rows(&report.findings);
    let serials: Vec<usize> = rows.iter().map(|r| r.serial).collect();
    assert_eq!(serials, (1..=6).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_report_written_to_csv() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(SHOP_PAGE))
        .mount(&mock_server)
        .await;

    let urls = vec![format!("{}/", mock_server.uri())];
    let report = crawl(&urls, fetcher(), Duration::from_secs(5)).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("output.csv");
    write_csv(&to_rows(&report.findings), &csv_path).expect("Failed to write CSV");

    let written = std::fs::read_to_string(&csv_path).expect("Failed to read CSV");
    let lines: Vec<&str> = written.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "s.no,url,tag,rule,severe");
    assert!(lines[1].starts_with(&format!("1,{},", urls[0])));
    assert!(lines[1].ends_with(",\"2_4_4_H77,H78,H79,H80,H81,H33\",WARNING"));
    assert!(lines[2].starts_with("2,"));
    assert!(lines[2].ends_with("NOTICE"));
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "TestAuditor/1.0 (+https://example.com/about)"))
        .respond_with(html("<a href=\"/\"></a>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Arc::new(
        HttpFetcher::new("TestAuditor/1.0 (+https://example.com/about)")
            .expect("Failed to build client"),
    );
    let urls = vec![format!("{}/", mock_server.uri())];
    let report = crawl(&urls, fetcher, Duration::from_secs(5)).await;

    assert_eq!(report.findings.len(), 1);
}

#[tokio::test]
async fn test_empty_body_and_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(html(""))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/error"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1) // single attempt, no retries
        .mount(&mock_server)
        .await;

    let urls = vec![
        format!("{}/empty", mock_server.uri()),
        format!("{}/error", mock_server.uri()),
    ];
    let report = crawl(&urls, fetcher(), Duration::from_secs(5)).await;

    assert!(report.findings.is_empty());
    assert!(matches!(
        report.outcomes[0].status,
        UrlStatus::Failed(FetchError::EmptyBody { .. })
    ));
    assert!(matches!(
        report.outcomes[1].status,
        UrlStatus::Failed(FetchError::HttpStatus { status: 500, .. })
    ));
}
