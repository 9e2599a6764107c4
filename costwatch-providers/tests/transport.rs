//! Transport-level fetcher tests.
//!
//! Each fetcher must convert transport failures, non-success statuses, and
//! malformed bodies into its `Err` variant instead of propagating them.

use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{bearer_token, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use costwatch_core::SourceError;
use costwatch_providers::{BalanceFetcher, CostFetcher, CreditsFetcher};

/// A local address nothing listens on.
const REFUSED_BASE: &str = "http://127.0.0.1:1";

// ============================================================================
// Anthropic Balance
// ============================================================================

#[tokio::test]
async fn balance_live_fetch_converts_cents() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/organizations/org-123/prepaid/credits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"amount": 12345.0})))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = BalanceFetcher::live(Client::new(), "org-123").with_base_url(server.uri());
    let balance = fetcher.fetch().await.unwrap();

    assert!((balance.balance - 123.45).abs() < f64::EPSILON);
}

#[tokio::test]
async fn balance_live_fetch_reports_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let fetcher = BalanceFetcher::live(Client::new(), "org-123").with_base_url(server.uri());
    let err = fetcher.fetch().await.unwrap_err();

    assert_eq!(err, SourceError::Status(403));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn balance_live_fetch_reports_refused_connection() {
    let fetcher = BalanceFetcher::live(Client::new(), "org-123").with_base_url(REFUSED_BASE);
    let err = fetcher.fetch().await.unwrap_err();

    assert!(matches!(err, SourceError::Transport(_)));
    assert!(!err.to_string().is_empty());
}

// ============================================================================
// OpenAI Costs
// ============================================================================

#[tokio::test]
async fn cost_fetch_sends_bearer_key_and_window_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/organization/costs"))
        .and(bearer_token("sk-admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "page",
            "data": [
                {"results": [{"amount": {"value": 5.25, "currency": "usd"}}]},
                {"results": [{"amount": {"value": 1.75, "currency": "usd"}}]}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = CostFetcher::new(Client::new(), "sk-admin").with_base_url(server.uri());
    let report = fetcher.fetch().await.unwrap();

    assert!(report.has_usage());
    assert!((report.total() - 7.0).abs() < f64::EPSILON);
    assert_eq!(report.buckets.len(), 2);

    // The window query is part of the request the mock accepted.
    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default();
    assert!(query.contains("start_time="));
    assert!(query.contains("end_time="));
}

#[tokio::test]
async fn cost_fetch_reports_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = CostFetcher::new(Client::new(), "sk-admin").with_base_url(server.uri());
    let err = fetcher.fetch().await.unwrap_err();

    assert_eq!(err, SourceError::Status(500));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn cost_fetch_reports_refused_connection() {
    let fetcher = CostFetcher::new(Client::new(), "sk-admin").with_base_url(REFUSED_BASE);
    let err = fetcher.fetch().await.unwrap_err();

    assert!(matches!(err, SourceError::Transport(_)));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn cost_fetch_reports_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let fetcher = CostFetcher::new(Client::new(), "sk-admin").with_base_url(server.uri());
    let err = fetcher.fetch().await.unwrap_err();

    assert!(matches!(err, SourceError::Malformed(_)));
}

#[tokio::test]
async fn cost_fetch_with_no_buckets_is_ok_but_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"object": "page", "data": []})),
        )
        .mount(&server)
        .await;

    let fetcher = CostFetcher::new(Client::new(), "sk-admin").with_base_url(server.uri());
    let report = fetcher.fetch().await.unwrap();

    assert!(!report.has_usage());
}

// ============================================================================
// OpenRouter Credits
// ============================================================================

#[tokio::test]
async fn credits_fetch_computes_remaining() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/credits"))
        .and(bearer_token("sk-or"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"total_credits": 10.0, "total_usage": 3.5}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = CreditsFetcher::new(Client::new(), "sk-or").with_base_url(server.uri());
    let summary = fetcher.fetch().await.unwrap();

    assert!((summary.total - 10.0).abs() < f64::EPSILON);
    assert!((summary.used - 3.5).abs() < f64::EPSILON);
    assert!((summary.remaining - 6.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn credits_fetch_reports_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let fetcher = CreditsFetcher::new(Client::new(), "sk-or").with_base_url(server.uri());
    let err = fetcher.fetch().await.unwrap_err();

    assert_eq!(err, SourceError::Status(401));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn credits_fetch_reports_refused_connection() {
    let fetcher = CreditsFetcher::new(Client::new(), "sk-or").with_base_url(REFUSED_BASE);
    let err = fetcher.fetch().await.unwrap_err();

    assert!(matches!(err, SourceError::Transport(_)));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn credits_fetch_reports_missing_ledger_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&server)
        .await;

    let fetcher = CreditsFetcher::new(Client::new(), "sk-or").with_base_url(server.uri());
    let err = fetcher.fetch().await.unwrap_err();

    assert!(matches!(err, SourceError::Malformed(_)));
}
