//! Health Check API Tests

use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::common::*;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    assert_json_utf8(&response);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.server.get("/health/live").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_readiness_probe_with_in_memory_store() {
    let app = TestApp::new();

    let response = app.server.get("/health/ready").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["store"]["status"], "healthy");
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_request_counters() {
    let app = TestApp::new();
    app.server.get("/users").await.assert_status_ok();

    let response = app.server.get("/metrics").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("sup_server_http_requests_total"));
    assert!(body.contains("path=\"/users\""));
}

#[tokio::test]
async fn test_metrics_endpoint_counts_validation_failures() {
    let app = TestApp::new();
    app.server
        .post("/users")
        .json(&serde_json::json!({}))
        .expect_failure()
        .await;

    let body = app.server.get("/metrics").await.text();

    assert!(body.contains("sup_server_validation_failures_total"));
    assert!(body.contains("kind=\"missing_field\""));
}
