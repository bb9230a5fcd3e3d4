//! Behavior-driven tests for the HTTP service
//!
//! These tests drive the axum router in-process and verify what a browser
//! or API client receives.

use astrasim_tests::*;
use astrasim_web::{app_router, AppState, WebConfig};
use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

fn router_with(config: WebConfig) -> Router {
    app_router(AppState::new(Site::default(), config))
}

async fn get(router: Router, uri: &str, headers: &[(&str, &str)]) -> (StatusCode, HeaderMap, String) {
    let mut request = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    let response = router
        .oneshot(request.body(Body::empty()).expect("valid request"))
        .await
        .expect("router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (status, headers, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

fn json(body: &str) -> Value {
    serde_json::from_str(body).expect("body should be JSON")
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn browser_receives_full_document_for_stock_page() {
    // Given: The service with default settings
    let router = router_with(WebConfig::default());

    // When: A browser requests a lowercase ticker
    let (status, headers, body) = get(router, "/stock/aapl", &[]).await;

    // Then: The document is HTML with the uppercased title and heading
    assert_eq!(status, StatusCode::OK);
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/html"));
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("<title>AstraSim — AAPL</title>"));
    assert!(body.contains(">AAPL snapshot</h1>"));
}

#[tokio::test]
async fn query_string_does_not_affect_page_resolution() {
    let router = router_with(WebConfig::default());

    let (status, _, body) = get(router, "/screener?sort=volatility", &[]).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>AstraSim — Screener</title>"));
}

#[tokio::test]
async fn unknown_page_returns_not_found_document() {
    // Given: The service
    let router = router_with(WebConfig::default());

    // When: A browser requests an unregistered path
    let (status, headers, body) = get(router, "/unknown", &[]).await;

    // Then: A 404 HTML document framed by the layout comes back
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/html")));
    assert!(body.contains("<title>404: This page could not be found.</title>"));
    assert!(body.contains("data-region=\"navbar\""));
}

#[tokio::test]
async fn every_response_carries_a_request_id() {
    for uri in ["/", "/unknown", "/api/v1/health"] {
        let (_, headers, _) = get(router_with(WebConfig::default()), uri, &[]).await;

        let request_id = headers
            .get("x-request-id")
            .and_then(|value| value.to_str().ok())
            .expect("request id header");
        assert_eq!(request_id.len(), 36, "{uri}");
    }
}

// =============================================================================
// JSON API
// =============================================================================

#[tokio::test]
async fn health_check_reports_ok() {
    let (status, _, body) = get(router_with(WebConfig::default()), "/api/v1/health", &[]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body), serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn meta_info_reflects_configuration() {
    // Given: A configured environment name
    let config = WebConfig {
        app_name: String::from("AstraSim Staging"),
        environment: String::from("staging"),
        ..WebConfig::default()
    };

    // When: A client asks for service info
    let (status, _, body) = get(router_with(config), "/api/v1/meta/info", &[]).await;

    // Then: The configured values and a start timestamp are reported
    assert_eq!(status, StatusCode::OK);
    let info = json(&body);
    assert_eq!(info["app_name"], "AstraSim Staging");
    assert_eq!(info["environment"], "staging");
    assert!(info["version"].as_str().is_some_and(|version| !version.is_empty()));
    assert!(info["started_at"].as_str().is_some_and(|stamp| stamp.contains('T')));
}

#[tokio::test]
async fn route_metadata_lookup_resolves_stock_page() {
    let (status, _, body) = get(
        router_with(WebConfig::default()),
        "/api/v1/meta/route?path=/stock/aapl",
        &[],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let metadata = json(&body);
    assert_eq!(metadata["page"], "stock");
    assert_eq!(metadata["pattern"], "/stock/:symbol");
    assert_eq!(metadata["params"]["symbol"], "aapl");
    assert_eq!(metadata["title"], "AstraSim — AAPL");
}

#[tokio::test]
async fn route_metadata_lookup_reports_unmatched_path() {
    let (status, _, body) = get(
        router_with(WebConfig::default()),
        "/api/v1/meta/route?path=/unknown",
        &[],
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error = json(&body);
    assert_eq!(error["error"]["code"], "route.unmatched");
    assert!(error["error"]["message"]
        .as_str()
        .is_some_and(|message| message.contains("/unknown")));
}

#[tokio::test]
async fn route_metadata_lookup_without_path_uses_json_error_envelope() {
    // Given: A client that forgets the path parameter
    let router = router_with(WebConfig::default());

    // When: The lookup is called with no query string
    let (status, headers, body) = get(router, "/api/v1/meta/route", &[]).await;

    // Then: A 400 comes back in the same JSON shape as other API errors
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json")));
    let error = json(&body);
    assert_eq!(error["error"]["code"], "http.invalid_query");
    assert!(error["error"]["message"]
        .as_str()
        .is_some_and(|message| !message.is_empty()));
}

// =============================================================================
// CORS
// =============================================================================

#[tokio::test]
async fn configured_origin_is_allowed() {
    // Given: The frontend origin is configured
    let config = WebConfig {
        cors_origins: vec![String::from("http://localhost:5173")],
        ..WebConfig::default()
    };

    // When: That origin calls the API
    let (status, headers, _) = get(
        router_with(config),
        "/api/v1/health",
        &[("origin", "http://localhost:5173")],
    )
    .await;

    // Then: The response allows it
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("http://localhost:5173")
    );
}

#[tokio::test]
async fn no_cors_headers_without_configured_origins() {
    let (_, headers, _) = get(
        router_with(WebConfig::default()),
        "/api/v1/health",
        &[("origin", "http://localhost:5173")],
    )
    .await;

    assert!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
