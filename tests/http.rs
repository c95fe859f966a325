//! HTTP tests for resolving the site language from request headers.
//!
//! The router is driven directly with `oneshot` so no socket is bound.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use site_language::{routes, SiteLanguage};
use tower::ServiceExt;

// ==================== Test Helpers ====================

fn app(supported: &[&str], default: &str) -> Router {
    routes::router(Arc::new(SiteLanguage::new(
        supported.iter().copied(),
        default,
    )))
}

async fn get(app: Router, accept_language: Option<&str>) -> Response {
    let mut request = Request::builder().uri("/");
    if let Some(value) = accept_language {
        request = request.header(header::ACCEPT_LANGUAGE, value);
    }

    app.oneshot(request.body(Body::empty()).expect("Failed to build request"))
        .await
        .expect("Failed to send request")
}

async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

// ==================== Resolution ====================

#[tokio::test]
async fn resolves_language_from_header() {
    let response = get(app(&["fr", "de"], "ch"), Some("en-GB,fr;q=0.8")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_LANGUAGE).unwrap(),
        "fr"
    );
    assert_eq!(body_text(response).await, "fr");
}

#[tokio::test]
async fn missing_header_uses_default() {
    let response = get(app(&["de", "ch"], "zu"), None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "zu");
}

#[tokio::test]
async fn unsupported_languages_use_default() {
    let response = get(app(&["ru", "fi"], "ch"), Some("en,fr")).await;

    assert_eq!(body_text(response).await, "ch");
}

#[tokio::test]
async fn client_order_decides() {
    let response = get(app(&["de", "zu"], "ch"), Some("en,zu;q=0.7,de")).await;

    assert_eq!(body_text(response).await, "zu");
}

// ==================== Misconfiguration ====================

#[tokio::test]
async fn missing_supported_languages_is_server_error() {
    let response = get(app(&[], "en"), Some("en")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn missing_default_language_is_server_error_without_header() {
    let response = get(app(&["en"], ""), None).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
