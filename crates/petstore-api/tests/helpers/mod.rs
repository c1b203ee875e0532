//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use petstore_api::{AppState, build_router};
use petstore_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a test application with default configuration
    pub fn new() -> Self {
        Self::with_router(build_router(AppState::new(AppConfig::default())))
    }

    /// Wrap an arbitrary router
    pub fn with_router(router: Router) -> Self {
        Self { router }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<&str>) -> TestResponse {
        self.request_with_content_type(method, path, body, Some("application/json"))
            .await
    }

    /// Make an HTTP request with an explicit (or no) `Content-Type` header
    pub async fn request_with_content_type(
        &self,
        method: &str,
        path: &str,
        body: Option<&str>,
        content_type: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if let Some(content_type) = content_type {
            req = req.header("Content-Type", content_type);
        }

        let req = req
            .body(Body::from(body.unwrap_or_default().to_string()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let raw = String::from_utf8(body_bytes.to_vec()).expect("Body is not UTF-8");
        let body: Value = serde_json::from_str(&raw).unwrap_or(Value::Null);

        TestResponse { status, body, raw }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Body exactly as sent
    pub raw: String,
}
