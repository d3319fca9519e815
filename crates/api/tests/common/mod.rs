//! Shared helpers for integration tests.
//!
//! Builds the full application router with the same middleware stack as
//! production (`router::build_app_router`), backed by an in-memory profile
//! and a configurable mailer.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use tower::ServiceExt;

use portfolio_api::config::ServerConfig;
use portfolio_api::router::build_app_router;
use portfolio_api::state::AppState;
use portfolio_core::profile::default_profile;
use portfolio_mailer::{MailConfig, Mailer};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        debug: false,
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string(),
    }
}

/// Build the application with the console mailer (dispatch always succeeds).
pub fn build_test_app() -> Router {
    build_test_app_with_mailer(Mailer::from_config(&MailConfig::testing()))
}

/// Build the application with a mailer whose dispatch always fails: a
/// non-testing config with no username configured, so the SMTP variant
/// bails out before touching the network.
#[allow(dead_code)]
pub fn build_failing_mail_app() -> Router {
    let config = MailConfig {
        testing: false,
        ..MailConfig::testing()
    };
    build_test_app_with_mailer(Mailer::from_config(&config))
}

/// Build the full application router around the given mailer.
pub fn build_test_app_with_mailer(mailer: Mailer) -> Router {
    let config = test_config();
    let state = AppState {
        profile: Arc::new(default_profile()),
        mailer: Arc::new(mailer),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request to the app and return the raw response.
#[allow(dead_code)]
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a POST request with a JSON body and return the raw response.
#[allow(dead_code)]
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Collect a response body into a JSON value.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Collect a response body into a string.
#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    use http_body_util::BodyExt;
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be valid UTF-8")
}
