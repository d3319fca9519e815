//! Integration tests for POST /api/contact: validation responses, dispatch
//! success, and dispatch failure.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, post_json};
use serde_json::json;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: valid submission dispatches and returns the success envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_submission_returns_200() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/contact",
        json!({
            "name": "Jane",
            "email": "jane@example.com",
            "message": "Hi",
            "subject": "Hello",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Message sent successfully.");
}

// ---------------------------------------------------------------------------
// Test: empty subject is accepted (defaulted server-side)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_subject_is_accepted() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/contact",
        json!({
            "name": "Jane",
            "email": "jane@example.com",
            "message": "Hi",
            "subject": "",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: validation failure returns 400 with per-field errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_submission_returns_400_with_field_errors() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/contact",
        json!({
            "name": "",
            "email": "bad",
            "message": "",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);

    let errors = body["errors"].as_object().expect("errors must be a map");
    assert_eq!(errors["name"], "Name is required.");
    assert_eq!(errors["email"], "Invalid email address.");
    assert_eq!(errors["message"], "Message is required.");
    assert!(!errors.contains_key("subject"));
}

// ---------------------------------------------------------------------------
// Test: missing body behaves like an empty submission
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_body_returns_400_with_required_errors() {
    let app = common::build_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    let errors = body["errors"].as_object().unwrap();
    assert!(errors.contains_key("name"));
    assert!(errors.contains_key("email"));
    assert!(errors.contains_key("message"));
}

// ---------------------------------------------------------------------------
// Test: malformed JSON behaves like an empty submission
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_returns_400_with_required_errors() {
    let app = common::build_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["errors"]["name"].is_string());
}

// ---------------------------------------------------------------------------
// Test: non-string field values are rejected with field errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_string_fields_return_400() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/contact",
        json!({
            "name": 42,
            "email": "jane@example.com",
            "message": "Hi",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["errors"]["name"], "Name must be text.");
}

// ---------------------------------------------------------------------------
// Test: dispatch failure after valid input returns the generic 500 envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dispatch_failure_returns_500_with_generic_error() {
    // SMTP mailer with no username configured: dispatch fails without any
    // network traffic.
    let app = common::build_failing_mail_app();
    let response = post_json(
        app,
        "/api/contact",
        json!({
            "name": "Jane",
            "email": "jane@example.com",
            "message": "Hi",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "Failed to send your message. Please try again later."
    );
    // No field detail and no transport internals leak through.
    assert!(body.get("errors").is_none());
}
