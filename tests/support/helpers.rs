// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryStore, PlainPasswordHasher};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use grant_cms::application::services::{ApplicationServices, Repositories};
use grant_cms::infrastructure::util::DefaultSlugGenerator;
use grant_cms::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn repositories(store: &Arc<InMemoryStore>) -> Repositories {
    Repositories {
        page_write: store.clone(),
        page_read: store.clone(),
        post_write: store.clone(),
        post_read: store.clone(),
        grant_write: store.clone(),
        grant_read: store.clone(),
        home_page: store.clone(),
        users: store.clone(),
        tags: store.clone(),
        slug_lookup: store.clone(),
    }
}

pub fn build_services(store: &Arc<InMemoryStore>) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        repositories(store),
        Arc::new(PlainPasswordHasher),
        Arc::new(FixedClock),
        Arc::new(DefaultSlugGenerator),
    ))
}

pub fn make_test_router(store: &Arc<InMemoryStore>) -> axum::Router {
    let state = HttpState {
        services: build_services(store),
    };
    build_router(state, &["http://localhost:3000".to_string()])
}

/// Send one request through the router and decode the JSON body.
pub async fn send_json(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let req = builder.body(body).expect("request");

    let resp = app.clone().oneshot(req).await.expect("response");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

/// Assert an `ErrorResponse` body: status, `error` reason, and optionally the
/// field and exact message.
pub fn assert_error_body(
    status: StatusCode,
    json: &Value,
    expected_status: StatusCode,
    expected_field: Option<&str>,
    expected_message: Option<&str>,
) {
    assert_eq!(status, expected_status, "body: {json}");
    assert_eq!(
        json["error"].as_str(),
        expected_status.canonical_reason(),
        "body: {json}"
    );
    assert_eq!(json["field"].as_str(), expected_field, "body: {json}");
    match expected_message {
        Some(msg) => assert_eq!(json["message"].as_str(), Some(msg)),
        None => assert!(!json["message"].as_str().unwrap_or("").is_empty()),
    }
}
