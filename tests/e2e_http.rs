use axum::http::{Method, StatusCode};
use serde_json::json;
use std::sync::Arc;

mod support;

use support::{
    InMemoryStore, MISSING_SLUG, UNVERIFIABLE_SLUG, assert_error_body, conflict_message,
    grant_json, make_test_router, page_json, send_json,
};

#[tokio::test]
async fn health_reports_ok() {
    let store = Arc::new(InMemoryStore::new());
    let app = make_test_router(&store);

    let (status, body) = send_json(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let store = Arc::new(InMemoryStore::new());
    let app = make_test_router(&store);

    let (status, body) = send_json(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/slugs/preview"].is_object());
    assert!(body["paths"]["/api/v1/pages/{id}"].is_object());
}

/// ページ作成時にタイトルからスラグが付与される
#[tokio::test]
async fn create_page_assigns_slug() {
    let store = Arc::new(InMemoryStore::new());
    let app = make_test_router(&store);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/pages",
        Some(page_json("Hello, World!  Support", None)),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "body: {body}");
    assert_eq!(body["slug"], "hello-world-support");
    assert_eq!(body["cta_button_url"], "/apply");
    assert_eq!(body["publish_state"], "published");
}

#[tokio::test]
async fn duplicate_slug_is_conflict_on_slug_field() {
    let store = Arc::new(InMemoryStore::new());
    let app = make_test_router(&store);

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/v1/pages",
        Some(page_json("About Us", None)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/pages",
        Some(page_json("Whatever", Some("about-us"))),
    )
    .await;

    assert_error_body(
        status,
        &body,
        StatusCode::CONFLICT,
        Some("slug"),
        Some(&conflict_message("page")),
    );
}

#[tokio::test]
async fn symbol_only_title_is_bad_request() {
    let store = Arc::new(InMemoryStore::new());
    let app = make_test_router(&store);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/pages",
        Some(page_json("???", None)),
    )
    .await;

    assert_error_body(
        status,
        &body,
        StatusCode::BAD_REQUEST,
        Some("slug"),
        Some(MISSING_SLUG),
    );
}

#[tokio::test]
async fn unreachable_lookup_is_service_unavailable() {
    let store = Arc::new(InMemoryStore::new());
    let app = make_test_router(&store);
    store.fail_slug_lookups(true);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/grants",
        Some(grant_json("Rapid Response")),
    )
    .await;

    assert_error_body(
        status,
        &body,
        StatusCode::SERVICE_UNAVAILABLE,
        Some("slug"),
        Some(UNVERIFIABLE_SLUG),
    );
    assert_eq!(store.grant_count(), 0);
}

#[tokio::test]
async fn invalid_cta_url_is_field_error() {
    let store = Arc::new(InMemoryStore::new());
    let app = make_test_router(&store);

    let mut payload = page_json("Apply Now", None);
    payload["cta_button_url"] = json!("https://exa mple.org");
    let (status, body) = send_json(&app, Method::POST, "/api/v1/pages", Some(payload)).await;

    assert_error_body(
        status,
        &body,
        StatusCode::BAD_REQUEST,
        Some("cta_button_url"),
        Some("Please enter a valid URL"),
    );
}

#[tokio::test]
async fn drafts_are_hidden_unless_requested() {
    let store = Arc::new(InMemoryStore::new());
    let app = make_test_router(&store);

    let mut payload = page_json("Work In Progress", None);
    payload["publish_state"] = json!("draft");
    let (status, _) = send_json(&app, Method::POST, "/api/v1/pages", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(
        &app,
        Method::GET,
        "/api/v1/pages/by-slug/work-in-progress",
        None,
    )
    .await;
    assert_error_body(status, &body, StatusCode::NOT_FOUND, None, None);

    let (status, body) = send_json(
        &app,
        Method::GET,
        "/api/v1/pages/by-slug/work-in-progress?include_drafts=true",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Work In Progress");

    let (_, listed) = send_json(&app, Method::GET, "/api/v1/pages", None).await;
    assert_eq!(listed["total"], 0);
    let (_, listed) = send_json(&app, Method::GET, "/api/v1/pages?include_drafts=true", None).await;
    assert_eq!(listed["total"], 1);
}

#[tokio::test]
async fn update_without_slug_keeps_it() {
    let store = Arc::new(InMemoryStore::new());
    let app = make_test_router(&store);

    let (_, created) = send_json(
        &app,
        Method::POST,
        "/api/v1/posts",
        Some(json!({ "title": "Annual Report", "publish_state": "published" })),
    )
    .await;
    let id = created["id"].as_i64().expect("id");

    let (status, updated) = send_json(
        &app,
        Method::PUT,
        &format!("/api/v1/posts/{id}"),
        Some(json!({ "title": "Annual Report 2024", "publish_state": "published" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "body: {updated}");
    assert_eq!(updated["slug"], "annual-report");
    assert_eq!(updated["title"], "Annual Report 2024");
}

#[tokio::test]
async fn slug_preview_reports_availability() {
    let store = Arc::new(InMemoryStore::new());
    let app = make_test_router(&store);

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/v1/grants",
        Some(grant_json("Rapid Response")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/slugs/preview",
        Some(json!({ "collection": "grant", "title": "Rapid  Response!" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "rapid-response");
    assert_eq!(body["available"], false);

    let (_, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/slugs/preview",
        Some(json!({ "collection": "page", "title": "Rapid Response" })),
    )
    .await;
    assert_eq!(body["available"], true);
}

#[tokio::test]
async fn grant_cards_summary_before_and_after_grants() {
    let store = Arc::new(InMemoryStore::new());
    let app = make_test_router(&store);

    let (status, body) = send_json(&app, Method::GET, "/api/v1/home/grant-cards", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "No grants created yet.");

    send_json(
        &app,
        Method::POST,
        "/api/v1/grants",
        Some(grant_json("Rapid Response")),
    )
    .await;
    let (_, body) = send_json(&app, Method::GET, "/api/v1/home/grant-cards", None).await;
    assert_eq!(
        body["summary"],
        "VISIBLE Rapid Response - Up to $5,000 (Year-round)"
    );
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let store = Arc::new(InMemoryStore::new());
    let app = make_test_router(&store);

    let (_, created) = send_json(
        &app,
        Method::POST,
        "/api/v1/grants",
        Some(grant_json("Rapid Response")),
    )
    .await;
    let uri = format!("/api/v1/grants/{}", created["id"]);

    let (status, body) = send_json(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "deleted" }));

    let (status, body) = send_json(&app, Method::GET, &uri, None).await;
    assert_error_body(status, &body, StatusCode::NOT_FOUND, None, None);
}

#[tokio::test]
async fn unknown_page_is_not_found() {
    let store = Arc::new(InMemoryStore::new());
    let app = make_test_router(&store);

    let (status, body) = send_json(&app, Method::GET, "/api/v1/pages/9999", None).await;

    assert_error_body(
        status,
        &body,
        StatusCode::NOT_FOUND,
        None,
        Some("page not found"),
    );
}

#[tokio::test]
async fn users_and_tags_round_through_http() {
    let store = Arc::new(InMemoryStore::new());
    let app = make_test_router(&store);

    let (status, user) = send_json(
        &app,
        Method::POST,
        "/api/v1/users",
        Some(json!({ "name": "Amina", "email": "amina@example.org", "password": "correct-horse" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "body: {user}");
    assert!(user.get("password").is_none());

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/users",
        Some(json!({ "name": "Again", "email": "amina@example.org", "password": "correct-horse" })),
    )
    .await;
    assert_error_body(status, &body, StatusCode::CONFLICT, Some("email"), None);

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/v1/tags",
        Some(json!({ "name": "news" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, tags) = send_json(&app, Method::GET, "/api/v1/tags", None).await;
    assert_eq!(tags["items"][0]["name"], "news");
}
