// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{directory, grants, home, pages, posts, slugs},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi::serve_openapi))
        .route("/api/v1/slugs/preview", post(slugs::preview_slug))
        .route(
            "/api/v1/pages",
            get(pages::list_pages).post(pages::create_page),
        )
        .route("/api/v1/pages/by-slug/{slug}", get(pages::get_page_by_slug))
        .route(
            "/api/v1/pages/{id}",
            get(pages::get_page)
                .put(pages::update_page)
                .delete(pages::delete_page),
        )
        .route(
            "/api/v1/posts",
            get(posts::list_posts).post(posts::create_post),
        )
        .route("/api/v1/posts/by-slug/{slug}", get(posts::get_post_by_slug))
        .route(
            "/api/v1/posts/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route(
            "/api/v1/grants",
            get(grants::list_grant_types).post(grants::create_grant_type),
        )
        .route(
            "/api/v1/grants/by-slug/{slug}",
            get(grants::get_grant_type_by_slug),
        )
        .route(
            "/api/v1/grants/{id}",
            get(grants::get_grant_type)
                .put(grants::update_grant_type)
                .delete(grants::delete_grant_type),
        )
        .route(
            "/api/v1/home",
            get(home::get_home_page).put(home::update_home_page),
        )
        .route("/api/v1/home/grant-cards", get(home::grant_cards))
        .route(
            "/api/v1/users",
            get(directory::list_users).post(directory::register_user),
        )
        .route(
            "/api/v1/tags",
            get(directory::list_tags).post(directory::create_tag),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(origin = %origin, error = %err, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
