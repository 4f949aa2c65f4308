// src/presentation/http/controllers/pages.rs
use super::{DeletedResponse, ListParams};
use crate::application::{
    commands::pages::{CreatePageCommand, DeletePageCommand, UpdatePageCommand},
    dto::{HeroSectionDto, ListPage, PageDto},
    queries::pages::{GetPageBySlugQuery, ListPagesQuery},
};
use crate::domain::content::PublishState;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PageRequest {
    pub title: String,
    /// Leave out to keep the current slug on update; send `""` to regenerate it
    /// from the title.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(flatten)]
    pub hero: HeroSectionDto,
    #[serde(default)]
    pub publish_state: PublishState,
}

#[utoipa::path(
    get,
    path = "/api/v1/pages",
    params(ListParams),
    responses((status = 200, description = "Pages, most recently updated first.", body = ListPage<PageDto>)),
    tag = "Pages"
)]
pub async fn list_pages(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<ListPage<PageDto>>> {
    state
        .services
        .page_queries
        .list_pages(ListPagesQuery {
            include_drafts: params.include_drafts,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/pages/by-slug/{slug}",
    params(("slug" = String, Path, description = "Page slug"), ListParams),
    responses(
        (status = 200, body = PageDto),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn get_page_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<PageDto>> {
    state
        .services
        .page_queries
        .get_page_by_slug(GetPageBySlugQuery {
            slug,
            include_drafts: params.include_drafts,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/pages/{id}",
    params(("id" = i64, Path)),
    responses(
        (status = 200, body = PageDto),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn get_page(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PageDto>> {
    state
        .services
        .page_queries
        .get_page(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/pages",
    request_body = PageRequest,
    responses(
        (status = 200, body = PageDto),
        (status = 400, description = "Invalid field, e.g. no usable slug.", body = ErrorResponse),
        (status = 409, description = "Slug already used by another page.", body = ErrorResponse),
        (status = 503, description = "Slug uniqueness could not be checked.", body = ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn create_page(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<PageRequest>,
) -> HttpResult<Json<PageDto>> {
    let command = CreatePageCommand {
        title: payload.title,
        slug: payload.slug,
        hero: payload.hero.into(),
        publish_state: payload.publish_state,
    };

    state
        .services
        .page_commands
        .create_page(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/pages/{id}",
    params(("id" = i64, Path)),
    request_body = PageRequest,
    responses(
        (status = 200, body = PageDto),
        (status = 404, body = ErrorResponse),
        (status = 409, body = ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn update_page(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<PageRequest>,
) -> HttpResult<Json<PageDto>> {
    let command = UpdatePageCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        hero: payload.hero.into(),
        publish_state: payload.publish_state,
    };

    state
        .services
        .page_commands
        .update_page(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/pages/{id}",
    params(("id" = i64, Path)),
    responses(
        (status = 200, body = DeletedResponse),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn delete_page(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<DeletedResponse>> {
    state
        .services
        .page_commands
        .delete_page(DeletePageCommand { id })
        .await
        .into_http()?;

    Ok(Json(DeletedResponse::new()))
}
