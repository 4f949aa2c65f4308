// src/presentation/http/controllers/posts.rs
use super::{DeletedResponse, ListParams};
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, PostFields, UpdatePostCommand},
    dto::{ListPage, PostDto},
    queries::posts::{GetPostBySlugQuery, ListPostsQuery},
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
pub struct PostRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// Image reference in the configured banner folder.
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub content: Option<serde_json::Value>,
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
    #[serde(default)]
    pub publish_state: PublishState,
}

impl From<PostRequest> for PostFields {
    fn from(req: PostRequest) -> Self {
        Self {
            title: req.title,
            slug: req.slug,
            banner: req.banner,
            content: req.content,
            author_id: req.author_id,
            tag_ids: req.tag_ids,
            publish_state: req.publish_state,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(ListParams),
    responses((status = 200, description = "Posts, most recently updated first.", body = ListPage<PostDto>)),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<ListPage<PostDto>>> {
    state
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            include_drafts: params.include_drafts,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/by-slug/{slug}",
    params(("slug" = String, Path), ListParams),
    responses((status = 200, body = PostDto), (status = 404, body = ErrorResponse)),
    tag = "Posts"
)]
pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery {
            slug,
            include_drafts: params.include_drafts,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path)),
    responses((status = 200, body = PostDto), (status = 404, body = ErrorResponse)),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = PostRequest,
    responses(
        (status = 200, body = PostDto),
        (status = 400, body = ErrorResponse),
        (status = 409, body = ErrorResponse),
        (status = 503, body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<PostRequest>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_commands
        .create_post(CreatePostCommand {
            fields: payload.into(),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path)),
    request_body = PostRequest,
    responses(
        (status = 200, body = PostDto),
        (status = 404, body = ErrorResponse),
        (status = 409, body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<PostRequest>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_commands
        .update_post(UpdatePostCommand {
            id,
            fields: payload.into(),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path)),
    responses((status = 200, body = DeletedResponse), (status = 404, body = ErrorResponse)),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<DeletedResponse>> {
    state
        .services
        .post_commands
        .delete_post(DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(DeletedResponse::new()))
}
