// src/presentation/http/controllers/directory.rs
use crate::application::{
    commands::{tags::CreateTagCommand, users::RegisterUserCommand},
    dto::{ListPage, TagDto, UserDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTagRequest {
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses((status = 200, body = ListPage<UserDto>)),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ListPage<UserDto>>> {
    state
        .services
        .directory_queries
        .list_users()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = RegisterUserRequest,
    responses(
        (status = 200, body = UserDto),
        (status = 400, body = ErrorResponse),
        (status = 409, description = "Email already registered.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn register_user(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterUserRequest>,
) -> HttpResult<Json<UserDto>> {
    let command = RegisterUserCommand {
        name: payload.name,
        email: payload.email,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/tags",
    responses((status = 200, body = ListPage<TagDto>)),
    tag = "Tags"
)]
pub async fn list_tags(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ListPage<TagDto>>> {
    state
        .services
        .directory_queries
        .list_tags()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/tags",
    request_body = CreateTagRequest,
    responses((status = 200, body = TagDto), (status = 400, body = ErrorResponse)),
    tag = "Tags"
)]
pub async fn create_tag(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateTagRequest>,
) -> HttpResult<Json<TagDto>> {
    state
        .services
        .tag_commands
        .create_tag(CreateTagCommand { name: payload.name })
        .await
        .into_http()
        .map(Json)
}
