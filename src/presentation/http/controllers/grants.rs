// src/presentation/http/controllers/grants.rs
use super::DeletedResponse;
use crate::application::{
    commands::grants::{
        CreateGrantTypeCommand, DeleteGrantTypeCommand, GrantCardInput, UpdateGrantTypeCommand,
    },
    dto::{GrantCardDto, GrantTypeDto, ListPage},
    queries::grants::{GetGrantTypeBySlugQuery, ListGrantTypesQuery},
};
use crate::domain::grant::Visibility;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GrantListParams {
    #[serde(default)]
    pub include_hidden: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GrantTypeRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(flatten)]
    pub card: GrantCardDto,
    pub grant_purpose: String,
    #[serde(default)]
    pub visibility: Visibility,
}

impl From<GrantCardDto> for GrantCardInput {
    fn from(dto: GrantCardDto) -> Self {
        Self {
            description: dto.description,
            grant_amount: dto.grant_amount,
            time_frame: dto.time_frame,
            availability: dto.availability,
            common_uses: dto.common_uses,
            badge_text: dto.badge_text,
            badge_color: dto.badge_color,
            background_color: dto.background_color,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/grants",
    params(GrantListParams),
    responses((status = 200, description = "Grant listings, most recently updated first.", body = ListPage<GrantTypeDto>)),
    tag = "Grants"
)]
pub async fn list_grant_types(
    Extension(state): Extension<HttpState>,
    Query(params): Query<GrantListParams>,
) -> HttpResult<Json<ListPage<GrantTypeDto>>> {
    state
        .services
        .grant_queries
        .list_grant_types(ListGrantTypesQuery {
            include_hidden: params.include_hidden,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/grants/by-slug/{slug}",
    params(("slug" = String, Path), GrantListParams),
    responses((status = 200, body = GrantTypeDto), (status = 404, body = ErrorResponse)),
    tag = "Grants"
)]
pub async fn get_grant_type_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<GrantListParams>,
) -> HttpResult<Json<GrantTypeDto>> {
    state
        .services
        .grant_queries
        .get_grant_type_by_slug(GetGrantTypeBySlugQuery {
            slug,
            include_hidden: params.include_hidden,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/grants/{id}",
    params(("id" = i64, Path)),
    responses((status = 200, body = GrantTypeDto), (status = 404, body = ErrorResponse)),
    tag = "Grants"
)]
pub async fn get_grant_type(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<GrantTypeDto>> {
    state
        .services
        .grant_queries
        .get_grant_type(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/grants",
    request_body = GrantTypeRequest,
    responses(
        (status = 200, body = GrantTypeDto),
        (status = 400, body = ErrorResponse),
        (status = 409, body = ErrorResponse),
        (status = 503, body = ErrorResponse)
    ),
    tag = "Grants"
)]
pub async fn create_grant_type(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<GrantTypeRequest>,
) -> HttpResult<Json<GrantTypeDto>> {
    let command = CreateGrantTypeCommand {
        title: payload.title,
        slug: payload.slug,
        card: payload.card.into(),
        grant_purpose: payload.grant_purpose,
        visibility: payload.visibility,
    };

    state
        .services
        .grant_commands
        .create_grant_type(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/grants/{id}",
    params(("id" = i64, Path)),
    request_body = GrantTypeRequest,
    responses(
        (status = 200, body = GrantTypeDto),
        (status = 404, body = ErrorResponse),
        (status = 409, body = ErrorResponse)
    ),
    tag = "Grants"
)]
pub async fn update_grant_type(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<GrantTypeRequest>,
) -> HttpResult<Json<GrantTypeDto>> {
    let command = UpdateGrantTypeCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        card: payload.card.into(),
        grant_purpose: payload.grant_purpose,
        visibility: payload.visibility,
    };

    state
        .services
        .grant_commands
        .update_grant_type(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/grants/{id}",
    params(("id" = i64, Path)),
    responses((status = 200, body = DeletedResponse), (status = 404, body = ErrorResponse)),
    tag = "Grants"
)]
pub async fn delete_grant_type(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<DeletedResponse>> {
    state
        .services
        .grant_commands
        .delete_grant_type(DeleteGrantTypeCommand { id })
        .await
        .into_http()?;

    Ok(Json(DeletedResponse::new()))
}
