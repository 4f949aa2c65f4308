// src/presentation/http/controllers/slugs.rs
use crate::application::{dto::SlugPreviewDto, queries::slugs::PreviewSlugQuery};
use crate::domain::slug::SluggedCollection;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CollectionName {
    Page,
    Post,
    Grant,
}

impl From<CollectionName> for SluggedCollection {
    fn from(name: CollectionName) -> Self {
        match name {
            CollectionName::Page => Self::Page,
            CollectionName::Post => Self::Post,
            CollectionName::Grant => Self::GrantType,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SlugPreviewRequest {
    pub collection: CollectionName,
    pub title: String,
    /// Id of the record being edited, so its own slug is not reported as taken.
    #[serde(default)]
    pub record_id: Option<i64>,
}

#[utoipa::path(
    post,
    path = "/api/v1/slugs/preview",
    request_body = SlugPreviewRequest,
    responses(
        (status = 200, description = "Slug the title would receive.", body = SlugPreviewDto),
        (status = 400, description = "The title has no usable characters.", body = ErrorResponse),
        (status = 503, body = ErrorResponse)
    ),
    tag = "Slugs"
)]
pub async fn preview_slug(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SlugPreviewRequest>,
) -> HttpResult<Json<SlugPreviewDto>> {
    let query = PreviewSlugQuery {
        collection: payload.collection.into(),
        title: payload.title,
        record_id: payload.record_id,
    };

    state
        .services
        .slug_queries
        .preview_slug(query)
        .await
        .into_http()
        .map(Json)
}
