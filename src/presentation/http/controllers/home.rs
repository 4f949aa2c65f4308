// src/presentation/http/controllers/home.rs
use crate::application::{
    commands::home_page::UpdateHomePageCommand,
    dto::{GrantCardsOverviewDto, HeroSectionDto, HomePageDto},
};
use crate::domain::content::PublishState;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct HomePageRequest {
    pub title: String,
    #[serde(flatten)]
    pub hero: HeroSectionDto,
    #[serde(default)]
    pub publish_state: PublishState,
}

#[utoipa::path(
    get,
    path = "/api/v1/home",
    responses((status = 200, body = HomePageDto), (status = 404, body = ErrorResponse)),
    tag = "Home"
)]
pub async fn get_home_page(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<HomePageDto>> {
    state
        .services
        .home_page_queries
        .get_home_page()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/home",
    request_body = HomePageRequest,
    responses((status = 200, body = HomePageDto), (status = 400, body = ErrorResponse)),
    tag = "Home"
)]
pub async fn update_home_page(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<HomePageRequest>,
) -> HttpResult<Json<HomePageDto>> {
    let command = UpdateHomePageCommand {
        title: payload.title,
        hero: payload.hero.into(),
        publish_state: payload.publish_state,
    };

    state
        .services
        .home_page_commands
        .update_home_page(command)
        .await
        .into_http()
        .map(Json)
}

/// Read-only digest of every grant listing, hidden ones included.
#[utoipa::path(
    get,
    path = "/api/v1/home/grant-cards",
    responses((status = 200, body = GrantCardsOverviewDto)),
    tag = "Home"
)]
pub async fn grant_cards(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<GrantCardsOverviewDto>> {
    state
        .services
        .home_page_queries
        .grant_cards_overview()
        .await
        .into_http()
        .map(Json)
}
