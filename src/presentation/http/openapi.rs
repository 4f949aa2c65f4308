// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        crate::presentation::http::controllers::slugs::preview_slug,
        crate::presentation::http::controllers::pages::list_pages,
        crate::presentation::http::controllers::pages::get_page_by_slug,
        crate::presentation::http::controllers::pages::get_page,
        crate::presentation::http::controllers::pages::create_page,
        crate::presentation::http::controllers::pages::update_page,
        crate::presentation::http::controllers::pages::delete_page,
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::get_post_by_slug,
        crate::presentation::http::controllers::posts::get_post,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::delete_post,
        crate::presentation::http::controllers::grants::list_grant_types,
        crate::presentation::http::controllers::grants::get_grant_type_by_slug,
        crate::presentation::http::controllers::grants::get_grant_type,
        crate::presentation::http::controllers::grants::create_grant_type,
        crate::presentation::http::controllers::grants::update_grant_type,
        crate::presentation::http::controllers::grants::delete_grant_type,
        crate::presentation::http::controllers::home::get_home_page,
        crate::presentation::http::controllers::home::update_home_page,
        crate::presentation::http::controllers::home::grant_cards,
        crate::presentation::http::controllers::directory::list_users,
        crate::presentation::http::controllers::directory::register_user,
        crate::presentation::http::controllers::directory::list_tags,
        crate::presentation::http::controllers::directory::create_tag
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::DeletedResponse,
            crate::presentation::http::controllers::slugs::CollectionName,
            crate::presentation::http::controllers::slugs::SlugPreviewRequest,
            crate::presentation::http::controllers::pages::PageRequest,
            crate::presentation::http::controllers::posts::PostRequest,
            crate::presentation::http::controllers::grants::GrantTypeRequest,
            crate::presentation::http::controllers::home::HomePageRequest,
            crate::presentation::http::controllers::directory::RegisterUserRequest,
            crate::presentation::http::controllers::directory::CreateTagRequest,
            crate::application::dto::SlugPreviewDto,
            crate::application::dto::HeroSectionDto,
            crate::application::dto::PageDto,
            crate::application::dto::PostDto,
            crate::application::dto::GrantCardDto,
            crate::application::dto::GrantTypeDto,
            crate::application::dto::HomePageDto,
            crate::application::dto::GrantCardsOverviewDto,
            crate::application::dto::UserDto,
            crate::application::dto::TagDto,
            crate::domain::content::PublishState,
            crate::domain::grant::BadgeColor,
            crate::domain::grant::CardBackground,
            crate::domain::grant::Visibility
        )
    ),
    tags(
        (name = "Slugs", description = "Slug previews"),
        (name = "Pages", description = "Page management"),
        (name = "Posts", description = "Blog post management"),
        (name = "Grants", description = "Grant listing management"),
        (name = "Home", description = "Home page singleton"),
        (name = "Users", description = "User accounts"),
        (name = "Tags", description = "Post tags"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Grant CMS API",
        description = "Headless content service for grant listings, pages and posts",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}
