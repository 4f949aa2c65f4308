use super::HeroSectionDto;
use crate::domain::{content::PublishState, home_page::HomePage, page::Page};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(flatten)]
    pub hero: HeroSectionDto,
    pub publish_state: PublishState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Page> for PageDto {
    fn from(page: Page) -> Self {
        Self {
            id: page.id.into(),
            title: page.title.into_inner(),
            slug: page.slug.into_inner(),
            hero: page.hero.into(),
            publish_state: page.publish_state,
            created_at: page.created_at,
            updated_at: page.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomePageDto {
    pub title: String,
    #[serde(flatten)]
    pub hero: HeroSectionDto,
    pub publish_state: PublishState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<HomePage> for HomePageDto {
    fn from(home: HomePage) -> Self {
        Self {
            title: home.title.into_inner(),
            hero: home.hero.into(),
            publish_state: home.publish_state,
            created_at: home.created_at,
            updated_at: home.updated_at,
        }
    }
}
