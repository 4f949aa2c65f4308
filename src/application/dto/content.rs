use crate::domain::content::HeroSection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HeroSectionDto {
    #[serde(default)]
    pub hero_heading: Option<String>,
    #[serde(default)]
    pub hero_subheading: Option<String>,
    pub cta_button_text: String,
    pub cta_button_url: String,
}

impl From<HeroSection> for HeroSectionDto {
    fn from(hero: HeroSection) -> Self {
        Self {
            hero_heading: hero.heading,
            hero_subheading: hero.subheading,
            cta_button_text: hero.cta_button_text.into_inner(),
            cta_button_url: hero.cta_button_url.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> ListPage<T> {
    pub fn new(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlugPreviewDto {
    pub title: String,
    pub slug: String,
    pub available: bool,
}
