// src/presentation/http/controllers/mod.rs
pub mod directory;
pub mod grants;
pub mod home;
pub mod pages;
pub mod posts;
pub mod slugs;

use crate::application::{commands::HeroInput, dto::HeroSectionDto};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListParams {
    #[serde(default)]
    pub include_drafts: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub status: String,
}

impl DeletedResponse {
    pub(crate) fn new() -> Self {
        Self {
            status: "deleted".into(),
        }
    }
}

impl From<HeroSectionDto> for HeroInput {
    fn from(dto: HeroSectionDto) -> Self {
        Self {
            heading: dto.hero_heading,
            subheading: dto.hero_subheading,
            cta_button_text: dto.cta_button_text,
            cta_button_url: dto.cta_button_url,
        }
    }
}
