// src/application/commands/mod.rs
pub mod grants;
pub mod home_page;
pub mod pages;
pub mod posts;
pub mod tags;
pub mod users;

use crate::domain::{content::HeroSection, errors::DomainResult};

/// Raw hero-section fields as submitted by an editor.
#[derive(Debug, Clone, Default)]
pub struct HeroInput {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub cta_button_text: String,
    pub cta_button_url: String,
}

impl HeroInput {
    pub fn into_section(self) -> DomainResult<HeroSection> {
        HeroSection::new(
            self.heading,
            self.subheading,
            self.cta_button_text,
            self.cta_button_url,
        )
    }
}
