// src/domain/home_page/entity.rs
use crate::domain::content::{HeroSection, PublishState, Title};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, Utc};

/// The site's single home page record.
#[derive(Debug, Clone)]
pub struct HomePage {
    pub title: Title,
    pub hero: HeroSection,
    pub publish_state: PublishState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HomePage {
    pub const SINGLETON_ID: i64 = 1;

    /// Content installed on a fresh database.
    pub fn initial(now: DateTime<Utc>) -> DomainResult<Self> {
        Ok(Self {
            title: Title::new("Home Page")?,
            hero: HeroSection::new(
                Some("Need support?\nApply for a grant today.".into()),
                Some(
                    "UAF A&P offers funding to women and non-binary activists, their families and their organisations in times of crisis"
                        .into(),
                ),
                "Check Eligibility",
                "/eligibility",
            )?,
            publish_state: PublishState::Published,
            created_at: now,
            updated_at: now,
        })
    }
}
