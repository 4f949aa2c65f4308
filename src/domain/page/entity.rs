// src/domain/page/entity.rs
use crate::domain::content::{HeroSection, PublishState, RecordId, Title};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Page {
    pub id: RecordId,
    pub title: Title,
    pub slug: Slug,
    pub hero: HeroSection,
    pub publish_state: PublishState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPage {
    pub title: Title,
    pub slug: Slug,
    pub hero: HeroSection,
    pub publish_state: PublishState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of a page's editable fields.
#[derive(Debug, Clone)]
pub struct PageUpdate {
    pub id: RecordId,
    pub title: Title,
    pub slug: Slug,
    pub hero: HeroSection,
    pub publish_state: PublishState,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    pub fn into_update(self, updated_at: DateTime<Utc>) -> PageUpdate {
        PageUpdate {
            id: self.id,
            title: self.title,
            slug: self.slug,
            hero: self.hero,
            publish_state: self.publish_state,
            updated_at,
        }
    }
}
