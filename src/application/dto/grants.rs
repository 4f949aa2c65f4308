use crate::domain::grant::{BadgeColor, CardBackground, GrantCard, GrantType, Visibility};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GrantCardDto {
    pub description: String,
    pub grant_amount: String,
    pub time_frame: String,
    pub availability: String,
    pub common_uses: String,
    pub badge_text: String,
    #[serde(default)]
    pub badge_color: BadgeColor,
    #[serde(default)]
    pub background_color: CardBackground,
}

impl From<GrantCard> for GrantCardDto {
    fn from(card: GrantCard) -> Self {
        Self {
            description: card.description.into_inner(),
            grant_amount: card.grant_amount.into_inner(),
            time_frame: card.time_frame.into_inner(),
            availability: card.availability.into_inner(),
            common_uses: card.common_uses.into_inner(),
            badge_text: card.badge_text.into_inner(),
            badge_color: card.badge_color,
            background_color: card.background_color,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GrantTypeDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(flatten)]
    pub card: GrantCardDto,
    pub grant_purpose: String,
    pub visibility: Visibility,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<GrantType> for GrantTypeDto {
    fn from(grant: GrantType) -> Self {
        Self {
            id: grant.id.into(),
            title: grant.title.into_inner(),
            slug: grant.slug.into_inner(),
            card: grant.card.into(),
            grant_purpose: grant.grant_purpose.into_inner(),
            visibility: grant.visibility,
            created_at: grant.created_at,
            updated_at: grant.updated_at,
        }
    }
}

/// Read-only digest of every grant listing, shown on the home page editor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GrantCardsOverviewDto {
    pub summary: String,
    pub count: usize,
}
