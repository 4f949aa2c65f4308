// src/domain/grant/entity.rs
use super::value_objects::{BadgeColor, CardBackground, Visibility};
use crate::domain::content::{RecordId, RequiredText, Title};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

/// Summary shown on the grant card (home page and grants landing page).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantCard {
    pub description: RequiredText,
    pub grant_amount: RequiredText,
    pub time_frame: RequiredText,
    pub availability: RequiredText,
    pub common_uses: RequiredText,
    pub badge_text: RequiredText,
    pub badge_color: BadgeColor,
    pub background_color: CardBackground,
}

#[derive(Debug, Clone)]
pub struct GrantType {
    pub id: RecordId,
    pub title: Title,
    pub slug: Slug,
    pub card: GrantCard,
    pub grant_purpose: RequiredText,
    pub visibility: Visibility,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GrantType {
    /// One line of the home page quick view.
    pub fn quick_view_line(&self) -> String {
        let status = match self.visibility {
            Visibility::Visible => "VISIBLE",
            Visibility::Hidden => "HIDDEN",
        };
        format!(
            "{status} {} - {} ({})",
            self.title,
            self.card.grant_amount.as_str(),
            self.card.availability.as_str()
        )
    }

    pub fn into_update(self, updated_at: DateTime<Utc>) -> GrantTypeUpdate {
        GrantTypeUpdate {
            id: self.id,
            title: self.title,
            slug: self.slug,
            card: self.card,
            grant_purpose: self.grant_purpose,
            visibility: self.visibility,
            updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewGrantType {
    pub title: Title,
    pub slug: Slug,
    pub card: GrantCard,
    pub grant_purpose: RequiredText,
    pub visibility: Visibility,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct GrantTypeUpdate {
    pub id: RecordId,
    pub title: Title,
    pub slug: Slug,
    pub card: GrantCard,
    pub grant_purpose: RequiredText,
    pub visibility: Visibility,
    pub updated_at: DateTime<Utc>,
}
