// src/application/commands/grants.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::GrantTypeDto,
        error::{ApplicationError, ApplicationResult},
        ports::ClockPort,
    },
    domain::{
        content::{RecordId, RequiredText, Title},
        errors::DomainResult,
        grant::{
            BadgeColor, CardBackground, GrantCard, GrantTypeReadRepository,
            GrantTypeWriteRepository, NewGrantType, Visibility,
        },
        slug::{SlugAssignmentService, SlugRequest, SluggedCollection},
    },
};

const COLLECTION: SluggedCollection = SluggedCollection::GrantType;

/// Grant card fields as submitted.
#[derive(Debug, Clone, Default)]
pub struct GrantCardInput {
    pub description: String,
    pub grant_amount: String,
    pub time_frame: String,
    pub availability: String,
    pub common_uses: String,
    pub badge_text: String,
    pub badge_color: BadgeColor,
    pub background_color: CardBackground,
}

impl GrantCardInput {
    fn into_card(self) -> DomainResult<GrantCard> {
        Ok(GrantCard {
            description: RequiredText::new("description", self.description)?,
            grant_amount: RequiredText::new("grant_amount", self.grant_amount)?,
            time_frame: RequiredText::new("time_frame", self.time_frame)?,
            availability: RequiredText::new("availability", self.availability)?,
            common_uses: RequiredText::new("common_uses", self.common_uses)?,
            badge_text: RequiredText::new("badge_text", self.badge_text)?,
            badge_color: self.badge_color,
            background_color: self.background_color,
        })
    }
}

pub struct CreateGrantTypeCommand {
    pub title: String,
    pub slug: Option<String>,
    pub card: GrantCardInput,
    pub grant_purpose: String,
    pub visibility: Visibility,
}

/// Replaces every editable field; `slug: None` keeps the stored slug.
pub struct UpdateGrantTypeCommand {
    pub id: i64,
    pub title: String,
    pub slug: Option<String>,
    pub card: GrantCardInput,
    pub grant_purpose: String,
    pub visibility: Visibility,
}

pub struct DeleteGrantTypeCommand {
    pub id: i64,
}

pub struct GrantTypeCommandService {
    write_repo: Arc<dyn GrantTypeWriteRepository>,
    read_repo: Arc<dyn GrantTypeReadRepository>,
    slugs: Arc<SlugAssignmentService>,
    clock: Arc<ClockPort>,
}

impl GrantTypeCommandService {
    pub fn new(
        write_repo: Arc<dyn GrantTypeWriteRepository>,
        read_repo: Arc<dyn GrantTypeReadRepository>,
        slugs: Arc<SlugAssignmentService>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slugs,
            clock,
        }
    }

    pub async fn create_grant_type(
        &self,
        command: CreateGrantTypeCommand,
    ) -> ApplicationResult<GrantTypeDto> {
        let title = Title::new(command.title)?;
        let card = command.card.into_card()?;
        let grant_purpose = RequiredText::new("grant_purpose", command.grant_purpose)?;

        let slug = self
            .slugs
            .assign(
                SlugRequest::new(COLLECTION)
                    .with_slug(command.slug.as_deref())
                    .with_title(Some(title.as_str())),
            )
            .await?;

        let now = self.clock.now();
        let created = self
            .write_repo
            .insert(NewGrantType {
                title,
                slug,
                card,
                grant_purpose,
                visibility: command.visibility,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(grant_id = %created.id, slug = %created.slug, "grant type created");
        Ok(created.into())
    }

    pub async fn update_grant_type(
        &self,
        command: UpdateGrantTypeCommand,
    ) -> ApplicationResult<GrantTypeDto> {
        let id = RecordId::new(command.id)?;
        let mut grant = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("grant type not found"))?;

        let title = Title::new(command.title)?;
        let card = command.card.into_card()?;
        let grant_purpose = RequiredText::new("grant_purpose", command.grant_purpose)?;

        let slug = self
            .slugs
            .assign(
                SlugRequest::new(COLLECTION)
                    .with_slug(Some(command.slug.as_deref().unwrap_or(grant.slug.as_str())))
                    .with_title(Some(title.as_str()))
                    .excluding(id),
            )
            .await?;

        grant.title = title;
        grant.slug = slug;
        grant.card = card;
        grant.grant_purpose = grant_purpose;
        grant.visibility = command.visibility;

        let updated = self
            .write_repo
            .update(grant.into_update(self.clock.now()))
            .await?;

        tracing::info!(grant_id = %updated.id, slug = %updated.slug, "grant type updated");
        Ok(updated.into())
    }

    pub async fn delete_grant_type(&self, command: DeleteGrantTypeCommand) -> ApplicationResult<()> {
        let id = RecordId::new(command.id)?;
        self.write_repo.delete(id).await?;
        tracing::info!(grant_id = %id, "grant type deleted");
        Ok(())
    }
}
