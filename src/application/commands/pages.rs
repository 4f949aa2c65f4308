// src/application/commands/pages.rs
use std::sync::Arc;

use super::HeroInput;
use crate::{
    application::{
        dto::PageDto,
        error::{ApplicationError, ApplicationResult},
        ports::ClockPort,
    },
    domain::{
        content::{PublishState, RecordId, Title},
        page::{NewPage, PageReadRepository, PageWriteRepository},
        slug::{SlugAssignmentService, SlugRequest, SluggedCollection},
    },
};

const COLLECTION: SluggedCollection = SluggedCollection::Page;

pub struct CreatePageCommand {
    pub title: String,
    pub slug: Option<String>,
    pub hero: HeroInput,
    pub publish_state: PublishState,
}

/// Replaces every editable field. `slug: None` keeps the stored slug;
/// `Some("")` regenerates it from the title.
pub struct UpdatePageCommand {
    pub id: i64,
    pub title: String,
    pub slug: Option<String>,
    pub hero: HeroInput,
    pub publish_state: PublishState,
}

pub struct DeletePageCommand {
    pub id: i64,
}

pub struct PageCommandService {
    write_repo: Arc<dyn PageWriteRepository>,
    read_repo: Arc<dyn PageReadRepository>,
    slugs: Arc<SlugAssignmentService>,
    clock: Arc<ClockPort>,
}

impl PageCommandService {
    pub fn new(
        write_repo: Arc<dyn PageWriteRepository>,
        read_repo: Arc<dyn PageReadRepository>,
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

    pub async fn create_page(&self, command: CreatePageCommand) -> ApplicationResult<PageDto> {
        let title = Title::new(command.title)?;
        let hero = command.hero.into_section()?;

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
            .insert(NewPage {
                title,
                slug,
                hero,
                publish_state: command.publish_state,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(page_id = %created.id, slug = %created.slug, "page created");
        Ok(created.into())
    }

    pub async fn update_page(&self, command: UpdatePageCommand) -> ApplicationResult<PageDto> {
        let id = RecordId::new(command.id)?;
        let mut page = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        let title = Title::new(command.title)?;
        let hero = command.hero.into_section()?;

        let slug = self
            .slugs
            .assign(
                SlugRequest::new(COLLECTION)
                    .with_slug(Some(command.slug.as_deref().unwrap_or(page.slug.as_str())))
                    .with_title(Some(title.as_str()))
                    .excluding(id),
            )
            .await?;

        page.title = title;
        page.slug = slug;
        page.hero = hero;
        page.publish_state = command.publish_state;

        let updated = self
            .write_repo
            .update(page.into_update(self.clock.now()))
            .await?;

        tracing::info!(page_id = %updated.id, slug = %updated.slug, "page updated");
        Ok(updated.into())
    }

    pub async fn delete_page(&self, command: DeletePageCommand) -> ApplicationResult<()> {
        let id = RecordId::new(command.id)?;
        self.write_repo.delete(id).await?;
        tracing::info!(page_id = %id, "page deleted");
        Ok(())
    }
}
