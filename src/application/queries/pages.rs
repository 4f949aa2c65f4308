// src/application/queries/pages.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ListPage, PageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{content::RecordId, page::PageReadRepository, slug::Slug},
};

pub struct GetPageBySlugQuery {
    pub slug: String,
    pub include_drafts: bool,
}

pub struct ListPagesQuery {
    pub include_drafts: bool,
}

pub struct PageQueryService {
    read_repo: Arc<dyn PageReadRepository>,
}

impl PageQueryService {
    pub fn new(read_repo: Arc<dyn PageReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn get_page(&self, id: i64) -> ApplicationResult<PageDto> {
        let id = RecordId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("page not found"))
    }

    pub async fn get_page_by_slug(&self, query: GetPageBySlugQuery) -> ApplicationResult<PageDto> {
        let slug = Slug::new(query.slug)?;
        let page = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|page| query.include_drafts || page.publish_state.is_published())
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;
        Ok(page.into())
    }

    pub async fn list_pages(&self, query: ListPagesQuery) -> ApplicationResult<ListPage<PageDto>> {
        let pages = self.read_repo.list(query.include_drafts).await?;
        Ok(ListPage::new(pages.into_iter().map(Into::into).collect()))
    }
}
