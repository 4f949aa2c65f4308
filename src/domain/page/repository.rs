// src/domain/page/repository.rs
use crate::domain::content::RecordId;
use crate::domain::errors::DomainResult;
use crate::domain::page::entity::{NewPage, Page, PageUpdate};
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait PageWriteRepository: Send + Sync {
    async fn insert(&self, page: NewPage) -> DomainResult<Page>;
    async fn update(&self, update: PageUpdate) -> DomainResult<Page>;
    async fn delete(&self, id: RecordId) -> DomainResult<()>;
}

#[async_trait]
pub trait PageReadRepository: Send + Sync {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Page>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>>;
    /// Newest `updated_at` first.
    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Page>>;
}
