// src/domain/grant/repository.rs
use crate::domain::content::RecordId;
use crate::domain::errors::DomainResult;
use crate::domain::grant::entity::{GrantType, GrantTypeUpdate, NewGrantType};
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait GrantTypeWriteRepository: Send + Sync {
    async fn insert(&self, grant: NewGrantType) -> DomainResult<GrantType>;
    async fn update(&self, update: GrantTypeUpdate) -> DomainResult<GrantType>;
    async fn delete(&self, id: RecordId) -> DomainResult<()>;
}

#[async_trait]
pub trait GrantTypeReadRepository: Send + Sync {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<GrantType>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<GrantType>>;
    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<GrantType>>;
}
