// src/domain/post/repository.rs
use crate::domain::content::RecordId;
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: RecordId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>>;
    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Post>>;
}
