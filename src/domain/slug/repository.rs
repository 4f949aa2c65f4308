// src/domain/slug/repository.rs
use super::{Slug, SluggedCollection, SlugOwner};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Read-only view over persisted slugs, scoped by collection.
#[async_trait]
pub trait SlugLookup: Send + Sync {
    /// Every record of `collection` whose slug equals `slug` after trimming and
    /// lower-casing.
    async fn find_by_slug(
        &self,
        collection: SluggedCollection,
        slug: &Slug,
    ) -> DomainResult<Vec<SlugOwner>>;
}
