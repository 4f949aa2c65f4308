// src/domain/slug/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::content::RecordId;
use crate::domain::slug::{Slug, SlugError, SlugLookup, SluggedCollection};

/// Incoming slug-related field values for a record about to be written.
#[derive(Debug, Clone, Copy)]
pub struct SlugRequest<'a> {
    pub collection: SluggedCollection,
    pub input_slug: Option<&'a str>,
    pub title: Option<&'a str>,
    /// The record being updated; `None` on create.
    pub exclude_id: Option<RecordId>,
}

impl<'a> SlugRequest<'a> {
    pub const fn new(collection: SluggedCollection) -> Self {
        Self {
            collection,
            input_slug: None,
            title: None,
            exclude_id: None,
        }
    }

    pub const fn with_slug(mut self, slug: Option<&'a str>) -> Self {
        self.input_slug = slug;
        self
    }

    pub const fn with_title(mut self, title: Option<&'a str>) -> Self {
        self.title = title;
        self
    }

    pub const fn excluding(mut self, id: RecordId) -> Self {
        self.exclude_id = Some(id);
        self
    }
}

/// Domain service producing the final, collection-unique slug of a record.
///
/// One instance serves every slugged collection; the collection travels with
/// each request.
pub struct SlugAssignmentService {
    lookup: Arc<dyn SlugLookup>,
    generator: Arc<dyn SlugGenerator>,
}

impl SlugAssignmentService {
    pub fn new(lookup: Arc<dyn SlugLookup>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { lookup, generator }
    }

    /// Candidate slug for `title`. May be empty.
    pub fn derive(&self, title: &str) -> String {
        self.generator.slugify(title)
    }

    /// Picks the explicit slug when one was typed, otherwise derives one from
    /// the title.
    pub fn resolve(&self, input_slug: Option<&str>, title: Option<&str>) -> Result<Slug, SlugError> {
        if let Some(explicit) = input_slug.map(str::trim).filter(|s| !s.is_empty()) {
            return Slug::new(explicit).map_err(|_| SlugError::Missing);
        }

        let derived = title.map(|t| self.derive(t)).unwrap_or_default();
        Slug::new(derived).map_err(|_| SlugError::Missing)
    }

    pub async fn ensure_unique(
        &self,
        slug: &Slug,
        collection: SluggedCollection,
        exclude_id: Option<RecordId>,
    ) -> Result<(), SlugError> {
        let owners = self
            .lookup
            .find_by_slug(collection, slug)
            .await
            .map_err(|err| {
                tracing::warn!(
                    collection = collection.name(),
                    slug = slug.as_str(),
                    error = %err,
                    "slug uniqueness lookup failed"
                );
                SlugError::Unverifiable
            })?;

        let taken = owners
            .iter()
            .any(|owner| Some(owner.id) != exclude_id && owner.slug.matches(slug));

        if taken {
            tracing::debug!(
                collection = collection.name(),
                slug = slug.as_str(),
                "slug already taken"
            );
            return Err(SlugError::Conflict(collection));
        }

        Ok(())
    }

    /// Resolve then check uniqueness. The storage index still has the final
    /// word; callers translate its rejection into [`SlugError::Conflict`].
    pub async fn assign(&self, request: SlugRequest<'_>) -> Result<Slug, SlugError> {
        let slug = self.resolve(request.input_slug, request.title)?;
        self.ensure_unique(&slug, request.collection, request.exclude_id)
            .await?;
        Ok(slug)
    }
}
