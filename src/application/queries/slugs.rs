// src/application/queries/slugs.rs
use std::sync::Arc;

use crate::{
    application::{dto::SlugPreviewDto, error::ApplicationResult},
    domain::{
        content::RecordId,
        slug::{SlugAssignmentService, SlugError, SluggedCollection},
    },
};

pub struct PreviewSlugQuery {
    pub collection: SluggedCollection,
    pub title: String,
    /// Record being edited, if any; its own slug does not count as taken.
    pub record_id: Option<i64>,
}

pub struct SlugQueryService {
    slugs: Arc<SlugAssignmentService>,
}

impl SlugQueryService {
    pub fn new(slugs: Arc<SlugAssignmentService>) -> Self {
        Self { slugs }
    }

    /// Slug the title would receive, and whether it is free right now.
    pub async fn preview_slug(&self, query: PreviewSlugQuery) -> ApplicationResult<SlugPreviewDto> {
        let slug = self.slugs.resolve(None, Some(&query.title))?;
        let exclude = query.record_id.map(RecordId::new).transpose()?;

        let available = match self.slugs.ensure_unique(&slug, query.collection, exclude).await {
            Ok(()) => true,
            Err(SlugError::Conflict(_)) => false,
            Err(other) => return Err(other.into()),
        };

        Ok(SlugPreviewDto {
            title: query.title,
            slug: slug.into_inner(),
            available,
        })
    }
}
