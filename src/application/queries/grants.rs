// src/application/queries/grants.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{GrantTypeDto, ListPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{content::RecordId, grant::{GrantTypeReadRepository, Visibility}, slug::Slug},
};

pub struct GetGrantTypeBySlugQuery {
    pub slug: String,
    pub include_hidden: bool,
}

pub struct ListGrantTypesQuery {
    pub include_hidden: bool,
}

pub struct GrantTypeQueryService {
    read_repo: Arc<dyn GrantTypeReadRepository>,
}

impl GrantTypeQueryService {
    pub fn new(read_repo: Arc<dyn GrantTypeReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn get_grant_type(&self, id: i64) -> ApplicationResult<GrantTypeDto> {
        let id = RecordId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("grant type not found"))
    }

    pub async fn get_grant_type_by_slug(
        &self,
        query: GetGrantTypeBySlugQuery,
    ) -> ApplicationResult<GrantTypeDto> {
        let slug = Slug::new(query.slug)?;
        let grant = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|grant| query.include_hidden || grant.visibility == Visibility::Visible)
            .ok_or_else(|| ApplicationError::not_found("grant type not found"))?;
        Ok(grant.into())
    }

    pub async fn list_grant_types(
        &self,
        query: ListGrantTypesQuery,
    ) -> ApplicationResult<ListPage<GrantTypeDto>> {
        let grants = self.read_repo.list(query.include_hidden).await?;
        Ok(ListPage::new(grants.into_iter().map(Into::into).collect()))
    }
}
