// src/application/queries/home_page.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{GrantCardsOverviewDto, HomePageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{grant::GrantTypeReadRepository, home_page::HomePageRepository},
};

pub const NO_GRANTS_MESSAGE: &str = "No grants created yet.";

pub struct HomePageQueryService {
    repo: Arc<dyn HomePageRepository>,
    grants: Arc<dyn GrantTypeReadRepository>,
}

impl HomePageQueryService {
    pub fn new(repo: Arc<dyn HomePageRepository>, grants: Arc<dyn GrantTypeReadRepository>) -> Self {
        Self { repo, grants }
    }

    pub async fn get_home_page(&self) -> ApplicationResult<HomePageDto> {
        self.repo
            .get()
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("home page has not been created"))
    }

    /// One line per grant listing, hidden ones included, joined with ` || `.
    pub async fn grant_cards_overview(&self) -> ApplicationResult<GrantCardsOverviewDto> {
        let grants = self.grants.list(true).await?;
        if grants.is_empty() {
            return Ok(GrantCardsOverviewDto {
                summary: NO_GRANTS_MESSAGE.to_owned(),
                count: 0,
            });
        }

        let summary = grants
            .iter()
            .map(|grant| grant.quick_view_line())
            .collect::<Vec<_>>()
            .join(" || ");

        Ok(GrantCardsOverviewDto {
            summary,
            count: grants.len(),
        })
    }
}
