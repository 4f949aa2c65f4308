// src/application/commands/home_page.rs
use std::sync::Arc;

use super::HeroInput;
use crate::{
    application::{dto::HomePageDto, error::ApplicationResult, ports::ClockPort},
    domain::{
        content::{PublishState, Title},
        home_page::{HomePage, HomePageRepository},
    },
};

pub struct UpdateHomePageCommand {
    pub title: String,
    pub hero: HeroInput,
    pub publish_state: PublishState,
}

pub struct HomePageCommandService {
    repo: Arc<dyn HomePageRepository>,
    clock: Arc<ClockPort>,
}

impl HomePageCommandService {
    pub fn new(repo: Arc<dyn HomePageRepository>, clock: Arc<ClockPort>) -> Self {
        Self { repo, clock }
    }

    pub async fn update_home_page(
        &self,
        command: UpdateHomePageCommand,
    ) -> ApplicationResult<HomePageDto> {
        let title = Title::new(command.title)?;
        let hero = command.hero.into_section()?;
        let now = self.clock.now();
        let created_at = self
            .repo
            .get()
            .await?
            .map_or(now, |existing| existing.created_at);

        let saved = self
            .repo
            .save(HomePage {
                title,
                hero,
                publish_state: command.publish_state,
                created_at,
                updated_at: now,
            })
            .await?;

        tracing::info!("home page updated");
        Ok(saved.into())
    }

    /// Install the default home page when none exists yet.
    pub async fn seed_home_page(&self) -> ApplicationResult<bool> {
        let inserted = self
            .repo
            .insert_if_absent(HomePage::initial(self.clock.now())?)
            .await?;
        if inserted {
            tracing::info!("default home page created");
        }
        Ok(inserted)
    }
}
