// src/application/commands/tags.rs
use std::sync::Arc;

use crate::{
    application::{dto::TagDto, error::ApplicationResult},
    domain::tag::{TagName, TagRepository},
};

pub struct CreateTagCommand {
    pub name: String,
}

pub struct TagCommandService {
    repo: Arc<dyn TagRepository>,
}

impl TagCommandService {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_tag(&self, command: CreateTagCommand) -> ApplicationResult<TagDto> {
        let name = TagName::new(command.name)?;
        let tag = self.repo.insert(name).await?;
        tracing::debug!(tag_id = tag.id.0, "tag created");
        Ok(tag.into())
    }
}
