// src/application/queries/users.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ListPage, TagDto, UserDto},
        error::ApplicationResult,
    },
    domain::{tag::TagRepository, user::UserRepository},
};

pub struct DirectoryQueryService {
    user_repo: Arc<dyn UserRepository>,
    tag_repo: Arc<dyn TagRepository>,
}

impl DirectoryQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, tag_repo: Arc<dyn TagRepository>) -> Self {
        Self {
            user_repo,
            tag_repo,
        }
    }

    pub async fn list_users(&self) -> ApplicationResult<ListPage<UserDto>> {
        let users = self.user_repo.list().await?;
        Ok(ListPage::new(users.into_iter().map(Into::into).collect()))
    }

    pub async fn list_tags(&self) -> ApplicationResult<ListPage<TagDto>> {
        let tags = self.tag_repo.list().await?;
        Ok(ListPage::new(tags.into_iter().map(Into::into).collect()))
    }
}
