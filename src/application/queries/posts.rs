// src/application/queries/posts.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ListPage, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{content::RecordId, post::PostReadRepository, slug::Slug},
};

pub struct GetPostBySlugQuery {
    pub slug: String,
    pub include_drafts: bool,
}

pub struct ListPostsQuery {
    pub include_drafts: bool,
}

pub struct PostQueryService {
    read_repo: Arc<dyn PostReadRepository>,
}

impl PostQueryService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn get_post(&self, id: i64) -> ApplicationResult<PostDto> {
        let id = RecordId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }

    pub async fn get_post_by_slug(&self, query: GetPostBySlugQuery) -> ApplicationResult<PostDto> {
        let slug = Slug::new(query.slug)?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|post| query.include_drafts || post.publish_state.is_published())
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(post.into())
    }

    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<ListPage<PostDto>> {
        let posts = self.read_repo.list(query.include_drafts).await?;
        Ok(ListPage::new(posts.into_iter().map(Into::into).collect()))
    }
}
