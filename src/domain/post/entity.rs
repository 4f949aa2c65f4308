// src/domain/post/entity.rs
use super::value_objects::{BannerImage, PostContent};
use crate::domain::content::{PublishState, RecordId, Title};
use crate::domain::slug::Slug;
use crate::domain::tag::TagId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: RecordId,
    pub title: Title,
    pub slug: Slug,
    pub banner: Option<BannerImage>,
    pub content: PostContent,
    pub author_id: Option<UserId>,
    pub tag_ids: Vec<TagId>,
    pub publish_state: PublishState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: Title,
    pub slug: Slug,
    pub banner: Option<BannerImage>,
    pub content: PostContent,
    pub author_id: Option<UserId>,
    pub tag_ids: Vec<TagId>,
    pub publish_state: PublishState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: RecordId,
    pub title: Title,
    pub slug: Slug,
    pub banner: Option<BannerImage>,
    pub content: PostContent,
    pub author_id: Option<UserId>,
    pub tag_ids: Vec<TagId>,
    pub publish_state: PublishState,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn into_update(self, updated_at: DateTime<Utc>) -> PostUpdate {
        PostUpdate {
            id: self.id,
            title: self.title,
            slug: self.slug,
            banner: self.banner,
            content: self.content,
            author_id: self.author_id,
            tag_ids: self.tag_ids,
            publish_state: self.publish_state,
            updated_at,
        }
    }
}
