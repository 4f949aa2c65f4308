use crate::domain::{content::PublishState, post::Post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub banner: Option<String>,
    #[schema(value_type = Object)]
    pub content: serde_json::Value,
    #[serde(default)]
    pub author_id: Option<i64>,
    pub tag_ids: Vec<i64>,
    pub publish_state: PublishState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            banner: post.banner.map(|b| b.into_inner()),
            content: post.content.into_inner(),
            author_id: post.author_id.map(Into::into),
            tag_ids: post.tag_ids.into_iter().map(Into::into).collect(),
            publish_state: post.publish_state,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
