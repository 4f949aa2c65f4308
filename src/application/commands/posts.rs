// src/application/commands/posts.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult, FieldError, FieldErrorKind},
        ports::ClockPort,
    },
    domain::{
        content::{PublishState, RecordId, Title},
        post::{BannerImage, NewPost, PostContent, PostReadRepository, PostWriteRepository},
        slug::{SlugAssignmentService, SlugRequest, SluggedCollection},
        tag::{TagId, TagRepository},
        user::{UserId, UserRepository},
    },
};

const COLLECTION: SluggedCollection = SluggedCollection::Post;

/// Editable post fields, shared by create and update.
pub struct PostFields {
    pub title: String,
    pub slug: Option<String>,
    pub banner: Option<String>,
    /// `None` installs an empty document.
    pub content: Option<serde_json::Value>,
    pub author_id: Option<i64>,
    pub tag_ids: Vec<i64>,
    pub publish_state: PublishState,
}

pub struct CreatePostCommand {
    pub fields: PostFields,
}

/// Replaces every editable field; `fields.slug: None` keeps the stored slug.
pub struct UpdatePostCommand {
    pub id: i64,
    pub fields: PostFields,
}

pub struct DeletePostCommand {
    pub id: i64,
}

struct ValidatedPost {
    title: Title,
    slug: Option<String>,
    banner: Option<BannerImage>,
    content: PostContent,
    author_id: Option<UserId>,
    tag_ids: Vec<TagId>,
    publish_state: PublishState,
}

pub struct PostCommandService {
    write_repo: Arc<dyn PostWriteRepository>,
    read_repo: Arc<dyn PostReadRepository>,
    user_repo: Arc<dyn UserRepository>,
    tag_repo: Arc<dyn TagRepository>,
    slugs: Arc<SlugAssignmentService>,
    clock: Arc<ClockPort>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        tag_repo: Arc<dyn TagRepository>,
        slugs: Arc<SlugAssignmentService>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            user_repo,
            tag_repo,
            slugs,
            clock,
        }
    }

    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let post = self.validate_fields(command.fields).await?;

        let slug = self
            .slugs
            .assign(
                SlugRequest::new(COLLECTION)
                    .with_slug(post.slug.as_deref())
                    .with_title(Some(post.title.as_str())),
            )
            .await?;

        let now = self.clock.now();
        let created = self
            .write_repo
            .insert(NewPost {
                title: post.title,
                slug,
                banner: post.banner,
                content: post.content,
                author_id: post.author_id,
                tag_ids: post.tag_ids,
                publish_state: post.publish_state,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(post_id = %created.id, slug = %created.slug, "post created");
        Ok(created.into())
    }

    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let id = RecordId::new(command.id)?;
        let mut existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let post = self.validate_fields(command.fields).await?;

        let slug = self
            .slugs
            .assign(
                SlugRequest::new(COLLECTION)
                    .with_slug(Some(post.slug.as_deref().unwrap_or(existing.slug.as_str())))
                    .with_title(Some(post.title.as_str()))
                    .excluding(id),
            )
            .await?;

        existing.title = post.title;
        existing.slug = slug;
        existing.banner = post.banner;
        existing.content = post.content;
        existing.author_id = post.author_id;
        existing.tag_ids = post.tag_ids;
        existing.publish_state = post.publish_state;

        let updated = self
            .write_repo
            .update(existing.into_update(self.clock.now()))
            .await?;

        tracing::info!(post_id = %updated.id, slug = %updated.slug, "post updated");
        Ok(updated.into())
    }

    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<()> {
        let id = RecordId::new(command.id)?;
        self.write_repo.delete(id).await?;
        tracing::info!(post_id = %id, "post deleted");
        Ok(())
    }

    async fn validate_fields(&self, fields: PostFields) -> ApplicationResult<ValidatedPost> {
        let title = Title::new(fields.title)?;
        let banner = fields
            .banner
            .filter(|b| !b.trim().is_empty())
            .map(BannerImage::new)
            .transpose()?;
        let content = fields
            .content
            .map(PostContent::new)
            .transpose()?
            .unwrap_or_default();

        let author_id = match fields.author_id {
            Some(raw) => Some(self.ensure_author_exists(raw).await?),
            None => None,
        };
        let tag_ids = self.ensure_tags_exist(&fields.tag_ids).await?;

        Ok(ValidatedPost {
            title,
            slug: fields.slug,
            banner,
            content,
            author_id,
            tag_ids,
            publish_state: fields.publish_state,
        })
    }

    async fn ensure_author_exists(&self, raw: i64) -> ApplicationResult<UserId> {
        let not_found = || {
            ApplicationError::Field(FieldError::new(
                "author_id",
                "author not found",
                FieldErrorKind::Invalid,
            ))
        };
        let id = UserId::new(raw).map_err(|_| not_found())?;
        match self.user_repo.find_by_id(id).await? {
            Some(_) => Ok(id),
            None => Err(not_found()),
        }
    }

    async fn ensure_tags_exist(&self, raw: &[i64]) -> ApplicationResult<Vec<TagId>> {
        let mut ids = Vec::with_capacity(raw.len());
        for &value in raw {
            let id = TagId::new(value).map_err(|_| {
                ApplicationError::field("tag_ids", format!("unknown tag ids: {value}"))
            })?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        if ids.is_empty() {
            return Ok(ids);
        }

        let existing = self.tag_repo.find_existing(&ids).await?;
        let missing: Vec<String> = ids
            .iter()
            .filter(|id| !existing.contains(id))
            .map(|id| id.0.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ApplicationError::field(
                "tag_ids",
                format!("unknown tag ids: {}", missing.join(", ")),
            ));
        }

        Ok(ids)
    }
}
