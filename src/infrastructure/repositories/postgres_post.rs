// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::content::{PublishState, RecordId, Title};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    BannerImage, NewPost, Post, PostContent, PostReadRepository, PostUpdate, PostWriteRepository,
};
use crate::domain::slug::Slug;
use crate::domain::tag::TagId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgConnection, PgPool};
use std::collections::HashMap;

const POST_COLUMNS: &str =
    "id, title, slug, banner, content, author_id, publish_state, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    banner: Option<String>,
    content: Value,
    author_id: Option<i64>,
    publish_state: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct PostTagRow {
    post_id: i64,
    tag_id: i64,
}

impl PostRow {
    fn into_post(self, tag_ids: Vec<i64>) -> DomainResult<Post> {
        Ok(Post {
            id: RecordId::new(self.id)?,
            title: Title::new(self.title)?,
            slug: Slug::new(self.slug)?,
            banner: self.banner.map(BannerImage::new).transpose()?,
            content: PostContent::new(self.content)?,
            author_id: self.author_id.map(UserId::new).transpose()?,
            tag_ids: tag_ids
                .into_iter()
                .map(TagId::new)
                .collect::<DomainResult<_>>()?,
            publish_state: self.publish_state.parse::<PublishState>()?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

async fn replace_tags(conn: &mut PgConnection, post_id: i64, tag_ids: &[TagId]) -> DomainResult<()> {
    sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
        .bind(post_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    if tag_ids.is_empty() {
        return Ok(());
    }

    let raw: Vec<i64> = tag_ids.iter().copied().map(i64::from).collect();
    sqlx::query("INSERT INTO post_tags (post_id, tag_id) SELECT $1, unnest($2::BIGINT[])")
        .bind(post_id)
        .bind(&raw)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    Ok(())
}

/// Tag ids for each of `post_ids`, in ascending tag order.
async fn load_tags(pool: &PgPool, post_ids: &[i64]) -> DomainResult<HashMap<i64, Vec<i64>>> {
    let mut by_post: HashMap<i64, Vec<i64>> = HashMap::new();
    if post_ids.is_empty() {
        return Ok(by_post);
    }

    let rows = sqlx::query_as::<_, PostTagRow>(
        "SELECT post_id, tag_id FROM post_tags WHERE post_id = ANY($1) ORDER BY post_id, tag_id",
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    for row in rows {
        by_post.entry(row.post_id).or_default().push(row.tag_id);
    }
    Ok(by_post)
}

async fn hydrate(pool: &PgPool, rows: Vec<PostRow>) -> DomainResult<Vec<Post>> {
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let mut tags = load_tags(pool, &ids).await?;
    rows.into_iter()
        .map(|row| {
            let tag_ids = tags.remove(&row.id).unwrap_or_default();
            row.into_post(tag_ids)
        })
        .collect()
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            banner,
            content,
            author_id,
            tag_ids,
            publish_state,
            created_at,
            updated_at,
        } = post;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let sql = format!(
            "INSERT INTO posts (title, slug, banner, content, author_id, publish_state, \
             created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {POST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(banner.as_ref().map(BannerImage::as_str))
            .bind(content.as_value())
            .bind(author_id.map(i64::from))
            .bind(publish_state.as_str())
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        replace_tags(&mut tx, row.id, &tag_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        row.into_post(tag_ids.into_iter().map(i64::from).collect())
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            slug,
            banner,
            content,
            author_id,
            tag_ids,
            publish_state,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let sql = format!(
            "UPDATE posts SET title = $2, slug = $3, banner = $4, content = $5, author_id = $6, \
             publish_state = $7, updated_at = $8
             WHERE id = $1
             RETURNING {POST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(i64::from(id))
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(banner.as_ref().map(BannerImage::as_str))
            .bind(content.as_value())
            .bind(author_id.map(i64::from))
            .bind(publish_state.as_str())
            .bind(updated_at)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        replace_tags(&mut tx, row.id, &tag_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        row.into_post(tag_ids.into_iter().map(i64::from).collect())
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let posts = hydrate(&self.pool, row.into_iter().collect()).await?;
        Ok(posts.into_iter().next())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE lower(btrim(slug)) = lower(btrim($1))"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let posts = hydrate(&self.pool, row.into_iter().collect()).await?;
        Ok(posts.into_iter().next())
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Post>> {
        let filter = if include_drafts {
            ""
        } else {
            " WHERE publish_state = 'published'"
        };
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts{filter} ORDER BY updated_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        hydrate(&self.pool, rows).await
    }
}
