// src/infrastructure/repositories/postgres_tag.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::{Tag, TagId, TagName, TagRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    name: String,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: TagName::new(row.name)?,
        })
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn insert(&self, name: TagName) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TagRow>(
            "INSERT INTO tags (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Tag::try_from(row)
    }

    async fn list(&self) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>("SELECT id, name FROM tags ORDER BY name, id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn find_existing(&self, ids: &[TagId]) -> DomainResult<Vec<TagId>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let found = sqlx::query_scalar::<_, i64>("SELECT id FROM tags WHERE id = ANY($1)")
            .bind(&raw)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        found.into_iter().map(TagId::new).collect()
    }
}
