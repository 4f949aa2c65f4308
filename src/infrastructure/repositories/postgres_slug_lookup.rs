// src/infrastructure/repositories/postgres_slug_lookup.rs
use super::map_sqlx;
use crate::domain::content::RecordId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugLookup, SlugOwner, SluggedCollection};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

/// Slug lookups for every slugged table, matched the same way the unique
/// indexes compare (`lower(btrim(slug))`).
#[derive(Clone)]
pub struct PostgresSlugLookup {
    pool: PgPool,
}

impl PostgresSlugLookup {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    const fn query(collection: SluggedCollection) -> &'static str {
        match collection {
            SluggedCollection::Page => {
                "SELECT id, slug FROM pages WHERE lower(btrim(slug)) = lower(btrim($1))"
            }
            SluggedCollection::Post => {
                "SELECT id, slug FROM posts WHERE lower(btrim(slug)) = lower(btrim($1))"
            }
            SluggedCollection::GrantType => {
                "SELECT id, slug FROM grant_types WHERE lower(btrim(slug)) = lower(btrim($1))"
            }
        }
    }
}

#[derive(Debug, FromRow)]
struct SlugRow {
    id: i64,
    slug: String,
}

#[async_trait]
impl SlugLookup for PostgresSlugLookup {
    #[tracing::instrument(skip(self), fields(collection = collection.name(), slug = slug.as_str()))]
    async fn find_by_slug(
        &self,
        collection: SluggedCollection,
        slug: &Slug,
    ) -> DomainResult<Vec<SlugOwner>> {
        let rows = sqlx::query_as::<_, SlugRow>(Self::query(collection))
            .bind(slug.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(SlugOwner {
                    id: RecordId::new(row.id)?,
                    slug: Slug::new(row.slug)?,
                })
            })
            .collect()
    }
}
