// src/infrastructure/repositories/postgres_page.rs
use super::map_sqlx;
use crate::domain::content::{HeroSection, PublishState, RecordId, Title};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::{NewPage, Page, PageReadRepository, PageUpdate, PageWriteRepository};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const PAGE_COLUMNS: &str = "id, title, slug, hero_heading, hero_subheading, cta_button_text, \
     cta_button_url, publish_state, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPageWriteRepository {
    pool: PgPool,
}

impl PostgresPageWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPageReadRepository {
    pool: PgPool,
}

impl PostgresPageReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PageRow {
    id: i64,
    title: String,
    slug: String,
    hero_heading: Option<String>,
    hero_subheading: Option<String>,
    cta_button_text: String,
    cta_button_url: String,
    publish_state: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PageRow> for Page {
    type Error = DomainError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        Ok(Page {
            id: RecordId::new(row.id)?,
            title: Title::new(row.title)?,
            slug: Slug::new(row.slug)?,
            hero: HeroSection::new(
                row.hero_heading,
                row.hero_subheading,
                row.cta_button_text,
                row.cta_button_url,
            )?,
            publish_state: row.publish_state.parse::<PublishState>()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PageWriteRepository for PostgresPageWriteRepository {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let NewPage {
            title,
            slug,
            hero,
            publish_state,
            created_at,
            updated_at,
        } = page;

        let sql = format!(
            "INSERT INTO pages (title, slug, hero_heading, hero_subheading, cta_button_text, \
             cta_button_url, publish_state, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {PAGE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PageRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(hero.heading.as_deref())
            .bind(hero.subheading.as_deref())
            .bind(hero.cta_button_text.as_str())
            .bind(hero.cta_button_url.as_str())
            .bind(publish_state.as_str())
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Page::try_from(row)
    }

    async fn update(&self, update: PageUpdate) -> DomainResult<Page> {
        let PageUpdate {
            id,
            title,
            slug,
            hero,
            publish_state,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE pages SET title = ");
        builder.push_bind(title.as_str());
        builder.push(", slug = ");
        builder.push_bind(slug.as_str());
        builder.push(", hero_heading = ");
        builder.push_bind(hero.heading.as_deref());
        builder.push(", hero_subheading = ");
        builder.push_bind(hero.subheading.as_deref());
        builder.push(", cta_button_text = ");
        builder.push_bind(hero.cta_button_text.as_str());
        builder.push(", cta_button_url = ");
        builder.push_bind(hero.cta_button_url.as_str());
        builder.push(", publish_state = ");
        builder.push_bind(publish_state.as_str());
        builder.push(", updated_at = ");
        builder.push_bind(updated_at);
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(PAGE_COLUMNS);

        let row = builder
            .build_query_as::<PageRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("page not found".into()))?;

        Page::try_from(row)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM pages WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("page not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PageReadRepository for PostgresPageReadRepository {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Page>> {
        let sql = format!("SELECT {PAGE_COLUMNS} FROM pages WHERE id = $1");
        let row = sqlx::query_as::<_, PageRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>> {
        let sql = format!(
            "SELECT {PAGE_COLUMNS} FROM pages WHERE lower(btrim(slug)) = lower(btrim($1))"
        );
        let row = sqlx::query_as::<_, PageRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Page>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(PAGE_COLUMNS);
        builder.push(" FROM pages");
        if !include_drafts {
            builder.push(" WHERE publish_state = 'published'");
        }
        builder.push(" ORDER BY updated_at DESC, id DESC");

        let rows = builder
            .build_query_as::<PageRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Page::try_from).collect()
    }
}
