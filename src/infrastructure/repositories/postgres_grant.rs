// src/infrastructure/repositories/postgres_grant.rs
use super::map_sqlx;
use crate::domain::content::{RecordId, RequiredText, Title};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::grant::{
    GrantCard, GrantType, GrantTypeReadRepository, GrantTypeUpdate, GrantTypeWriteRepository,
    NewGrantType,
};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const GRANT_COLUMNS: &str = "id, title, slug, description, grant_amount, time_frame, \
     availability, common_uses, badge_text, badge_color, background_color, grant_purpose, \
     visibility, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresGrantTypeWriteRepository {
    pool: PgPool,
}

impl PostgresGrantTypeWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresGrantTypeReadRepository {
    pool: PgPool,
}

impl PostgresGrantTypeReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GrantTypeRow {
    id: i64,
    title: String,
    slug: String,
    description: String,
    grant_amount: String,
    time_frame: String,
    availability: String,
    common_uses: String,
    badge_text: String,
    badge_color: String,
    background_color: String,
    grant_purpose: String,
    visibility: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<GrantTypeRow> for GrantType {
    type Error = DomainError;

    fn try_from(row: GrantTypeRow) -> Result<Self, Self::Error> {
        Ok(GrantType {
            id: RecordId::new(row.id)?,
            title: Title::new(row.title)?,
            slug: Slug::new(row.slug)?,
            card: GrantCard {
                description: RequiredText::new("description", row.description)?,
                grant_amount: RequiredText::new("grant_amount", row.grant_amount)?,
                time_frame: RequiredText::new("time_frame", row.time_frame)?,
                availability: RequiredText::new("availability", row.availability)?,
                common_uses: RequiredText::new("common_uses", row.common_uses)?,
                badge_text: RequiredText::new("badge_text", row.badge_text)?,
                badge_color: row.badge_color.parse()?,
                background_color: row.background_color.parse()?,
            },
            grant_purpose: RequiredText::new("grant_purpose", row.grant_purpose)?,
            visibility: row.visibility.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl GrantTypeWriteRepository for PostgresGrantTypeWriteRepository {
    async fn insert(&self, grant: NewGrantType) -> DomainResult<GrantType> {
        let NewGrantType {
            title,
            slug,
            card,
            grant_purpose,
            visibility,
            created_at,
            updated_at,
        } = grant;

        let sql = format!(
            "INSERT INTO grant_types (title, slug, description, grant_amount, time_frame, \
             availability, common_uses, badge_text, badge_color, background_color, grant_purpose, \
             visibility, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {GRANT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, GrantTypeRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(card.description.as_str())
            .bind(card.grant_amount.as_str())
            .bind(card.time_frame.as_str())
            .bind(card.availability.as_str())
            .bind(card.common_uses.as_str())
            .bind(card.badge_text.as_str())
            .bind(card.badge_color.as_str())
            .bind(card.background_color.as_str())
            .bind(grant_purpose.as_str())
            .bind(visibility.as_str())
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        GrantType::try_from(row)
    }

    async fn update(&self, update: GrantTypeUpdate) -> DomainResult<GrantType> {
        let GrantTypeUpdate {
            id,
            title,
            slug,
            card,
            grant_purpose,
            visibility,
            updated_at,
        } = update;

        let sql = format!(
            "UPDATE grant_types SET title = $2, slug = $3, description = $4, grant_amount = $5, \
             time_frame = $6, availability = $7, common_uses = $8, badge_text = $9, \
             badge_color = $10, background_color = $11, grant_purpose = $12, visibility = $13, \
             updated_at = $14
             WHERE id = $1
             RETURNING {GRANT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, GrantTypeRow>(&sql)
            .bind(i64::from(id))
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(card.description.as_str())
            .bind(card.grant_amount.as_str())
            .bind(card.time_frame.as_str())
            .bind(card.availability.as_str())
            .bind(card.common_uses.as_str())
            .bind(card.badge_text.as_str())
            .bind(card.badge_color.as_str())
            .bind(card.background_color.as_str())
            .bind(grant_purpose.as_str())
            .bind(visibility.as_str())
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("grant type not found".into()))?;

        GrantType::try_from(row)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM grant_types WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("grant type not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl GrantTypeReadRepository for PostgresGrantTypeReadRepository {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<GrantType>> {
        let sql = format!("SELECT {GRANT_COLUMNS} FROM grant_types WHERE id = $1");
        let row = sqlx::query_as::<_, GrantTypeRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(GrantType::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<GrantType>> {
        let sql = format!(
            "SELECT {GRANT_COLUMNS} FROM grant_types WHERE lower(btrim(slug)) = lower(btrim($1))"
        );
        let row = sqlx::query_as::<_, GrantTypeRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(GrantType::try_from).transpose()
    }

    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<GrantType>> {
        let filter = if include_hidden {
            ""
        } else {
            " WHERE visibility = 'visible'"
        };
        let sql = format!(
            "SELECT {GRANT_COLUMNS} FROM grant_types{filter} ORDER BY updated_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, GrantTypeRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(GrantType::try_from).collect()
    }
}
