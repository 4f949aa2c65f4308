// src/infrastructure/repositories/postgres_home_page.rs
use super::map_sqlx;
use crate::domain::content::{HeroSection, PublishState, Title};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::home_page::{HomePage, HomePageRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const HOME_COLUMNS: &str = "title, hero_heading, hero_subheading, cta_button_text, \
     cta_button_url, publish_state, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresHomePageRepository {
    pool: PgPool,
}

impl PostgresHomePageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct HomePageRow {
    title: String,
    hero_heading: Option<String>,
    hero_subheading: Option<String>,
    cta_button_text: String,
    cta_button_url: String,
    publish_state: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<HomePageRow> for HomePage {
    type Error = DomainError;

    fn try_from(row: HomePageRow) -> Result<Self, Self::Error> {
        Ok(HomePage {
            title: Title::new(row.title)?,
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
impl HomePageRepository for PostgresHomePageRepository {
    async fn get(&self) -> DomainResult<Option<HomePage>> {
        let sql = format!("SELECT {HOME_COLUMNS} FROM home_page WHERE id = $1");
        let row = sqlx::query_as::<_, HomePageRow>(&sql)
            .bind(HomePage::SINGLETON_ID)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(HomePage::try_from).transpose()
    }

    async fn save(&self, home: HomePage) -> DomainResult<HomePage> {
        let sql = format!(
            "INSERT INTO home_page (id, {HOME_COLUMNS})
             VALUES ($1::SMALLINT, $2, $3, $4, $5, $6, $7, $8, $9)
             ON CONFLICT (id) DO UPDATE SET
                 title = EXCLUDED.title,
                 hero_heading = EXCLUDED.hero_heading,
                 hero_subheading = EXCLUDED.hero_subheading,
                 cta_button_text = EXCLUDED.cta_button_text,
                 cta_button_url = EXCLUDED.cta_button_url,
                 publish_state = EXCLUDED.publish_state,
                 updated_at = EXCLUDED.updated_at
             RETURNING {HOME_COLUMNS}"
        );
        let row = sqlx::query_as::<_, HomePageRow>(&sql)
            .bind(HomePage::SINGLETON_ID)
            .bind(home.title.as_str())
            .bind(home.hero.heading.as_deref())
            .bind(home.hero.subheading.as_deref())
            .bind(home.hero.cta_button_text.as_str())
            .bind(home.hero.cta_button_url.as_str())
            .bind(home.publish_state.as_str())
            .bind(home.created_at)
            .bind(home.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        HomePage::try_from(row)
    }

    async fn insert_if_absent(&self, home: HomePage) -> DomainResult<bool> {
        let sql = format!(
            "INSERT INTO home_page (id, {HOME_COLUMNS})
             VALUES ($1::SMALLINT, $2, $3, $4, $5, $6, $7, $8, $9)
             ON CONFLICT (id) DO NOTHING"
        );
        let result = sqlx::query(&sql)
            .bind(HomePage::SINGLETON_ID)
            .bind(home.title.as_str())
            .bind(home.hero.heading.as_deref())
            .bind(home.hero.subheading.as_deref())
            .bind(home.hero.cta_button_text.as_str())
            .bind(home.hero.cta_button_url.as_str())
            .bind(home.publish_state.as_str())
            .bind(home.created_at)
            .bind(home.updated_at)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
