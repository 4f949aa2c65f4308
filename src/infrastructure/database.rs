use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
    application::{
        ApplicationResult, commands::home_page::HomePageCommandService, ports::ClockPort,
    },
    infrastructure::repositories::PostgresHomePageRepository,
};
use std::sync::Arc;

pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(16)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Drops and recreates the `public` schema. Only meaningful for PostgreSQL
/// URLs; anything else is skipped and reported as `false`.
pub async fn reset_schema(pool: &PgPool, database_url: &str) -> Result<bool, sqlx::Error> {
    if !database_url.starts_with("postgres") {
        tracing::info!("not a PostgreSQL database, skipping schema reset");
        return Ok(false);
    }

    tracing::warn!("resetting public schema");
    sqlx::raw_sql(
        "DROP SCHEMA public CASCADE;
         CREATE SCHEMA public;
         GRANT ALL ON SCHEMA public TO public;",
    )
    .execute(pool)
    .await?;

    Ok(true)
}

/// Inserts the default home page unless one exists. Returns whether a row was
/// written.
pub async fn seed_home_page(pool: &PgPool, clock: Arc<ClockPort>) -> ApplicationResult<bool> {
    let repo = Arc::new(PostgresHomePageRepository::new(pool.clone()));
    HomePageCommandService::new(repo, clock)
        .seed_home_page()
        .await
}
