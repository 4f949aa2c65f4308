//! Prepares the database: optional schema reset, migrations, default content.
//!
//! Usage: `init_db [--reset]`

use anyhow::Result;
use grant_cms::{
    application::ports::ClockPort,
    config::AppConfig,
    infrastructure::{database, time::SystemClock},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "database initialisation failed");
        eprintln!("database initialisation failed: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing();

    let reset = std::env::args().skip(1).any(|arg| arg == "--reset");
    let pool = database::init_pool(config.database_url()).await?;

    if reset {
        // A failed reset is not fatal; migrations below recreate what is missing.
        match database::reset_schema(&pool, config.database_url()).await {
            Ok(true) => tracing::info!("database reset completed"),
            Ok(false) => {}
            Err(err) => tracing::error!(error = %err, "database reset failed"),
        }
    }

    database::run_migrations(&pool).await?;
    tracing::info!("migrations applied");

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    if database::seed_home_page(&pool, clock).await? {
        tracing::info!("seeded default home page");
    } else {
        tracing::info!("home page already present");
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
