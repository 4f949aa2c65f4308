use anyhow::Result;
use grant_cms::application::{
    ports::{ClockPort, PasswordHasherPort, SlugGeneratorPort},
    services::{ApplicationServices, Repositories},
};
use grant_cms::config::AppConfig;
use grant_cms::infrastructure::{
    database,
    repositories::{
        PostgresGrantTypeReadRepository, PostgresGrantTypeWriteRepository,
        PostgresHomePageRepository, PostgresPageReadRepository, PostgresPageWriteRepository,
        PostgresPostReadRepository, PostgresPostWriteRepository, PostgresSlugLookup,
        PostgresTagRepository, PostgresUserRepository,
    },
    security::password::Argon2PasswordHasher,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use grant_cms::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing();

    tracing::info!(
        listen_addr = %config.listen_addr(),
        cloudinary = ?config.cloudinary(),
        "configuration loaded"
    );

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    database::seed_home_page(&pool, Arc::clone(&clock)).await?;

    let repos = Repositories {
        page_write: Arc::new(PostgresPageWriteRepository::new(pool.clone())),
        page_read: Arc::new(PostgresPageReadRepository::new(pool.clone())),
        post_write: Arc::new(PostgresPostWriteRepository::new(pool.clone())),
        post_read: Arc::new(PostgresPostReadRepository::new(pool.clone())),
        grant_write: Arc::new(PostgresGrantTypeWriteRepository::new(pool.clone())),
        grant_read: Arc::new(PostgresGrantTypeReadRepository::new(pool.clone())),
        home_page: Arc::new(PostgresHomePageRepository::new(pool.clone())),
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        tags: Arc::new(PostgresTagRepository::new(pool.clone())),
        slug_lookup: Arc::new(PostgresSlugLookup::new(pool)),
    };

    let password_hasher: Arc<PasswordHasherPort> = Arc::new(Argon2PasswordHasher);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        repos,
        password_hasher,
        clock,
        slugger,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
