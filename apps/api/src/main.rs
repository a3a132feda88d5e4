use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matchwell::assessment::questionnaire::{QuestionBank, QuestionnaireForm};
use matchwell::config::Config;
use matchwell::db::create_pool;
use matchwell::profile::catalog::ProfileCatalog;
use matchwell::routes::build_router;
use matchwell::state::AppState;
use matchwell::store::PgProfileStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        // Library events log under `matchwell`, the binary's under its crate name
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "matchwell={level},{}={level},tower_http={level}",
                env!("CARGO_CRATE_NAME"),
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Matchwell API v{}", env!("CARGO_PKG_VERSION"));

    // Content catalog: override file if configured, otherwise the embedded table
    let catalog = match &config.profile_catalog_path {
        Some(path) => {
            info!("Loading profile catalog from {path}");
            ProfileCatalog::from_path(path)
        }
        None => ProfileCatalog::embedded(),
    }
    .context("Failed to load profile catalog")?;

    let questions = QuestionBank::embedded().context("Failed to load questionnaire bank")?;
    info!(
        "Questionnaire bank loaded: {} questions ({} on the short form)",
        questions.len(QuestionnaireForm::Full),
        questions.len(QuestionnaireForm::Short)
    );

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url, config.db_max_connections).await?;

    // Build app state
    let state = AppState {
        catalog: Arc::new(catalog),
        questions: Arc::new(questions),
        store: Arc::new(PgProfileStore::new(db)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
