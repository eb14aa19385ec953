use axum_helpers::{close_database, cors_layer_from_env, create_production_app};
use core_config::tracing::{init_tracing, install_color_eyre};
use email::{EmailProvider, SmtpProvider, TemplateEngine};
use migration::Migrator;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    info!("Opening SQLite database at {}", config.database.url());
    let db = database::sqlite::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("SQLite connection failed: {}", e))?;

    // Tables are created on startup
    database::sqlite::run_migrations::<Migrator>(&db, config.app.name).await?;

    let jwt = axum_helpers::JwtAuth::new(&config.jwt);
    info!("Using SMTP relay at {}:{}", config.smtp.host, config.smtp.port);
    let mail: Arc<dyn EmailProvider> = Arc::new(SmtpProvider::new(config.smtp.clone())?);
    let templates = TemplateEngine::new()?;
    let cors = cors_layer_from_env(&config.environment)?;

    let state = AppState {
        config,
        db,
        jwt,
        mail,
        templates,
    };

    // The pool handle for cleanup; the state moves into the router
    let db = state.db.clone();
    let server_config = state.config.server.clone();
    let app_name = state.config.app.name;

    let app = api::app(state, cors);

    info!("Starting EasyShop API with production-ready shutdown (30s timeout)");

    // Production-ready server with graceful shutdown and cleanup
    create_production_app(
        app,
        &server_config,
        Duration::from_secs(30), // 30s graceful shutdown timeout
        async move {
            info!("Shutting down: closing database connections");
            close_database(db, app_name).await;
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("EasyShop API shutdown complete");
    Ok(())
}
