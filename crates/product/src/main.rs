use anyhow::{Context, Result};
use product::{
    config::myconfig::Config, di::DependenciesInjectDeps, handler::AppRouter, state::AppState,
};
use shared::{
    config::{ConnectionManager, ConnectionPool},
    utils::{Telemetry, TelemetryProviders, init_logger},
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, state, telemetry) = setup().await.context("Failed to setup application")?;

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("🛑 Shutting down Product Service...");

    if let Some(telemetry) = telemetry
        && let Err(e) = telemetry.shutdown()
    {
        error!("Failed to shutdown telemetry: {e}");
    }

    info!("✅ Product Service shutdown complete.");

    Ok(())
}

async fn setup() -> Result<(Config, AppState, Option<TelemetryProviders>)> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = config
        .otel_endpoint
        .as_deref()
        .map(|endpoint| Telemetry::new("product-service", endpoint).init())
        .transpose()
        .context("Failed to initialize telemetry")?;

    init_logger(
        telemetry.as_ref().map(TelemetryProviders::logger),
        "product-service",
        config.dev_mode,
        config.enable_file_log,
    );

    info!("🚀 Starting Product Service initialization...");

    let db_pool = ConnectionManager::new_pool(&config.database_url, config.db_max_conn)
        .await
        .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::new(DependenciesInjectDeps::postgres(db_pool));

    info!("✅ Application setup completed successfully.");
    Ok((config, state, telemetry))
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    info!("📦 Running database migrations");
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
