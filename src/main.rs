//! # Workforce HRM Main Entry Point
//!
//! This is the main entry point for the Workforce HRM API service.

use migration::{Migrator, MigratorTrait};
use workforce::{config::ConfigLoader, db, seeds, server::run_server, telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from layered env files and variables
    let config_loader = ConfigLoader::new();
    let config = config_loader.load()?;

    telemetry::init_tracing(&config)?;

    tracing::info!(profile = %config.profile, "Loaded configuration");
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::debug!(config = %redacted_json, "Effective configuration");
    }

    let db = db::init_pool(&config).await?;
    Migrator::up(&db, None).await?;

    seeds::seed_plans(&db).await?;
    seeds::seed_super_admin(&db, &config).await?;

    run_server(config, db).await
}
