//! # Sup Server
//!
//! JSON REST service for users and the messages they send each other.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Store (PostgreSQL pool or in-memory)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use sup_server::config::Settings;
use sup_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    sup_server::telemetry::init_tracing();

    info!("Starting Sup Server...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        address = %settings.server_addr(),
        environment = %settings.environment,
        store = ?settings.store.backend,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
