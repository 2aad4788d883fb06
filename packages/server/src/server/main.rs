// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::domains::events::IngestConfig;
use server_core::kernel::TicketmasterCatalog;
use server_core::server::{build_app, AppState};
use server_core::Config;
use ticketmaster_client::TicketmasterClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,server_core=debug,ticketmaster_client=debug,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Event Catalog API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(api_key = %config.masked_api_key(), "Configuration loaded");

    // Upstream client
    let ingest_config = IngestConfig::default();
    let mut client = TicketmasterClient::with_timeout(
        config.ticketmaster_api_key.clone(),
        ingest_config.request_timeout,
    )
    .context("Failed to create Ticketmaster client")?;
    if let Some(base_url) = &config.ticketmaster_base_url {
        client = client.with_base_url(base_url.as_str());
    }
    tracing::info!(base_url = %client.base_url(), "Ticketmaster client ready");

    // Build application
    let state = AppState::new(Arc::new(TicketmasterCatalog::new(client)), ingest_config);
    let app = build_app(state, &config.static_dir);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
