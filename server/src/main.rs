//! Gantry server entry point.
//!
//! Initialises tracing, loads configuration from environment variables
//! (prefixed with `GANTRY_`), builds the port implementations and serves the
//! agents API and page shell over HTTP.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use gantry_common::ServerConfig;
use tracing_subscriber::EnvFilter;

use gantry_server::api::{AppState, create_router};
use gantry_server::infra::{
    FileAgentRegistry, InMemoryMaintenanceMode, ManifestAssetResolver, StaticAuthorization,
};

// ===================================================================
// Wiring
// ===================================================================

/// Build the shared state from configuration.
fn build_state(config: &ServerConfig) -> Result<AppState> {
    let registry = match &config.agents_file {
        Some(path) => FileAgentRegistry::load(path).context("failed to load agent registry")?,
        None => {
            tracing::warn!("GANTRY_AGENTS_FILE not set, agent updates are kept in memory only");
            FileAgentRegistry::default()
        }
    };

    let authorization = StaticAuthorization::new(config.admins.iter().cloned());
    if !authorization.is_security_enabled() {
        tracing::warn!("GANTRY_ADMINS is empty, security disabled: every user is an administrator");
    }

    let assets = match &config.asset_manifest {
        Some(path) => ManifestAssetResolver::from_file(&config.asset_prefix, Path::new(path))
            .context("failed to load asset manifest")?,
        None => ManifestAssetResolver::new(&config.asset_prefix),
    };

    Ok(AppState {
        registry: Arc::new(registry),
        authorization: Arc::new(authorization),
        maintenance: Arc::new(InMemoryMaintenanceMode::new(config.maintenance_mode)),
        assets: Arc::new(assets),
    })
}

// ===================================================================
// Entry point
// ===================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialise tracing with RUST_LOG env filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("gantry-server starting");

    // 2. Load configuration from GANTRY_* env vars.
    let config: ServerConfig = envy::prefixed("GANTRY_")
        .from_env()
        .context("failed to load config from GANTRY_* env vars")?;

    tracing::info!(
        listen_addr = %config.listen_addr,
        agents_file = ?config.agents_file,
        admins = config.admins.len(),
        maintenance_mode = config.maintenance_mode,
        "configuration loaded",
    );

    // 3. Build ports and the router.
    let state = build_state(&config)?;
    let router = create_router(state);

    // 4. Bind and serve.
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind TCP listener on {}", config.listen_addr))?;

    tracing::info!("gantry-server ready at http://{}/", config.listen_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("gantry-server shut down");
    Ok(())
}

/// Wait for SIGINT (Ctrl-C) for graceful shutdown.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("received shutdown signal");
}
