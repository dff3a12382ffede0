//! # skillbridged: skillbridge daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Construct the state source adapter
//! - Build the adapter registry and the discovery service
//! - Build the axum router, injecting the application service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::sync::Arc;

use skillbridge_adapter_http_axum::router;
use skillbridge_adapter_http_axum::state::AppState;
use skillbridge_adapter_state_json::JsonStateSource;
use skillbridge_app::ports::StateSource;
use skillbridge_app::registry::AdapterRegistry;
use skillbridge_app::services::discovery_service::DiscoveryService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // State source
    let source = JsonStateSource::from_path(&config.states.path, config.host_info());
    match source.all_states() {
        Ok(states) => tracing::info!(
            path = %config.states.path.display(),
            entities = states.len(),
            "entity states readable"
        ),
        Err(err) => tracing::warn!(
            path = %config.states.path.display(),
            error = %err,
            "entity states not readable yet"
        ),
    }

    // Adapters
    let registry = AdapterRegistry::with_defaults()?;
    tracing::info!(domains = ?registry.domains(), "entity adapters registered");

    // Services
    let discovery_service = DiscoveryService::new(source, Arc::new(registry), config.alexa_config());

    // HTTP
    let app = router::build(AppState::new(discovery_service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %bind_addr,
        locale = %config.alexa.locale,
        "skillbridged listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("skillbridged stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "unable to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
