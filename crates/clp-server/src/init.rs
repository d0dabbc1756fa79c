//! Server Initialization
//!
//! Loads configuration, installs logging, bootstraps the application
//! context and launches Rocket.

use std::path::Path;

use clp_infrastructure::config::{AppConfig, ConfigLoader};
use clp_infrastructure::di::init_app;
use clp_infrastructure::logging::init_logging;
use tracing::info;

use crate::builder::ServerBuilder;

/// Outcome of running the server
pub type ServerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Run the HTTP API until shutdown (Ctrl+C)
pub async fn run_server(config_path: Option<&Path>) -> ServerResult {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;
    serve(config).await
}

/// Launch the server with an already loaded configuration
///
/// Logging must already be initialized.
pub async fn serve(config: AppConfig) -> ServerResult {
    let server = config.server.clone();
    let context = init_app(config).await?;

    info!(
        address = %server.address(),
        remote = context.remote_provider_name().unwrap_or("none"),
        cors = server.cors_enabled,
        "Starting Code Learning Platform API"
    );

    let rocket = ServerBuilder::new()
        .with_explanation_service(context.explanation_service())
        .with_server_config(server)
        .build()?;

    rocket.launch().await?;
    info!("Server stopped");
    Ok(())
}

/// Load configuration from an explicit path or the default search
pub fn load_config(config_path: Option<&Path>) -> clp_domain::error::Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}
