//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize logging and (optionally) the metrics exporter
//! - Compile the route table against the registered controllers
//! - Bind the listener and serve until a shutdown signal
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when routes are ready)

use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::app::App;
use crate::config::{load_config, AppConfig, ConfigError};
use crate::controllers::{default_callbacks, default_registry};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::{init_metrics, init_tracing};
use crate::routing::RouteError;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("route table error: {0}")]
    Route(#[from] RouteError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load `config_path` and serve the blog until SIGINT/SIGTERM.
pub async fn run(config_path: &Path) -> Result<(), StartupError> {
    let config = load_config(config_path)?;
    init_tracing(&config)?;

    tracing::info!(
        config = %config_path.display(),
        version = env!("CARGO_PKG_VERSION"),
        "blog-router starting"
    );

    start_metrics(&config);

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());
    serve(config, shutdown).await
}

/// Bootstrap the app with the built-in controllers, bind and serve.
pub async fn serve(config: AppConfig, shutdown: Shutdown) -> Result<(), StartupError> {
    let bind_address = config.listener.bind_address.clone();
    let app = App::bootstrap(config, default_registry(), &default_callbacks())?;

    let listener = TcpListener::bind(&bind_address).await?;
    HttpServer::new(app).run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn start_metrics(config: &AppConfig) {
    if !config.observability.metrics_enabled {
        return;
    }
    match config.observability.metrics_address.parse::<SocketAddr>() {
        Ok(addr) => {
            if let Err(e) = init_metrics(addr) {
                tracing::error!(error = %e, "Failed to start metrics exporter");
            }
        }
        Err(_) => tracing::error!(
            metrics_address = %config.observability.metrics_address,
            "Failed to parse metrics address"
        ),
    }
}
