//! Transaction Viewer Main Entry Point
//!
//! Serves the viewer form and runs submissions against the configured
//! explorer and graph database.

use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tx_viewer::{build_viewer, server, ViewerConfig, ViewerError};

const DEFAULT_LOG_FILTER: &str =
    "tx_viewer=info,etherscan=info,tx_graph_repository=info,tx_charts=info,tower_http=info";

/// Initialize tracing/logging.
fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .init();

        info!(
            service_name = "tx-viewer",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with JSON format"
        );
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .init();

        info!(
            service_name = "tx-viewer",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with console output"
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), ViewerError> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = ViewerConfig::from_env();
    init_tracing(config.as_ref().is_ok_and(|c| c.json_logs));
    let config = config.inspect_err(|e| error!(error = %e, "Invalid configuration"))?;

    info!("Starting Ethereum Transaction Viewer");

    let viewer = match build_viewer(&config).await {
        Ok(viewer) => {
            info!("Dependencies initialized successfully");
            viewer
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    let app = server::create_app(viewer, config.defaults.clone());

    if let Err(e) = server::run_server(app, config.bind_addr).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
    Ok(())
}
