// Server module - HTTP server setup and routing
pub mod handlers;
pub mod state;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use self::state::AppState;
use crate::config::{create_cors_layer, FormDefaults};
use crate::pipeline::Viewer;

/// Create the Axum application router with all routes and middleware
pub fn create_app(viewer: Viewer, defaults: FormDefaults) -> Router {
    let state = AppState {
        viewer: Arc::new(viewer),
        defaults: Arc::new(defaults),
    };

    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/health", get(handlers::health_check))
        .layer(create_cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server on the specified address
pub async fn run_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Server listening on {}", addr);
    info!("- Viewer: http://{}/", addr);
    info!("- Health endpoint: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
