//! Dependency initialization and wiring for the viewer.

use std::sync::Arc;

use etherscan::ExplorerSource;
use tracing::info;
use tx_graph_repository::{GraphConnector, InMemoryConnector, Neo4jConnector};

use super::{ExplorerMode, GraphBackend, ViewerConfig};
use crate::pipeline::Viewer;
use crate::ViewerError;

/// Build the explorer source and graph connector described by `config`.
///
/// Graph connections are opened per request with the submitted credentials,
/// so nothing here touches the database.
pub async fn build_viewer(config: &ViewerConfig) -> Result<Viewer, ViewerError> {
    info!(
        explorer = ?config.explorer,
        graph_backend = ?config.graph_backend,
        layout_seed = config.layout_seed,
        "Initializing dependencies"
    );

    let source = match &config.explorer {
        ExplorerMode::Live { api_url } => ExplorerSource::live(api_url.clone()),
        ExplorerMode::Fixture { path } => {
            ExplorerSource::mock_from_file(path).await.map_err(|e| {
                ViewerError::config(format!(
                    "Failed to load explorer fixture {}: {}",
                    path.display(),
                    e
                ))
            })?
        }
    };

    let connector: Arc<dyn GraphConnector> = match config.graph_backend {
        GraphBackend::Neo4j => Arc::new(Neo4jConnector),
        GraphBackend::Memory => Arc::new(InMemoryConnector::new()),
    };

    Ok(Viewer::new(source.into_source(), connector).with_layout_seed(config.layout_seed))
}
