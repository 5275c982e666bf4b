// Neo4j connection setup
use neo4rs::Graph;
use tracing::info;

use crate::config::GraphCredentials;
use crate::errors::GraphError;

/// Connect to Neo4j and return a Graph instance
pub fn connect(credentials: &GraphCredentials) -> Result<Graph, GraphError> {
    credentials.validate()?;

    info!(uri = %credentials.uri, user = %credentials.user, "Connecting to Neo4j");
    let graph = Graph::new(&credentials.uri, &credentials.user, &credentials.password)
        .map_err(|e| GraphError::connection(format!("Failed to connect to Neo4j: {}", e)))?;

    Ok(graph)
}
