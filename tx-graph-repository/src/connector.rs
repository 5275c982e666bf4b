//! Per-request graph connections.
//!
//! Credentials arrive with every form submission, so the viewer holds a
//! connector rather than a connected graph.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::GraphCredentials;
use crate::errors::GraphError;
use crate::interfaces::TransferGraph;
use crate::memory::InMemoryTransferGraph;
use crate::neo4j::Neo4jTransferGraph;

/// Opens a [`TransferGraph`] for a set of credentials.
#[async_trait]
pub trait GraphConnector: Send + Sync {
    async fn connect(
        &self,
        credentials: &GraphCredentials,
    ) -> Result<Arc<dyn TransferGraph>, GraphError>;
}

/// Connects to Neo4j with the submitted credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct Neo4jConnector;

#[async_trait]
impl GraphConnector for Neo4jConnector {
    async fn connect(
        &self,
        credentials: &GraphCredentials,
    ) -> Result<Arc<dyn TransferGraph>, GraphError> {
        let graph = Neo4jTransferGraph::connect(credentials).await?;
        info!("✓ Connected to Neo4j");
        Ok(Arc::new(graph))
    }
}

/// Hands out one shared in-memory graph regardless of credentials.
///
/// The graph outlives individual requests, like a real database would.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConnector {
    graph: Arc<InMemoryTransferGraph>,
}

impl InMemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graph(graph: Arc<InMemoryTransferGraph>) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> Arc<InMemoryTransferGraph> {
        self.graph.clone()
    }
}

#[async_trait]
impl GraphConnector for InMemoryConnector {
    async fn connect(
        &self,
        credentials: &GraphCredentials,
    ) -> Result<Arc<dyn TransferGraph>, GraphError> {
        credentials.validate()?;
        Ok(self.graph.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_connector_shares_graph() {
        let connector = InMemoryConnector::new();
        let creds = GraphCredentials::new("bolt://localhost:7687", "neo4j", "password");

        let first = connector.connect(&creds).await.unwrap();
        let second = connector.connect(&creds).await.unwrap();
        first.clear().await.unwrap();

        assert!(second.fetch_edges().await.unwrap().is_empty());
        assert_eq!(connector.graph().node_count(), 0);
    }

    #[tokio::test]
    async fn test_connectors_reject_incomplete_credentials() {
        let creds = GraphCredentials::new("bolt://localhost:7687", "neo4j", "");

        assert!(matches!(
            InMemoryConnector::new().connect(&creds).await,
            Err(GraphError::ValidationError(_))
        ));
        assert!(matches!(
            Neo4jConnector.connect(&creds).await,
            Err(GraphError::ValidationError(_))
        ));
    }
}
