// Neo4j module - connection, schema, writing and reading
pub mod connection;
pub mod indexer;
pub mod reader;
pub mod writer;

use async_trait::async_trait;
use neo4rs::Graph;
use tx_viewer_shared::{Transfer, TransferEdge};

use crate::config::GraphCredentials;
use crate::errors::GraphError;
use crate::interfaces::TransferGraph;

pub use connection::connect;
pub use indexer::create_address_constraint;

/// [`TransferGraph`] backed by a Neo4j database.
#[derive(Clone)]
pub struct Neo4jTransferGraph {
    graph: Graph,
}

impl Neo4jTransferGraph {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    /// Connect with the given credentials and make sure the address constraint exists.
    pub async fn connect(credentials: &GraphCredentials) -> Result<Self, GraphError> {
        let graph = connect(credentials)?;
        create_address_constraint(&graph).await;
        Ok(Self::new(graph))
    }
}

#[async_trait]
impl TransferGraph for Neo4jTransferGraph {
    async fn clear(&self) -> Result<(), GraphError> {
        writer::clear_data(&self.graph).await
    }

    async fn write_transfer(&self, transfer: &Transfer) -> Result<(), GraphError> {
        writer::write_transfer(&self.graph, transfer).await
    }

    async fn fetch_edges(&self) -> Result<Vec<TransferEdge>, GraphError> {
        reader::fetch_edges(&self.graph).await
    }
}
