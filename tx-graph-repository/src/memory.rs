//! In-process transfer graph for testing and local development.
//!
//! Mirrors the Neo4j semantics: address nodes are upserted by key, every
//! transfer appends a new edge, and `clear` removes everything.

use std::collections::HashSet;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tx_viewer_shared::{Transfer, TransferEdge};

use crate::errors::GraphError;
use crate::interfaces::TransferGraph;

/// A stored `SENT` relationship with all its properties.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredEdge {
    pub from: String,
    pub to: String,
    pub value: f64,
    pub hash: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct GraphState {
    nodes: Vec<String>,
    node_keys: HashSet<String>,
    edges: Vec<StoredEdge>,
}

impl GraphState {
    fn merge_node(&mut self, address: &str) {
        if self.node_keys.insert(address.to_string()) {
            self.nodes.push(address.to_string());
        }
    }
}

/// [`TransferGraph`] that keeps nodes and edges in memory.
#[derive(Debug, Default)]
pub struct InMemoryTransferGraph {
    state: RwLock<GraphState>,
}

impl InMemoryTransferGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Addresses in first-seen order.
    pub fn nodes(&self) -> Vec<String> {
        self.state.read().unwrap().nodes.clone()
    }

    pub fn edges(&self) -> Vec<StoredEdge> {
        self.state.read().unwrap().edges.clone()
    }

    pub fn node_count(&self) -> usize {
        self.state.read().unwrap().nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.state.read().unwrap().edges.len()
    }
}

#[async_trait]
impl TransferGraph for InMemoryTransferGraph {
    async fn clear(&self) -> Result<(), GraphError> {
        *self.state.write().unwrap() = GraphState::default();
        Ok(())
    }

    async fn write_transfer(&self, transfer: &Transfer) -> Result<(), GraphError> {
        let mut state = self.state.write().unwrap();
        state.merge_node(&transfer.from);
        state.merge_node(transfer.recipient());
        state.edges.push(StoredEdge {
            from: transfer.from.clone(),
            to: transfer.recipient().to_string(),
            value: transfer.value_eth,
            hash: transfer.hash.clone(),
            timestamp: transfer.timestamp,
        });
        Ok(())
    }

    async fn fetch_edges(&self) -> Result<Vec<TransferEdge>, GraphError> {
        Ok(self
            .state
            .read()
            .unwrap()
            .edges
            .iter()
            .map(|edge| TransferEdge::new(edge.from.clone(), edge.to.clone(), edge.value))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tx_viewer_shared::RawTransaction;

    fn transfer(from: &str, to: &str, wei: &str, hash: &str) -> Transfer {
        Transfer::try_from(RawTransaction::new(from, to, wei, hash, "1700000000")).unwrap()
    }

    #[tokio::test]
    async fn test_nodes_are_merged_edges_are_not() {
        let graph = InMemoryTransferGraph::new();
        let transfers = vec![
            transfer("0xa", "0xb", "1000000000000000000", "0x1"),
            transfer("0xa", "0xb", "2000000000000000000", "0x2"),
            transfer("0xb", "0xc", "3000000000000000000", "0x3"),
        ];

        let written = graph.write_transfers(&transfers).await.unwrap();

        assert_eq!(written, 3);
        assert_eq!(graph.nodes(), vec!["0xa", "0xb", "0xc"]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[tokio::test]
    async fn test_fetch_edges_returns_ether_values() {
        let graph = InMemoryTransferGraph::new();
        graph
            .write_transfer(&transfer("0xa", "0xb", "1500000000000000000", "0x1"))
            .await
            .unwrap();

        let edges = graph.fetch_edges().await.unwrap();
        assert_eq!(edges, vec![TransferEdge::new("0xa", "0xb", 1.5)]);
        assert_eq!(graph.edges()[0].hash, "0x1");
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let graph = InMemoryTransferGraph::new();
        graph
            .write_transfer(&transfer("0xa", "0xb", "1", "0x1"))
            .await
            .unwrap();

        graph.clear().await.unwrap();

        assert_eq!(graph.node_count(), 0);
        assert!(graph.fetch_edges().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_self_transfer_creates_single_node() {
        let graph = InMemoryTransferGraph::new();
        graph
            .write_transfer(&transfer("0xa", "0xa", "1", "0x1"))
            .await
            .unwrap();

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 1);
    }
}
