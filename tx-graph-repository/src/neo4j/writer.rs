// Neo4j data writing functions
use neo4rs::{Graph, Query};
use tracing::debug;
use tx_viewer_shared::Transfer;

use crate::errors::GraphError;

const CLEAR_QUERY: &str = "MATCH (n) DETACH DELETE n";

const WRITE_TRANSFER_QUERY: &str = "MERGE (a:Address {address: $from_address}) \
     MERGE (b:Address {address: $to_address}) \
     CREATE (a)-[:SENT {value: $value, hash: $hash, timeStamp: $timeStamp}]->(b)";

/// Clear all existing data from Neo4j
pub async fn clear_data(graph: &Graph) -> Result<(), GraphError> {
    let query = Query::new(CLEAR_QUERY.to_string());
    graph
        .run(query)
        .await
        .map_err(|e| GraphError::query(format!("Failed to clear Neo4j data: {}", e)))?;
    Ok(())
}

/// Build the write query for one transfer.
pub fn transfer_query(transfer: &Transfer) -> Query {
    Query::new(WRITE_TRANSFER_QUERY.to_string())
        .param("from_address", transfer.from.clone())
        .param("to_address", transfer.recipient().to_string())
        .param("value", transfer.value_eth)
        .param("hash", transfer.hash.clone())
        .param("timeStamp", transfer.timestamp.naive_utc())
}

/// Upsert both addresses and create the SENT relationship for one transfer
pub async fn write_transfer(graph: &Graph, transfer: &Transfer) -> Result<(), GraphError> {
    graph.run(transfer_query(transfer)).await.map_err(|e| {
        GraphError::query(format!("Failed to write transfer {}: {}", transfer.hash, e))
    })?;

    debug!(hash = %transfer.hash, "Wrote transfer");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_query_merges_nodes_and_creates_edge() {
        assert!(WRITE_TRANSFER_QUERY.contains("MERGE (a:Address {address: $from_address})"));
        assert!(WRITE_TRANSFER_QUERY.contains("MERGE (b:Address {address: $to_address})"));
        assert!(WRITE_TRANSFER_QUERY.contains("CREATE (a)-[:SENT"));
        assert!(!WRITE_TRANSFER_QUERY.contains("MERGE (a)-[:SENT"));
    }

    #[test]
    fn test_clear_query_detaches() {
        assert_eq!(CLEAR_QUERY, "MATCH (n) DETACH DELETE n");
    }
}
