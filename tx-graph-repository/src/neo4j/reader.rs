// Neo4j read-back of SENT relationships
use neo4rs::{Graph, Query};
use tracing::info;
use tx_viewer_shared::TransferEdge;

use crate::errors::GraphError;

const FETCH_EDGES_QUERY: &str = "MATCH (a:Address)-[r:SENT]->(b:Address) \
     RETURN a.address AS from, b.address AS to, r.value AS value";

/// Fetch every SENT relationship as (from, to, value) rows
pub async fn fetch_edges(graph: &Graph) -> Result<Vec<TransferEdge>, GraphError> {
    let query = Query::new(FETCH_EDGES_QUERY.to_string());
    let mut result = graph
        .execute(query)
        .await
        .map_err(|e| GraphError::query(format!("Failed to fetch relationships: {}", e)))?;

    let mut edges = Vec::new();
    while let Some(row) = result
        .next()
        .await
        .map_err(|e| GraphError::query(format!("Failed to stream relationships: {}", e)))?
    {
        let from = row
            .get::<String>("from")
            .map_err(|e| GraphError::decode(format!("column 'from': {}", e)))?;
        let to = row
            .get::<String>("to")
            .map_err(|e| GraphError::decode(format!("column 'to': {}", e)))?;
        let value = row
            .get::<f64>("value")
            .map_err(|e| GraphError::decode(format!("column 'value': {}", e)))?;

        edges.push(TransferEdge::new(from, to, value));
    }

    info!("✓ Read {} relationships from Neo4j", edges.len());
    Ok(edges)
}
