//! Transfer graph trait definition.

use async_trait::async_trait;
use tracing::info;
use tx_viewer_shared::{Transfer, TransferEdge};

use crate::config::WRITE_REPORT_INTERVAL;
use crate::errors::GraphError;

/// Abstracts the graph database that holds the address/transfer graph.
///
/// Nodes are `(:Address {address})` and are upserted by address. Every
/// transfer becomes a new `[:SENT {value, hash, timeStamp}]` relationship;
/// nothing deduplicates edges, so callers clear the graph before a rewrite.
#[async_trait]
pub trait TransferGraph: Send + Sync {
    /// Remove every node and relationship.
    async fn clear(&self) -> Result<(), GraphError>;

    /// Upsert both endpoint addresses and create one `SENT` relationship.
    async fn write_transfer(&self, transfer: &Transfer) -> Result<(), GraphError>;

    /// Read every `SENT` relationship as `(from, to, value)` rows.
    ///
    /// The full result set is materialized in memory.
    async fn fetch_edges(&self) -> Result<Vec<TransferEdge>, GraphError>;

    /// Write transfers one at a time, stopping at the first failure.
    async fn write_transfers(&self, transfers: &[Transfer]) -> Result<usize, GraphError> {
        let total = transfers.len();
        for (idx, transfer) in transfers.iter().enumerate() {
            self.write_transfer(transfer).await?;

            if (idx + 1) % WRITE_REPORT_INTERVAL == 0 || idx + 1 == total {
                info!("  Progress: {}/{} transfers", idx + 1, total);
            }
        }
        Ok(total)
    }
}
