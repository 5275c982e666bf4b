//! Fetch, chart and mirror one address's history.
//!
//! A submission runs strictly in order: validate the form, fetch from the
//! explorer, convert, chart, then (when credentials are present) wipe the
//! graph, write every transfer and read the edges back for the
//! relationship chart.

mod report;
mod request;

pub use report::{Notice, NoticeLevel, Report};
pub use request::FetchRequest;

use std::sync::Arc;

use etherscan::TransactionSource;
use tokio::sync::Mutex;
use tracing::{error, info, instrument, warn};
use tx_charts::{
    bar_chart, daily_volume, line_chart, relationship_graph, value_series, DEFAULT_LAYOUT_SEED,
};
use tx_graph_repository::GraphConnector;
use tx_viewer_shared::Transfer;

use crate::ViewerError;

pub const MISSING_INPUT_MESSAGE: &str = "Please enter both Ethereum address and API key.";
pub const NO_TRANSACTIONS_MESSAGE: &str = "No transactions found or invalid address/API key.";
pub const MISSING_GRAPH_MESSAGE: &str = "Please enter Neo4j connection details.";
pub const GRAPH_WRITTEN_MESSAGE: &str =
    "Transactions have been successfully added to the Neo4j database.";

/// Runs submissions against an explorer source and a graph connector.
pub struct Viewer {
    source: Box<dyn TransactionSource>,
    connector: Arc<dyn GraphConnector>,
    // Held from the wipe until the read-back
    write_lock: Mutex<()>,
    layout_seed: u64,
}

impl Viewer {
    pub fn new(source: Box<dyn TransactionSource>, connector: Arc<dyn GraphConnector>) -> Self {
        Self {
            source,
            connector,
            write_lock: Mutex::new(()),
            layout_seed: DEFAULT_LAYOUT_SEED,
        }
    }

    pub fn with_layout_seed(mut self, seed: u64) -> Self {
        self.layout_seed = seed;
        self
    }

    /// Run one submission. Failures end up in [`Report::error`].
    #[instrument(skip_all, fields(address = %request.address.trim()))]
    pub async fn run(&self, request: &FetchRequest) -> Report {
        let mut report = Report::default();
        if let Err(e) = self.execute(request, &mut report).await {
            error!(error = %e, "Submission failed");
            report.error = Some(e);
        }
        report
    }

    async fn execute(&self, request: &FetchRequest, report: &mut Report) -> Result<(), ViewerError> {
        let address = request.address.trim();
        let api_key = request.api_key.trim();
        if address.is_empty() || api_key.is_empty() {
            report.notices.push(Notice::info(MISSING_INPUT_MESSAGE));
            return Ok(());
        }

        let records = self.source.fetch_transactions(address, api_key).await?;
        if records.is_empty() {
            info!("Explorer returned no transactions");
            report.notices.push(Notice::info(NO_TRANSACTIONS_MESSAGE));
            return Ok(());
        }

        let transfers = records
            .into_iter()
            .map(Transfer::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        info!(count = transfers.len(), "Converted transactions");

        let (line_svg, bar_svg, transfers) = tokio::task::spawn_blocking(move || {
            let line_svg = line_chart(&value_series(&transfers));
            let bar_svg = bar_chart(&daily_volume(&transfers));
            (line_svg, bar_svg, transfers)
        })
        .await
        .map_err(|e| ViewerError::render(format!("Series charts: {}", e)))?;
        report.line_svg = line_svg;
        report.bar_svg = bar_svg;
        report.transfers = transfers;

        let credentials = request.credentials();
        if !credentials.is_complete() {
            warn!("Graph credentials incomplete, skipping graph step");
            report.notices.push(Notice::warning(MISSING_GRAPH_MESSAGE));
            return Ok(());
        }

        let graph = self.connector.connect(&credentials).await?;

        let rows = {
            let _guard = self.write_lock.lock().await;

            // Clear existing data
            graph.clear().await?;
            info!("✓ Cleared graph");

            let written = graph.write_transfers(&report.transfers).await?;
            info!(written, "✓ Wrote transfers");
            report.notices.push(Notice::success(GRAPH_WRITTEN_MESSAGE));

            graph.fetch_edges().await?
        };

        info!(edges = rows.len(), "Read back relationships");
        let seed = self.layout_seed;
        let (graph_svg, rows) =
            tokio::task::spawn_blocking(move || (relationship_graph(&rows, seed), rows))
                .await
                .map_err(|e| ViewerError::render(format!("Relationship graph: {}", e)))?;
        report.graph_svg = graph_svg;
        report.graph_rows = Some(rows);
        Ok(())
    }
}
