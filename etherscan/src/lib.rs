//! Etherscan client for fetching an address's transaction history.
//!
//! This crate provides:
//! - [`ExplorerSource`] config enum for choosing between mock and live clients
//! - [`TransactionSource`] trait for abstracting explorer access
//! - [`EtherscanClient`] production client that queries the `txlist` endpoint
//! - [`MockEtherscanClient`] mock client with pre-configured address → records mappings
//!
//! ## Usage with ExplorerSource
//!
//! ```ignore
//! use etherscan::ExplorerSource;
//!
//! // Offline: records from a fixture file
//! let source = ExplorerSource::mock_from_file("fixtures/txlist.json").await?.into_source();
//!
//! // Production: live API
//! let source = ExplorerSource::live("https://api.etherscan.io/api").into_source();
//!
//! let records = source.fetch_transactions("0xde0b…", "API_KEY").await?;
//! ```

mod mock;

pub use mock::MockEtherscanClient;

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use tracing::{debug, info};
use tx_viewer_shared::RawTransaction;

/// Default Etherscan API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.etherscan.io/api";

/// Message Etherscan returns alongside `status: "0"` for an address with no history.
const NO_TRANSACTIONS_MESSAGE: &str = "No transactions found";

#[derive(Debug, thiserror::Error)]
pub enum EtherscanError {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("explorer error: {0}")]
    Api(String),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EtherscanError>;

/// Trait for fetching an address's transaction list.
///
/// Production code uses [`EtherscanClient`], tests and offline runs use
/// [`MockEtherscanClient`].
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Fetch every normal transaction for `address`, oldest first.
    ///
    /// An address without history yields an empty list, not an error.
    async fn fetch_transactions(&self, address: &str, api_key: &str)
        -> Result<Vec<RawTransaction>>;
}

/// Response envelope shared by all Etherscan endpoints.
///
/// `result` is an array on success and a plain string on errors such as an
/// invalid API key.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: String,
    result: serde_json::Value,
}

/// Turn an envelope into records. The whole batch fails if any record is malformed.
fn parse_envelope(body: &str) -> Result<Vec<RawTransaction>> {
    let envelope: Envelope = serde_json::from_str(body)?;

    match envelope.result {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(EtherscanError::from))
            .collect(),
        serde_json::Value::String(_) | serde_json::Value::Null
            if envelope.message.starts_with(NO_TRANSACTIONS_MESSAGE) =>
        {
            Ok(Vec::new())
        }
        serde_json::Value::String(reason) => Err(EtherscanError::Api(reason)),
        other => Err(EtherscanError::Api(format!(
            "status={} message={} result={}",
            envelope.status, envelope.message, other
        ))),
    }
}

/// Production client for the Etherscan `account/txlist` endpoint.
///
/// One request per call: no pagination and no retry.
pub struct EtherscanClient {
    url: String,
    client: ReqwestClient,
}

impl EtherscanClient {
    pub fn new(url: &str) -> Self {
        EtherscanClient {
            url: url.to_string(),
            client: ReqwestClient::new(),
        }
    }
}

#[async_trait]
impl TransactionSource for EtherscanClient {
    async fn fetch_transactions(
        &self,
        address: &str,
        api_key: &str,
    ) -> Result<Vec<RawTransaction>> {
        debug!(address, "Requesting txlist from {}", self.url);

        let res = self
            .client
            .get(&self.url)
            .query(&[
                ("module", "account"),
                ("action", "txlist"),
                ("address", address),
                ("startblock", "0"),
                ("endblock", "99999999"),
                ("sort", "asc"),
                ("apikey", api_key),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(EtherscanError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let records = parse_envelope(&body)?;
        info!(address, count = records.len(), "Fetched transactions");
        Ok(records)
    }
}

/// Configuration for the explorer data source.
#[derive(Debug, Clone)]
pub enum ExplorerSource {
    /// Use the mock client with pre-configured address → records mappings.
    Mock(HashMap<String, Vec<RawTransaction>>),

    /// Query a live Etherscan-compatible API.
    Live {
        /// The API endpoint (e.g., "https://api.etherscan.io/api")
        api_url: String,
    },
}

impl ExplorerSource {
    pub fn mock(records: HashMap<String, Vec<RawTransaction>>) -> Self {
        Self::Mock(records)
    }

    /// Load mock records from a JSON fixture file.
    ///
    /// The file is an object keyed by address whose values are either a raw
    /// record array or a full Etherscan response envelope.
    pub async fn mock_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let body = tokio::fs::read_to_string(path.as_ref()).await?;
        let fixture: HashMap<String, serde_json::Value> = serde_json::from_str(&body)?;

        let mut records = HashMap::with_capacity(fixture.len());
        for (address, value) in fixture {
            let txs = match value {
                serde_json::Value::Array(_) => serde_json::from_value(value)?,
                envelope => parse_envelope(&envelope.to_string())?,
            };
            records.insert(address, txs);
        }

        info!(
            path = %path.as_ref().display(),
            addresses = records.len(),
            "Loaded explorer fixture"
        );
        Ok(Self::Mock(records))
    }

    pub fn live(api_url: impl Into<String>) -> Self {
        Self::Live {
            api_url: api_url.into(),
        }
    }

    /// Create the matching [`TransactionSource`] implementation.
    pub fn into_source(self) -> Box<dyn TransactionSource> {
        match self {
            Self::Mock(records) => Box::new(MockEtherscanClient::with_records(records)),
            Self::Live { api_url } => Box::new(EtherscanClient::new(&api_url)),
        }
    }
}
