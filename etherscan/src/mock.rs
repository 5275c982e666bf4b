//! Mock explorer client for testing and local development.
//!
//! The `MockEtherscanClient` is pre-populated with address → records mappings,
//! allowing tests and demos to run without network access or an API key.
//!
//! # Example
//!
//! ```ignore
//! use etherscan::{MockEtherscanClient, TransactionSource};
//! use tx_viewer_shared::RawTransaction;
//!
//! let client = MockEtherscanClient::new();
//! client.register("0xAbC", vec![RawTransaction::new("0xabc", "0xdef", "1", "0x01", "1700000000")]);
//! let records = client.fetch_transactions("0xabc", "any-key").await?;
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tx_viewer_shared::RawTransaction;

use crate::{EtherscanError, Result, TransactionSource};

/// Mock client that returns pre-configured records.
///
/// Unknown addresses behave like an address without history and return an
/// empty list.
pub struct MockEtherscanClient {
    /// Map of lowercased address -> records
    records: RwLock<HashMap<String, Vec<RawTransaction>>>,
    /// When set, any other key is rejected like the live API does
    api_key: Option<String>,
}

impl MockEtherscanClient {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            api_key: None,
        }
    }

    /// Create a mock client pre-populated with the given address → records mappings.
    pub fn with_records(records: HashMap<String, Vec<RawTransaction>>) -> Self {
        let client = Self::new();
        for (address, txs) in records {
            client.register(&address, txs);
        }
        client
    }

    /// Only accept `api_key`; other keys fail with "Invalid API Key".
    pub fn require_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Register the records returned for `address`. Addresses are matched case-insensitively.
    pub fn register(&self, address: &str, txs: Vec<RawTransaction>) {
        self.records
            .write()
            .unwrap()
            .insert(normalize_address(address), txs);
    }

    pub fn has_address(&self, address: &str) -> bool {
        self.records
            .read()
            .unwrap()
            .contains_key(&normalize_address(address))
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().unwrap().is_empty()
    }
}

impl Default for MockEtherscanClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionSource for MockEtherscanClient {
    async fn fetch_transactions(
        &self,
        address: &str,
        api_key: &str,
    ) -> Result<Vec<RawTransaction>> {
        if let Some(expected) = &self.api_key {
            if expected != api_key {
                return Err(EtherscanError::Api("Invalid API Key".to_string()));
            }
        }

        Ok(self
            .records
            .read()
            .unwrap()
            .get(&normalize_address(address))
            .cloned()
            .unwrap_or_default())
    }
}

fn normalize_address(address: &str) -> String {
    address.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_tx(hash: &str) -> RawTransaction {
        RawTransaction::new("0xaaa", "0xbbb", "1000", hash, "1700000000")
    }

    #[tokio::test]
    async fn test_mock_client_with_records() {
        let mut records = HashMap::new();
        records.insert("0xaaa".to_string(), vec![test_tx("0x1"), test_tx("0x2")]);
        records.insert("0xbbb".to_string(), vec![test_tx("0x3")]);
        let client = MockEtherscanClient::with_records(records);

        assert_eq!(client.len(), 2);
        assert!(client.has_address("0xaaa"));
        assert!(!client.has_address("0xccc"));
        assert_eq!(client.fetch_transactions("0xaaa", "").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_client_address_case_insensitive() {
        let client = MockEtherscanClient::new();
        client.register("0xAbCdEf", vec![test_tx("0x1")]);

        let records = client.fetch_transactions(" 0xabcdef ", "").await.unwrap();
        assert_eq!(records[0].hash, "0x1");
    }

    #[tokio::test]
    async fn test_mock_client_unknown_address_is_empty() {
        let client = MockEtherscanClient::new();
        assert!(client.fetch_transactions("0xnone", "").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_rejects_wrong_key() {
        let client = MockEtherscanClient::new().require_api_key("secret");
        client.register("0xaaa", vec![test_tx("0x1")]);

        match client.fetch_transactions("0xaaa", "wrong").await {
            Err(EtherscanError::Api(msg)) => assert_eq!(msg, "Invalid API Key"),
            other => panic!("Expected Api error, got {:?}", other),
        }
        assert_eq!(client.fetch_transactions("0xaaa", "secret").await.unwrap().len(), 1);
    }
}
