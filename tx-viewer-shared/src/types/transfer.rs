//! Converted transfer records and graph read-back rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::transaction::RawTransaction;
use crate::units::{parse_timestamp, parse_wei, wei_to_ether, ConversionError};

/// A transaction with its value and timestamp converted.
///
/// This is what the charts plot and what the graph writer turns into a
/// `SENT` edge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub value_wei: u128,
    pub value_eth: f64,
    pub hash: String,
    pub timestamp: DateTime<Utc>,
    pub block_number: Option<String>,
    pub gas_used: Option<String>,
    pub is_error: bool,
}

impl Transfer {
    /// Address used for the recipient node. For contract creations this is
    /// already the created contract.
    pub fn recipient(&self) -> &str {
        &self.to
    }
}

impl TryFrom<RawTransaction> for Transfer {
    type Error = ConversionError;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        let value_wei = parse_wei(&raw.value)?;
        let timestamp = parse_timestamp(&raw.time_stamp)?;

        // Contract creations report an empty `to`
        let to = match raw.contract_address {
            Some(contract) if raw.to.is_empty() && !contract.is_empty() => contract,
            _ => raw.to,
        };

        Ok(Self {
            from: raw.from,
            to,
            value_wei,
            value_eth: wei_to_ether(value_wei),
            hash: raw.hash,
            timestamp,
            block_number: raw.block_number,
            gas_used: raw.gas_used,
            is_error: raw.is_error.as_deref() == Some("1"),
        })
    }
}

/// One `SENT` relationship as read back from the graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferEdge {
    pub from: String,
    pub to: String,
    pub value: f64,
}

impl TransferEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, value: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            value,
        }
    }
}

impl From<&Transfer> for TransferEdge {
    fn from(transfer: &Transfer) -> Self {
        Self::new(transfer.from.clone(), transfer.recipient(), transfer.value_eth)
    }
}
