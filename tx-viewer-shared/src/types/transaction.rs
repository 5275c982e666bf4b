//! Raw transaction records as returned by the explorer `txlist` endpoint.

use serde::{Deserialize, Serialize};

/// One element of the explorer's `result` array.
///
/// Only `from`, `to`, `value`, `hash` and `timeStamp` are required. A record
/// without them fails to deserialize, which aborts the whole fetch instead of
/// producing a partial chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    pub from: String,
    pub to: String,
    pub value: String,
    pub hash: String,
    pub time_stamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
}

impl RawTransaction {
    /// Build a record with only the required fields set.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        value: impl Into<String>,
        hash: impl Into<String>,
        time_stamp: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            value: value.into(),
            hash: hash.into(),
            time_stamp: time_stamp.into(),
            block_number: None,
            gas_used: None,
            is_error: None,
            contract_address: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_explorer_record() {
        let json = r#"{
            "blockNumber": "54092",
            "timeStamp": "1439048640",
            "hash": "0x9c81f44c29ff0226f835cd0a8a2f2a7eca6db52a711f8211b566fd15d3e0e8d4",
            "nonce": "0",
            "from": "0x5abfec25f74cd88437631a7731906932776356f9",
            "to": "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae",
            "value": "11901464239480000000000000",
            "gas": "2000000",
            "gasUsed": "1436963",
            "isError": "0",
            "contractAddress": "",
            "input": "0x"
        }"#;

        let tx: RawTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.from, "0x5abfec25f74cd88437631a7731906932776356f9");
        assert_eq!(tx.time_stamp, "1439048640");
        assert_eq!(tx.block_number.as_deref(), Some("54092"));
        assert_eq!(tx.gas_used.as_deref(), Some("1436963"));
        assert_eq!(tx.contract_address.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_required_field_fails() {
        let json = r#"{
            "timeStamp": "1439048640",
            "hash": "0xabc",
            "from": "0x1",
            "to": "0x2"
        }"#;

        let err = serde_json::from_str::<RawTransaction>(json).unwrap_err();
        assert!(err.to_string().contains("value"));
    }
}
