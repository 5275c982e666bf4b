//! Unit and timestamp conversion for explorer records.
//!
//! The explorer reports every number as a decimal string. Values are in wei and
//! timestamps are Unix epoch seconds.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Number of wei in one ether.
pub const WEI_PER_ETHER: f64 = 1e18;

/// Errors converting explorer strings into typed values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("invalid wei value: {0:?}")]
    InvalidValue(String),

    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("timestamp out of range: {0}")]
    TimestampOutOfRange(i64),
}

/// Convert a wei amount into whole ether.
pub fn wei_to_ether(wei: u128) -> f64 {
    wei as f64 / WEI_PER_ETHER
}

/// Parse a decimal wei string.
pub fn parse_wei(raw: &str) -> Result<u128, ConversionError> {
    raw.trim()
        .parse::<u128>()
        .map_err(|_| ConversionError::InvalidValue(raw.to_string()))
}

/// Parse a Unix epoch seconds string into a UTC date-time.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ConversionError> {
    let secs = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| ConversionError::InvalidTimestamp(raw.to_string()))?;

    DateTime::<Utc>::from_timestamp(secs, 0).ok_or(ConversionError::TimestampOutOfRange(secs))
}
