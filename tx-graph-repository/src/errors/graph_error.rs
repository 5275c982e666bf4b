//! Graph error types.

use thiserror::Error;

/// Errors from graph database operations.
///
/// Backend errors are flattened to strings so the type stays `Clone` and
/// independent of the driver.
#[derive(Debug, Clone, Error)]
pub enum GraphError {
    /// Connection details are missing or incomplete.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Failed to establish a connection to the graph database.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// A query failed to execute.
    #[error("Query error: {0}")]
    QueryError(String),

    /// A result row did not have the expected shape.
    #[error("Decode error: {0}")]
    DecodeError(String),
}

impl GraphError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::DecodeError(msg.into())
    }
}
