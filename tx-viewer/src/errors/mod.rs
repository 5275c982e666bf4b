//! Error types for the transaction viewer.

use axum::http::StatusCode;
use etherscan::EtherscanError;
use thiserror::Error;
use tx_graph_repository::GraphError;
use tx_viewer_shared::ConversionError;

/// Errors that can occur during startup or while handling a fetch.
#[derive(Error, Debug)]
pub enum ViewerError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The explorer request failed or returned an error payload.
    #[error("Explorer error: {0}")]
    ExplorerError(#[from] EtherscanError),

    /// An explorer record carried an unparseable value or timestamp.
    #[error("Conversion error: {0}")]
    ConversionError(#[from] ConversionError),

    /// Graph database connection or query failure.
    #[error("Graph error: {0}")]
    GraphError(#[from] GraphError),

    /// A chart rendering task panicked or was cancelled.
    #[error("Render error: {0}")]
    RenderError(String),
}

impl ViewerError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a render error.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::RenderError(msg.into())
    }

    /// HTTP status used when this error ends a request.
    ///
    /// Failures of the explorer or the graph database are upstream failures.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ConfigError(_) | Self::RenderError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::GraphError(GraphError::ValidationError(_)) => StatusCode::BAD_REQUEST,
            Self::ExplorerError(_) | Self::ConversionError(_) | Self::GraphError(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ViewerError::config("bad port").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ViewerError::render("task cancelled").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ViewerError::from(EtherscanError::Api("Invalid API Key".into())).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ViewerError::from(GraphError::connection("refused")).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ViewerError::from(GraphError::validation("missing")).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_display_wraps_source() {
        let err = ViewerError::from(EtherscanError::Api("Invalid API Key".into()));
        assert_eq!(err.to_string(), "Explorer error: explorer error: Invalid API Key");
    }
}
