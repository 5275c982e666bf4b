//! Error types for graph operations.

mod graph_error;

pub use graph_error::GraphError;
