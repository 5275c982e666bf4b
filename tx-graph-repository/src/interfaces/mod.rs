//! Abstract interfaces for graph persistence.

mod transfer_graph;

pub use transfer_graph::TransferGraph;
