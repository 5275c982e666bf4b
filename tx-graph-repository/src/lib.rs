//! # Tx Graph Repository
//!
//! Mirrors transfers into a graph database as `(:Address)` nodes joined by
//! `[:SENT]` relationships, and reads the relationships back for plotting.
//!
//! The [`TransferGraph`] trait is the seam between the viewer and the
//! database. [`Neo4jTransferGraph`] talks to Neo4j through `neo4rs`;
//! [`InMemoryTransferGraph`] keeps the same semantics in process for tests
//! and offline runs.

pub mod config;
pub mod connector;
pub mod errors;
pub mod interfaces;
pub mod memory;
pub mod neo4j;

pub use config::GraphCredentials;
pub use connector::{GraphConnector, InMemoryConnector, Neo4jConnector};
pub use errors::GraphError;
pub use interfaces::TransferGraph;
pub use memory::InMemoryTransferGraph;
pub use neo4j::Neo4jTransferGraph;
