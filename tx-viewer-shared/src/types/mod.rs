//! Core data structures shared across the viewer crates.

pub mod transaction;
pub mod transfer;

pub use transaction::RawTransaction;
pub use transfer::{Transfer, TransferEdge};
