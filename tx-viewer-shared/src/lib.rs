//! # Tx Viewer Shared
//!
//! Shared data structures for the transaction viewer. It defines the raw
//! explorer record, the converted transfer used by charts and the graph
//! writer, and the edge row read back from the graph.

pub mod types;
pub mod units;

pub use types::transaction::RawTransaction;
pub use types::transfer::{Transfer, TransferEdge};
pub use units::{parse_timestamp, parse_wei, wei_to_ether, ConversionError, WEI_PER_ETHER};
