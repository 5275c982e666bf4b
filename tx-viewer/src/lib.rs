//! # Tx Viewer
//!
//! Web front end that fetches an address's transaction history from an
//! Etherscan-compatible explorer, charts it, mirrors it into a graph
//! database and draws the resulting address relationships.
//!
//! ## Architecture
//!
//! ```text
//! Form ──▶ Explorer ──▶ Charts ──▶ Graph (clear, write, read back) ──▶ Page
//! ```
//!
//! - [`pipeline::Viewer`]: runs one submission end to end
//! - [`server`]: axum routes serving the form and results
//! - [`render`]: HTML for the form, tables and embedded SVG charts
//! - [`config`]: environment configuration and dependency wiring

pub mod config;
pub mod errors;
pub mod pipeline;
pub mod render;
pub mod server;

pub use config::{build_viewer, FormDefaults, ViewerConfig};
pub use errors::ViewerError;
pub use pipeline::{FetchRequest, Report, Viewer};
