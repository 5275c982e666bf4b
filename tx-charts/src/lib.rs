//! # Tx Charts
//!
//! Renders the viewer's three charts as standalone SVG markup:
//!
//! - [`line_chart`]: transaction value over time
//! - [`bar_chart`]: number of transactions per day
//! - [`relationship_graph`]: addresses laid out with a spring layout, edges
//!   coloured by transferred value
//!
//! Every renderer returns `None` for empty input so callers never embed an
//! empty chart.

pub mod bar;
pub mod colormap;
pub mod layout;
pub mod line;
pub mod network;
pub mod series;
pub mod svg;

pub use bar::bar_chart;
pub use colormap::{Blues, Normalize};
pub use layout::{spring_layout, DEFAULT_LAYOUT_SEED};
pub use line::line_chart;
pub use network::{relationship_graph, RelationshipGraph};
pub use series::{daily_volume, value_series, DailyVolume, ValuePoint};
