//! stock-graph: interactive stock-value line chart.
//!
//! Two or more value series are generated per selectable date range, scaled
//! into a plot rectangle and drawn as lines. A pointer crosshair snaps to the
//! nearest sample of every series, dims the lines to its right and feeds the
//! value readouts. Drawing goes through the [`render::Renderer`] trait, so the
//! same chart runs headless in tests and on cairo inside GTK.

pub mod api;
pub mod core;
pub mod error;
pub mod feed;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartConfig, StockChart, ViewState};
pub use error::{ChartError, ChartResult};
