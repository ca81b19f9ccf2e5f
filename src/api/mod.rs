//! Host-facing chart API: configuration, the `StockChart` facade and the
//! view state it exposes after every event.

mod axis_ticks;
mod chart;
mod chart_config;
mod label_format;
mod palette;
mod path_renderer;
mod range_controller;
mod readout;
mod render_style;

pub use chart::{RedrawScope, StockChart};
pub use chart_config::{
    CHART_HEIGHT_PX, ChartConfig, MAX_CHART_WIDTH_PX, WINDOW_GUTTER_PX, viewport_for_window_width,
};
pub use label_format::{format_currency, format_percent, format_readout_date};
pub use palette::SeriesPalette;
pub use path_renderer::PathRenderer;
pub use range_controller::RangeController;
pub use readout::{SeriesReadout, Trend, ViewState};
pub use render_style::RenderStyle;
