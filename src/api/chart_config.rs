use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotArea, RangeSelection, SeriesId, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::feed::{DEFAULT_BASE_VALUE, DEFAULT_MAX_DAILY_DELTA};

use super::{RenderStyle, SeriesPalette};

pub const MAX_CHART_WIDTH_PX: u32 = 1200;
pub const WINDOW_GUTTER_PX: u32 = 40;
pub const CHART_HEIGHT_PX: u32 = 500;

/// Public chart bootstrap configuration.
///
/// Serializable so hosts can keep chart setup in a config file; every field
/// falls back to its default when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,
    /// `#rrggbb` colors assigned to symbols by position.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    /// Net deposits every series' growth is measured against.
    #[serde(default = "default_base_value")]
    pub base_value: f64,
    /// Bound of the synthetic generator's daily change.
    #[serde(default = "default_max_daily_delta")]
    pub max_daily_delta: f64,
    #[serde(default)]
    pub initial_range: RangeSelection,
    /// End instant of requested data; `None` uses the current time at each
    /// regeneration.
    #[serde(default)]
    pub anchor: Option<DateTime<Utc>>,
    #[serde(default = "default_value_axis_title")]
    pub value_axis_title: String,
    #[serde(default)]
    pub style: RenderStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            margins: Margins::default(),
            symbols: default_symbols(),
            palette: default_palette(),
            base_value: default_base_value(),
            max_daily_delta: default_max_daily_delta(),
            initial_range: RangeSelection::default(),
            anchor: None,
            value_axis_title: default_value_axis_title(),
            style: RenderStyle::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_symbols<S: Into<String>>(mut self, symbols: impl IntoIterator<Item = S>) -> Self {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_palette<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.palette = colors.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_base_value(mut self, base_value: f64) -> Self {
        self.base_value = base_value;
        self
    }

    #[must_use]
    pub fn with_initial_range(mut self, range: RangeSelection) -> Self {
        self.initial_range = range;
        self
    }

    /// Pins the end instant of requested data.
    #[must_use]
    pub fn with_anchor(mut self, anchor: DateTime<Utc>) -> Self {
        self.anchor = Some(anchor);
        self
    }

    #[must_use]
    pub fn with_value_axis_title(mut self, title: impl Into<String>) -> Self {
        self.value_axis_title = title.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn series_ids(&self) -> Vec<SeriesId> {
        self.symbols.iter().map(|symbol| SeriesId::new(symbol.as_str())).collect()
    }

    pub fn palette(&self) -> ChartResult<SeriesPalette> {
        SeriesPalette::from_hex(&self.palette)
    }

    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        PlotArea::from_viewport(self.viewport, self.margins)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.symbols.is_empty() {
            return Err(ChartError::InvalidConfig(
                "at least one symbol is required".to_owned(),
            ));
        }
        let mut seen = HashSet::with_capacity(self.symbols.len());
        for symbol in &self.symbols {
            if symbol.trim().is_empty() {
                return Err(ChartError::InvalidConfig(
                    "symbols must not be blank".to_owned(),
                ));
            }
            if !seen.insert(symbol.as_str()) {
                return Err(ChartError::InvalidConfig(format!(
                    "duplicate symbol `{symbol}`"
                )));
            }
        }
        if !self.base_value.is_finite() || self.base_value <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "base value must be finite and > 0".to_owned(),
            ));
        }
        if !self.max_daily_delta.is_finite() || self.max_daily_delta < 0.0 {
            return Err(ChartError::InvalidConfig(
                "max daily delta must be finite and >= 0".to_owned(),
            ));
        }
        self.palette()?;
        self.plot_area()?;
        self.style.validate()?;
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

/// Chart size for a host window width: `min(1200, width - 40)` by 500.
#[must_use]
pub fn viewport_for_window_width(window_width: u32) -> Viewport {
    let width = window_width
        .saturating_sub(WINDOW_GUTTER_PX)
        .min(MAX_CHART_WIDTH_PX);
    Viewport::new(width, CHART_HEIGHT_PX)
}

fn default_viewport() -> Viewport {
    Viewport::new(MAX_CHART_WIDTH_PX, CHART_HEIGHT_PX)
}

fn default_symbols() -> Vec<String> {
    vec!["Stock A".to_owned(), "Stock B".to_owned()]
}

fn default_palette() -> Vec<String> {
    vec!["#4ade80".to_owned(), "#ef4444".to_owned()]
}

fn default_base_value() -> f64 {
    DEFAULT_BASE_VALUE
}

fn default_max_daily_delta() -> f64 {
    DEFAULT_MAX_DAILY_DELTA
}

fn default_value_axis_title() -> String {
    "Total Investment Value (CAD)".to_owned()
}
