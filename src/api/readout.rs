use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::core::{Dataset, RangeSelection, SeriesId};
use crate::core::primitives::f64_to_cents;
use crate::interaction::{CursorState, split_boundary_x};

use super::label_format::{format_currency, format_percent, format_readout_date};

/// Direction of a series' growth, used to color its readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Gain,
    Loss,
}

/// Current hovered value of one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesReadout {
    pub series_id: SeriesId,
    /// Palette position of the series.
    pub color_index: usize,
    /// `None` while no sample is hovered.
    pub value: Option<Decimal>,
    pub growth_percent: Option<Decimal>,
}

impl SeriesReadout {
    #[must_use]
    pub fn trend(&self) -> Option<Trend> {
        self.growth_percent.map(|growth| {
            if growth.is_sign_negative() && !growth.is_zero() {
                Trend::Loss
            } else {
                Trend::Gain
            }
        })
    }

    /// `$10,123.45`, or `$0.00` while nothing is hovered.
    #[must_use]
    pub fn value_text(&self) -> String {
        format_currency(self.value.unwrap_or_default(), 2)
    }

    /// `1.23%`, or `0.00%` while nothing is hovered.
    #[must_use]
    pub fn growth_text(&self) -> String {
        format_percent(self.growth_percent.unwrap_or_default())
    }

    /// Legend line, e.g. `Stock A: $10,123.45 (1.23%)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{}: {} ({})",
            self.series_id,
            self.value_text(),
            self.growth_text()
        )
    }
}

/// Explicit view state handed to hosts after every event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub active_range: RangeSelection,
    pub active_range_index: usize,
    pub net_deposits: Decimal,
    pub readouts: Vec<SeriesReadout>,
    pub cursor_active: bool,
    /// Timestamp of the closest hovered sample.
    pub hovered_at: Option<DateTime<Utc>>,
    /// Plot-local x of the opacity split.
    pub split_boundary_x: f64,
}

impl ViewState {
    pub(super) fn resolve(
        active_range: RangeSelection,
        base_value: f64,
        dataset: &Dataset,
        cursor: Option<&CursorState>,
        plot_width: f64,
    ) -> Self {
        let readouts = dataset
            .iter()
            .enumerate()
            .map(|(color_index, series)| {
                let nearest = cursor.and_then(|state| state.nearest_for(series.id()));
                SeriesReadout {
                    series_id: series.id().clone(),
                    color_index,
                    value: nearest.map(|item| item.sample.value_decimal()),
                    growth_percent: nearest
                        .and_then(|item| Decimal::from_f64(item.sample.growth_percent())),
                }
            })
            .collect();

        Self {
            active_range,
            active_range_index: active_range.index(),
            net_deposits: f64_to_cents(base_value),
            readouts,
            cursor_active: cursor.is_some(),
            hovered_at: cursor
                .and_then(|state| state.closest.as_ref())
                .map(|closest| closest.timestamp),
            split_boundary_x: split_boundary_x(cursor, plot_width),
        }
    }

    /// Header line, e.g. `Net deposits: $10,000.00`.
    #[must_use]
    pub fn net_deposits_text(&self) -> String {
        format!("Net deposits: {}", format_currency(self.net_deposits, 2))
    }

    #[must_use]
    pub fn hovered_date_text(&self) -> Option<String> {
        self.hovered_at.map(format_readout_date)
    }

    #[must_use]
    pub fn readout(&self, series_id: &SeriesId) -> Option<&SeriesReadout> {
        self.readouts.iter().find(|item| &item.series_id == series_id)
    }
}
