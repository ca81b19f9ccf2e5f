use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, f64_to_cents};
use crate::error::{ChartError, ChartResult};

/// Symbol identity of one series, e.g. `"Stock A"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(String);

impl SeriesId {
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Raw `{timestamp, value}` pair yielded by a data source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRecord {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl ValueRecord {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// One time-stamped value observation for a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    timestamp: DateTime<Utc>,
    value: f64,
    growth_percent: f64,
    series_id: SeriesId,
}

impl Sample {
    /// Builds a sample and derives its growth against `base_value`.
    pub fn from_record(
        record: ValueRecord,
        base_value: f64,
        series_id: SeriesId,
    ) -> ChartResult<Self> {
        if !record.value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "value for `{series_id}` at {} must be finite",
                record.timestamp
            )));
        }
        Ok(Self {
            timestamp: record.timestamp,
            value: record.value,
            growth_percent: growth_percent(record.value, base_value),
            series_id,
        })
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Timestamp as fractional unix seconds, the scale domain unit.
    #[must_use]
    pub fn unix_seconds(&self) -> f64 {
        datetime_to_unix_seconds(self.timestamp)
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value rounded to cents for readouts.
    #[must_use]
    pub fn value_decimal(&self) -> Decimal {
        f64_to_cents(self.value)
    }

    #[must_use]
    pub fn growth_percent(&self) -> f64 {
        self.growth_percent
    }

    #[must_use]
    pub fn series_id(&self) -> &SeriesId {
        &self.series_id
    }
}

/// Percentage change of `value` relative to `base_value`.
///
/// A zero base yields `0.0` instead of an infinite ratio.
#[must_use]
pub fn growth_percent(value: f64, base_value: f64) -> f64 {
    if base_value == 0.0 || !base_value.is_finite() {
        return 0.0;
    }
    (value - base_value) / base_value * 100.0
}
