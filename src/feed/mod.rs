//! Data sources feeding the chart.
//!
//! The chart only ever sees [`ValueRecord`]s through [`SeriesSource`], so the
//! synthetic generator can be swapped for a market-data feed without touching
//! scaling, rendering or cursor tracking.

mod recorded;
mod synthetic;

use chrono::{DateTime, Duration, Utc};

use crate::core::{Dataset, Series, SeriesId, ValueRecord};
use crate::error::ChartResult;

pub use recorded::RecordedSeriesSource;
pub use synthetic::{DEFAULT_BASE_VALUE, DEFAULT_MAX_DAILY_DELTA, SyntheticSeriesGenerator};

/// One series' worth of data requested for the active range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRequest {
    pub series_id: SeriesId,
    pub days: u32,
    /// Instant of the last requested sample.
    pub end: DateTime<Utc>,
}

impl SeriesRequest {
    #[must_use]
    pub fn new(series_id: SeriesId, days: u32, end: DateTime<Utc>) -> Self {
        Self {
            series_id,
            days,
            end,
        }
    }

    /// Instant of the first requested sample, `days` days before `end`.
    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        self.end - Duration::days(i64::from(self.days))
    }
}

/// Contract implemented by anything that yields `{timestamp, value}` records
/// per symbol per requested span.
///
/// Records must come back in strictly increasing timestamp order.
pub trait SeriesSource {
    fn fetch(&mut self, request: &SeriesRequest) -> ChartResult<Vec<ValueRecord>>;
}

/// Fetches every symbol for a `days`-long span ending at `end` and assembles
/// them into one dataset, in symbol order.
pub fn fetch_dataset<S: SeriesSource + ?Sized>(
    source: &mut S,
    symbols: &[SeriesId],
    days: u32,
    end: DateTime<Utc>,
    base_value: f64,
) -> ChartResult<Dataset> {
    let series = symbols
        .iter()
        .map(|symbol| {
            let request = SeriesRequest::new(symbol.clone(), days, end);
            let records = source.fetch(&request)?;
            Series::from_records(symbol.clone(), &records, base_value)
        })
        .collect::<ChartResult<Vec<_>>>()?;
    Dataset::new(series)
}
