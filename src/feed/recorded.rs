use indexmap::IndexMap;

use crate::core::{SeriesId, ValueRecord};
use crate::error::{ChartError, ChartResult};

use super::{SeriesRequest, SeriesSource};

/// In-memory feed of pre-recorded records per symbol.
///
/// Serves the records whose timestamps fall inside the requested window
/// `[end - days, end]`. Useful for deterministic hosts and tests, and as the
/// shape a real market-data feed adapter takes.
#[derive(Debug, Clone, Default)]
pub struct RecordedSeriesSource {
    records: IndexMap<SeriesId, Vec<ValueRecord>>,
}

impl RecordedSeriesSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers records for a symbol, sorting them by timestamp.
    #[must_use]
    pub fn with_series(mut self, series_id: SeriesId, mut records: Vec<ValueRecord>) -> Self {
        records.sort_by_key(|record| record.timestamp);
        self.records.insert(series_id, records);
        self
    }
}

impl SeriesSource for RecordedSeriesSource {
    fn fetch(&mut self, request: &SeriesRequest) -> ChartResult<Vec<ValueRecord>> {
        let records = self.records.get(&request.series_id).ok_or_else(|| {
            ChartError::InvalidData(format!("no records for `{}`", request.series_id))
        })?;
        let start = request.start();
        Ok(records
            .iter()
            .copied()
            .filter(|record| record.timestamp >= start && record.timestamp <= request.end)
            .collect())
    }
}
