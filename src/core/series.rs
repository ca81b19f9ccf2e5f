use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::sample::{Sample, SeriesId, ValueRecord};
use crate::error::{ChartError, ChartResult};

/// Ordered samples of one symbol, strictly increasing by timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    id: SeriesId,
    samples: Vec<Sample>,
}

impl Series {
    /// Builds a series from feed records, deriving growth against `base_value`.
    ///
    /// Records must be strictly increasing by timestamp and carry finite values.
    pub fn from_records(
        id: SeriesId,
        records: &[ValueRecord],
        base_value: f64,
    ) -> ChartResult<Self> {
        if !base_value.is_finite() || base_value <= 0.0 {
            return Err(ChartError::InvalidData(
                "series base value must be finite and > 0".to_owned(),
            ));
        }

        let mut samples = Vec::with_capacity(records.len());
        for pair in records.windows(2) {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(ChartError::InvalidData(format!(
                    "records for `{id}` must be strictly increasing by timestamp"
                )));
            }
        }
        for record in records {
            samples.push(Sample::from_record(*record, base_value, id.clone())?);
        }

        Ok(Self { id, samples })
    }

    #[must_use]
    pub fn empty(id: SeriesId) -> Self {
        Self {
            id,
            samples: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &SeriesId {
        &self.id
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    /// `[min, max]` of sample times in unix seconds.
    #[must_use]
    pub fn time_extent(&self) -> Option<(f64, f64)> {
        Some((self.first()?.unix_seconds(), self.last()?.unix_seconds()))
    }

    /// `[min, max]` of sample values.
    #[must_use]
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        extent(self.samples.iter().map(Sample::value))
    }
}

/// Series of every configured symbol for the active range.
///
/// Iteration order is the configured symbol order, which keeps color and draw
/// order stable across redraws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    series: IndexMap<SeriesId, Series>,
}

impl Dataset {
    /// Assembles a dataset, rejecting duplicate ids and mismatched domains.
    pub fn new(series: Vec<Series>) -> ChartResult<Self> {
        if series.is_empty() {
            return Err(ChartError::InvalidData(
                "dataset requires at least one series".to_owned(),
            ));
        }

        let reference_len = series[0].len();
        let reference_times: Vec<_> = series[0].samples().iter().map(Sample::timestamp).collect();

        let mut map = IndexMap::with_capacity(series.len());
        for item in series {
            if item.len() != reference_len {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` has {} samples, expected {reference_len}",
                    item.id(),
                    item.len()
                )));
            }
            let same_domain = item
                .samples()
                .iter()
                .zip(&reference_times)
                .all(|(sample, time)| sample.timestamp() == *time);
            if !same_domain {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` does not share the dataset time domain",
                    item.id()
                )));
            }
            let id = item.id().clone();
            if map.insert(id.clone(), item).is_some() {
                return Err(ChartError::InvalidData(format!(
                    "duplicate series id `{id}`"
                )));
            }
        }

        Ok(Self { series: map })
    }

    #[must_use]
    pub fn get(&self, id: &SeriesId) -> Option<&Series> {
        self.series.get(id)
    }

    /// Position of a series in dataset order.
    #[must_use]
    pub fn index_of(&self, id: &SeriesId) -> Option<usize> {
        self.series.get_index_of(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.values()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn samples_per_series(&self) -> usize {
        self.series.first().map_or(0, |(_, series)| series.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples_per_series() == 0
    }

    /// `[min, max]` timestamp across all series, in unix seconds.
    #[must_use]
    pub fn time_extent(&self) -> Option<(f64, f64)> {
        merge_extents(self.iter().filter_map(Series::time_extent))
    }

    /// `[min, max]` value across all series.
    #[must_use]
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        merge_extents(self.iter().filter_map(Series::value_extent))
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}

fn merge_extents(extents: impl Iterator<Item = (f64, f64)>) -> Option<(f64, f64)> {
    extents.reduce(|left, right| (left.0.min(right.0), left.1.max(right.1)))
}
