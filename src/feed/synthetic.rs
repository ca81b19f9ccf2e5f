use chrono::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::ValueRecord;
use crate::error::ChartResult;

use super::{SeriesRequest, SeriesSource};

/// Starting investment every synthetic walk begins from.
pub const DEFAULT_BASE_VALUE: f64 = 10_000.0;
/// Largest absolute change applied per day.
pub const DEFAULT_MAX_DAILY_DELTA: f64 = 100.0;

/// Random-walk stand-in for a market-data feed.
///
/// Produces `days + 1` daily records ending at the requested instant. Each
/// day, including the first, adds a uniform delta in
/// `[-max_daily_delta, max_daily_delta)` to the running value.
#[derive(Debug, Clone)]
pub struct SyntheticSeriesGenerator {
    rng: StdRng,
    base_value: f64,
    max_daily_delta: f64,
}

impl Default for SyntheticSeriesGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticSeriesGenerator {
    /// Generator seeded from the platform entropy source.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Reproducible generator for tests and benchmarks.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            base_value: DEFAULT_BASE_VALUE,
            max_daily_delta: DEFAULT_MAX_DAILY_DELTA,
        }
    }

    #[must_use]
    pub fn with_base_value(mut self, base_value: f64) -> Self {
        self.base_value = base_value;
        self
    }

    /// Non-finite or negative deltas are treated as zero.
    #[must_use]
    pub fn with_max_daily_delta(mut self, max_daily_delta: f64) -> Self {
        self.max_daily_delta = if max_daily_delta.is_finite() {
            max_daily_delta.max(0.0)
        } else {
            0.0
        };
        self
    }

    #[must_use]
    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    #[must_use]
    pub fn max_daily_delta(&self) -> f64 {
        self.max_daily_delta
    }

    fn daily_delta(&mut self) -> f64 {
        if self.max_daily_delta > 0.0 {
            self.rng
                .gen_range(-self.max_daily_delta..self.max_daily_delta)
        } else {
            0.0
        }
    }

    /// Generates the records for one request.
    pub fn generate(&mut self, request: &SeriesRequest) -> Vec<ValueRecord> {
        let start = request.start();
        let mut value = self.base_value;
        let mut records = Vec::with_capacity(request.days as usize + 1);
        for day in 0..=i64::from(request.days) {
            value += self.daily_delta();
            records.push(ValueRecord::new(start + Duration::days(day), value));
        }
        records
    }
}

impl SeriesSource for SyntheticSeriesGenerator {
    fn fetch(&mut self, request: &SeriesRequest) -> ChartResult<Vec<ValueRecord>> {
        Ok(self.generate(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SeriesId;
    use chrono::{DateTime, Utc};

    #[test]
    fn daily_changes_stay_within_bound() {
        let end = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("valid end");
        let mut generator = SyntheticSeriesGenerator::with_seed(7);
        let records = generator.generate(&SeriesRequest::new(SeriesId::new("A"), 90, end));

        let mut previous = DEFAULT_BASE_VALUE;
        for record in records {
            assert!((record.value - previous).abs() <= DEFAULT_MAX_DAILY_DELTA + 1e-9);
            previous = record.value;
        }
    }

    #[test]
    fn zero_delta_yields_flat_series() {
        let end = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("valid end");
        let mut generator = SyntheticSeriesGenerator::with_seed(1).with_max_daily_delta(0.0);
        let records = generator.generate(&SeriesRequest::new(SeriesId::new("A"), 3, end));
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|record| record.value == DEFAULT_BASE_VALUE));
    }

    #[test]
    fn same_seed_reproduces_walk() {
        let end = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("valid end");
        let request = SeriesRequest::new(SeriesId::new("A"), 30, end);
        let left = SyntheticSeriesGenerator::with_seed(42).generate(&request);
        let right = SyntheticSeriesGenerator::with_seed(42).generate(&request);
        assert_eq!(left, right);
    }
}
