//! Pointer tracking: nearest sample per series and the shared crosshair.

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Dataset, Sample, ScaleMapper, SeriesId};

/// Nearest sample of one series to the pointer time.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestSample {
    pub series_id: SeriesId,
    /// Position of `sample` inside its series.
    pub index: usize,
    pub sample: Sample,
    /// Projected plot-local position of `sample`.
    pub x: f64,
    pub y: f64,
    /// Absolute time distance to the pointer, in seconds.
    pub distance_seconds: f64,
}

/// Closest sample across every series; anchors the guide line and the
/// opacity-split boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosestSample {
    pub series_id: SeriesId,
    pub timestamp: DateTime<Utc>,
    pub x: f64,
}

/// Result of tracking one pointer position.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorState {
    /// Plot-local pointer x.
    pub pointer_x: f64,
    /// Pointer x inverted to unix seconds.
    pub pointer_time: f64,
    /// One entry per non-empty series, in dataset order.
    pub nearest: SmallVec<[NearestSample; 2]>,
    pub closest: Option<ClosestSample>,
}

impl CursorState {
    #[must_use]
    pub fn nearest_for(&self, series_id: &SeriesId) -> Option<&NearestSample> {
        self.nearest.iter().find(|item| &item.series_id == series_id)
    }

    /// Boundary between full-opacity and dimmed rendering, clamped to the plot.
    ///
    /// Falls back to `plot_width` when no series produced a match.
    #[must_use]
    pub fn split_boundary_x(&self, plot_width: f64) -> f64 {
        self.closest
            .as_ref()
            .map_or(plot_width, |closest| closest.x.clamp(0.0, plot_width))
    }
}

/// Opacity-split boundary for an optional cursor.
#[must_use]
pub fn split_boundary_x(cursor: Option<&CursorState>, plot_width: f64) -> f64 {
    cursor.map_or(plot_width, |state| state.split_boundary_x(plot_width))
}

/// Index of the sample closest in time to `target`, or `None` for an empty slice.
///
/// Bisects for the left insertion point and compares the two neighbors. An
/// exact tie keeps the earlier sample; at either end of the sequence the only
/// available neighbor wins.
#[must_use]
pub fn nearest_sample_index(samples: &[Sample], target: f64) -> Option<usize> {
    if samples.is_empty() {
        return None;
    }

    let insertion = samples.partition_point(|sample| sample.unix_seconds() < target);
    let left = insertion.checked_sub(1);
    let right = (insertion < samples.len()).then_some(insertion);

    match (left, right) {
        (Some(left), Some(right)) => {
            let left_gap = target - samples[left].unix_seconds();
            let right_gap = samples[right].unix_seconds() - target;
            Some(if left_gap > right_gap { right } else { left })
        }
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    }
}

/// Maps pointer positions to nearest samples.
pub struct CursorTracker;

impl CursorTracker {
    /// Tracks a plot-local pointer x against every series of `dataset`.
    ///
    /// Never fails: pointers outside the data fall back to the edge samples,
    /// and empty series are skipped.
    #[must_use]
    pub fn track(pointer_x: f64, dataset: &Dataset, mapper: &ScaleMapper) -> CursorState {
        let pointer_time = mapper.x_to_time(pointer_x);
        let mut nearest: SmallVec<[NearestSample; 2]> = SmallVec::new();

        if pointer_time.is_finite() {
            for series in dataset.iter() {
                let Some(index) = nearest_sample_index(series.samples(), pointer_time) else {
                    continue;
                };
                let sample = &series.samples()[index];
                let (x, y) = mapper.project(sample);
                nearest.push(NearestSample {
                    series_id: series.id().clone(),
                    index,
                    sample: sample.clone(),
                    x,
                    y,
                    distance_seconds: (sample.unix_seconds() - pointer_time).abs(),
                });
            }
        }

        let closest = nearest
            .iter()
            .min_by_key(|item| OrderedFloat(item.distance_seconds))
            .map(|item| ClosestSample {
                series_id: item.series_id.clone(),
                timestamp: item.sample.timestamp(),
                x: item.x,
            });

        trace!(
            pointer_x,
            pointer_time,
            matched = nearest.len(),
            closest = ?closest.as_ref().map(|item| item.timestamp),
            "track cursor"
        );

        CursorState {
            pointer_x,
            pointer_time,
            nearest,
            closest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Series, ValueRecord};
    use chrono::Duration;

    fn series(days: i64) -> Series {
        let start = DateTime::<Utc>::from_timestamp(0, 0).expect("epoch");
        let records: Vec<_> = (0..days)
            .map(|day| ValueRecord::new(start + Duration::days(day), 100.0 + day as f64))
            .collect();
        Series::from_records(SeriesId::new("A"), &records, 100.0).expect("series")
    }

    #[test]
    fn exact_midpoint_prefers_earlier_sample() {
        let series = series(3);
        assert_eq!(nearest_sample_index(series.samples(), 43_200.0), Some(0));
        assert_eq!(nearest_sample_index(series.samples(), 43_201.0), Some(1));
    }

    #[test]
    fn exact_hit_returns_that_sample() {
        let series = series(3);
        assert_eq!(nearest_sample_index(series.samples(), 86_400.0), Some(1));
    }

    #[test]
    fn out_of_range_falls_back_to_edges() {
        let series = series(3);
        assert_eq!(nearest_sample_index(series.samples(), -1e9), Some(0));
        assert_eq!(nearest_sample_index(series.samples(), 1e9), Some(2));
        assert_eq!(nearest_sample_index(&[], 0.0), None);
    }
}
