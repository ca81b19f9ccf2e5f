use serde::{Deserialize, Serialize};

use crate::core::{ScaleMapper, Series};

/// Projected vertex of a series polyline in plot-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

/// Projects every sample of a series into one continuous polyline.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests consume the exact same geometry.
#[must_use]
pub fn project_line_path(series: &Series, mapper: &ScaleMapper) -> Vec<PathPoint> {
    series
        .samples()
        .iter()
        .map(|sample| {
            let (x, y) = mapper.project(sample);
            PathPoint { x, y }
        })
        .collect()
}
