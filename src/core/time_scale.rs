use crate::core::LinearScale;
use crate::core::primitives::SECONDS_PER_DAY;
use crate::error::{ChartError, ChartResult};

const HOUR: f64 = 3_600.0;

/// Calendar-friendly tick steps, in seconds.
const TIME_TICK_STEPS: [f64; 12] = [
    HOUR,
    3.0 * HOUR,
    6.0 * HOUR,
    12.0 * HOUR,
    SECONDS_PER_DAY,
    2.0 * SECONDS_PER_DAY,
    7.0 * SECONDS_PER_DAY,
    14.0 * SECONDS_PER_DAY,
    30.0 * SECONDS_PER_DAY,
    91.0 * SECONDS_PER_DAY,
    182.0 * SECONDS_PER_DAY,
    365.0 * SECONDS_PER_DAY,
];

/// Time axis mapping unix seconds onto `[0, width]`.
///
/// A single-instant domain maps every time to the left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(time_start: f64, time_end: f64, width: f64) -> ChartResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidData(
                "time scale width must be finite and > 0".to_owned(),
            ));
        }
        let (start, end) = (time_start.min(time_end), time_start.max(time_end));
        Ok(Self {
            linear: LinearScale::new(start, end, 0.0, width)?,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.linear.range().1
    }

    #[must_use]
    pub fn time_to_pixel(self, time: f64) -> f64 {
        self.linear.domain_to_pixel(time)
    }

    #[must_use]
    pub fn pixel_to_time(self, pixel: f64) -> f64 {
        self.linear.pixel_to_domain(pixel)
    }

    /// Step chosen for roughly `tick_count` ticks across the domain.
    #[must_use]
    pub fn tick_step(self, tick_count: usize) -> f64 {
        let (start, end) = self.domain();
        let span = end - start;
        let target = tick_count.max(1) as f64;
        TIME_TICK_STEPS
            .into_iter()
            .find(|step| span / step <= target)
            .unwrap_or(TIME_TICK_STEPS[TIME_TICK_STEPS.len() - 1])
    }

    /// Tick times aligned to multiples of the chosen step since the epoch,
    /// which puts day-or-longer steps on UTC midnights.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        if tick_count == 0 {
            return Vec::new();
        }
        let (start, end) = self.domain();
        if self.linear.is_degenerate() {
            return vec![start];
        }

        let step = self.tick_step(tick_count);
        let mut ticks = Vec::new();
        let mut tick = (start / step).ceil() * step;
        while tick <= end {
            ticks.push(tick);
            tick += step;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_ticks_land_on_midnight() {
        let start = 1_700_000_000.0;
        let scale = TimeScale::new(start, start + 10.0 * SECONDS_PER_DAY, 800.0).expect("scale");
        let ticks = scale.ticks(12);
        assert!(!ticks.is_empty());
        for tick in ticks {
            assert_eq!(tick % SECONDS_PER_DAY, 0.0);
            assert!(tick >= start);
        }
    }

    #[test]
    fn five_year_span_uses_coarse_steps() {
        let scale = TimeScale::new(0.0, 1825.0 * SECONDS_PER_DAY, 1020.0).expect("scale");
        assert!(scale.tick_step(10) >= 182.0 * SECONDS_PER_DAY);
        assert!(scale.ticks(10).len() <= 11);
    }
}
