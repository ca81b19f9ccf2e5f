use crate::core::LinearScale;
use crate::error::{ChartError, ChartResult};

/// Value axis mapped to an inverted Y pixel axis: the domain maximum sits at
/// the top of the plot.
///
/// When every value is identical the domain collapses and values land on the
/// vertical middle of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    pub fn new(value_min: f64, value_max: f64, height: f64) -> ChartResult<Self> {
        if !height.is_finite() || height <= 0.0 {
            return Err(ChartError::InvalidData(
                "value scale height must be finite and > 0".to_owned(),
            ));
        }
        let (min, max) = (value_min.min(value_max), value_min.max(value_max));
        let linear = LinearScale::new(min, max, height, 0.0)?.with_degenerate_pixel(height / 2.0);
        Ok(Self { linear })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.linear.range().0
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        self.linear.domain_to_pixel(value)
    }

    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> f64 {
        self.linear.pixel_to_domain(pixel)
    }

    /// Round tick values on a 1/2/5 step ladder inside the domain.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        let (min, max) = self.domain();
        if tick_count == 0 {
            return Vec::new();
        }
        if self.linear.is_degenerate() {
            return vec![min];
        }

        let step = nice_step(max - min, tick_count);
        let first = (min / step).ceil() as i64;
        let last = (max / step).floor() as i64;
        (first..=last).map(|index| index as f64 * step).collect()
    }
}

/// Smallest step of the form `{1, 2, 5} * 10^k` giving at most about
/// `tick_count` intervals over `span`.
#[must_use]
pub fn nice_step(span: f64, tick_count: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }
    let raw = span / tick_count.max(1) as f64;
    let power = 10_f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}
