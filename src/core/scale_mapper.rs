use crate::core::{Dataset, PlotArea, Sample, TimeScale, ValueScale};
use crate::error::{ChartError, ChartResult};

/// Time→x and value→y projections fitted to a dataset's extent.
///
/// Pixels are plot-local: x grows right from the plot's left edge and y grows
/// down from the plot's top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMapper {
    plot: PlotArea,
    time_scale: TimeScale,
    value_scale: ValueScale,
}

impl ScaleMapper {
    /// Fits both scales to the `[min, max]` extents of every series.
    pub fn for_plot(dataset: &Dataset, plot: PlotArea) -> ChartResult<Self> {
        let (time_min, time_max) = dataset.time_extent().ok_or_else(|| {
            ChartError::InvalidData("scale mapper requires a non-empty dataset".to_owned())
        })?;
        let (value_min, value_max) = dataset.value_extent().ok_or_else(|| {
            ChartError::InvalidData("scale mapper requires a non-empty dataset".to_owned())
        })?;

        Ok(Self {
            plot,
            time_scale: TimeScale::new(time_min, time_max, plot.width)?,
            value_scale: ValueScale::new(value_min, value_max, plot.height)?,
        })
    }

    #[must_use]
    pub fn plot(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    #[must_use]
    pub fn value_scale(&self) -> ValueScale {
        self.value_scale
    }

    #[must_use]
    pub fn time_domain(&self) -> (f64, f64) {
        self.time_scale.domain()
    }

    #[must_use]
    pub fn value_domain(&self) -> (f64, f64) {
        self.value_scale.domain()
    }

    #[must_use]
    pub fn time_to_x(&self, unix_seconds: f64) -> f64 {
        self.time_scale.time_to_pixel(unix_seconds)
    }

    #[must_use]
    pub fn x_to_time(&self, x: f64) -> f64 {
        self.time_scale.pixel_to_time(x)
    }

    #[must_use]
    pub fn value_to_y(&self, value: f64) -> f64 {
        self.value_scale.value_to_pixel(value)
    }

    #[must_use]
    pub fn y_to_value(&self, y: f64) -> f64 {
        self.value_scale.pixel_to_value(y)
    }

    #[must_use]
    pub fn project(&self, sample: &Sample) -> (f64, f64) {
        (
            self.time_to_x(sample.unix_seconds()),
            self.value_to_y(sample.value()),
        )
    }
}
