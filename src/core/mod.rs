pub mod line_series;
pub mod primitives;
pub mod range;
pub mod sample;
pub mod scale;
pub mod scale_mapper;
pub mod series;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use line_series::{PathPoint, project_line_path};
pub use range::RangeSelection;
pub use sample::{Sample, SeriesId, ValueRecord, growth_percent};
pub use scale::LinearScale;
pub use scale_mapper::ScaleMapper;
pub use series::{Dataset, Series};
pub use time_scale::TimeScale;
pub use types::{Margins, PlotArea, Viewport};
pub use value_scale::{ValueScale, nice_step};
