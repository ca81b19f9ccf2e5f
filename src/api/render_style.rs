use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Stroke, opacity and text parameters used when building frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub series_stroke_width: f64,
    /// Opacity of the dimmed copy drawn right of the cursor.
    pub dimmed_opacity: f64,
    pub marker_radius: f64,
    pub guide_line_color: Color,
    pub guide_line_width: f64,
    pub guide_line_dash_px: f64,
    pub guide_line_gap_px: f64,
    pub axis_color: Color,
    pub axis_line_width: f64,
    pub axis_font_size_px: f64,
    pub axis_title_color: Color,
    pub axis_title_font_size_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        let slate = Color::rgb(113.0 / 255.0, 128.0 / 255.0, 150.0 / 255.0);
        Self {
            series_stroke_width: 2.0,
            dimmed_opacity: 0.25,
            marker_radius: 5.0,
            guide_line_color: slate,
            guide_line_width: 1.0,
            guide_line_dash_px: 3.0,
            guide_line_gap_px: 3.0,
            axis_color: slate,
            axis_line_width: 1.0,
            axis_font_size_px: 10.0,
            axis_title_color: Color::rgb(226.0 / 255.0, 232.0 / 255.0, 240.0 / 255.0),
            axis_title_font_size_px: 12.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("series_stroke_width", self.series_stroke_width),
            ("marker_radius", self.marker_radius),
            ("guide_line_width", self.guide_line_width),
            ("guide_line_dash_px", self.guide_line_dash_px),
            ("axis_line_width", self.axis_line_width),
            ("axis_font_size_px", self.axis_font_size_px),
            ("axis_title_font_size_px", self.axis_title_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.guide_line_gap_px.is_finite() || self.guide_line_gap_px < 0.0 {
            return Err(ChartError::InvalidConfig(
                "style `guide_line_gap_px` must be finite and >= 0".to_owned(),
            ));
        }
        if !self.dimmed_opacity.is_finite() || !(0.0..=1.0).contains(&self.dimmed_opacity) {
            return Err(ChartError::InvalidConfig(
                "style `dimmed_opacity` must be in [0, 1]".to_owned(),
            ));
        }
        self.guide_line_color.validate()?;
        self.axis_color.validate()?;
        self.axis_title_color.validate()?;
        Ok(self)
    }
}
