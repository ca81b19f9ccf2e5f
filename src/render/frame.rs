use crate::core::{PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, ClipRect, ClipRegion, LinePrimitive, SeriesPathPrimitive,
    TextPrimitive,
};

/// Position of the opacity split inside the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpacitySplit {
    /// Plot-local x of the boundary, within `[0, plot_width]`.
    pub boundary_x: f64,
    pub plot_width: f64,
    pub plot_height: f64,
}

impl OpacitySplit {
    #[must_use]
    pub fn new(boundary_x: f64, plot_width: f64, plot_height: f64) -> Self {
        Self {
            boundary_x: boundary_x.clamp(0.0, plot_width.max(0.0)),
            plot_width,
            plot_height,
        }
    }

    /// Split with no cursor: the whole plot renders at full opacity.
    #[must_use]
    pub fn full(plot_width: f64, plot_height: f64) -> Self {
        Self::new(plot_width, plot_width, plot_height)
    }

    #[must_use]
    pub fn clip_rect(self, region: ClipRegion) -> ClipRect {
        match region {
            ClipRegion::Leading => ClipRect {
                x: 0.0,
                y: 0.0,
                width: self.boundary_x,
                height: self.plot_height,
            },
            ClipRegion::Trailing => ClipRect {
                x: self.boundary_x,
                y: 0.0,
                width: self.plot_width - self.boundary_x,
                height: self.plot_height,
            },
        }
    }
}

/// Crosshair layer, rebuilt on every pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    pub split: OpacitySplit,
    pub guide_line: Option<LinePrimitive>,
    pub markers: Vec<CirclePrimitive>,
}

impl OverlayFrame {
    #[must_use]
    pub fn hidden(plot: PlotArea) -> Self {
        Self {
            split: OpacitySplit::full(plot.width, plot.height),
            guide_line: None,
            markers: Vec::new(),
        }
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Every coordinate is plot-local: backends translate by `plot.left` /
/// `plot.top` once before drawing. Axis labels outside the plot use negative
/// or beyond-size coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub series_paths: Vec<SeriesPathPrimitive>,
    pub axis_lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub overlay: OverlayFrame,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, plot: PlotArea) -> Self {
        Self {
            viewport,
            plot,
            series_paths: Vec::new(),
            axis_lines: Vec::new(),
            texts: Vec::new(),
            overlay: OverlayFrame::hidden(plot),
        }
    }

    #[must_use]
    pub fn with_overlay(mut self, overlay: OverlayFrame) -> Self {
        self.overlay = overlay;
        self
    }

    /// Draw order backends follow.
    #[must_use]
    pub fn layer_order(&self) -> [CanvasLayerKind; 3] {
        CanvasLayerKind::CANONICAL
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for path in &self.series_paths {
            path.validate()?;
        }
        for line in &self.axis_lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        if let Some(line) = self.overlay.guide_line {
            line.validate()?;
        }
        for marker in &self.overlay.markers {
            marker.validate()?;
        }
        if !self.overlay.split.boundary_x.is_finite() {
            return Err(ChartError::InvalidData(
                "opacity split boundary must be finite".to_owned(),
            ));
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series_paths.is_empty()
            && self.axis_lines.is_empty()
            && self.texts.is_empty()
            && self.overlay.guide_line.is_none()
            && self.overlay.markers.is_empty()
    }
}
