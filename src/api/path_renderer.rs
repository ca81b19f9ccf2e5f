use crate::core::{Dataset, ScaleMapper, Viewport, project_line_path};
use crate::interaction::{CursorState, split_boundary_x};
use crate::render::{
    CirclePrimitive, ClipRegion, LinePrimitive, LineStrokeStyle, OpacitySplit, OverlayFrame,
    RenderFrame, SeriesPathPrimitive, TextHAlign, TextPrimitive,
};

use super::axis_ticks::{
    AXIS_LABEL_GAP_PX, AXIS_MAX_TICKS, AXIS_MIN_TICKS, AXIS_TICK_LENGTH_PX,
    AXIS_TIME_TARGET_SPACING_PX, AXIS_VALUE_TARGET_SPACING_PX, axis_tick_target_count,
};
use super::label_format::{format_time_tick, format_value_tick};
use super::{RenderStyle, SeriesPalette};

/// Builds draw commands for series lines, axes and the crosshair overlay.
///
/// Every series is emitted twice: once clipped to the leading region at full
/// opacity and once clipped to the trailing region at `dimmed_opacity`. Moving
/// the cursor only moves the clip boundary, so the base frame never changes
/// between pointer events.
#[derive(Debug, Clone, PartialEq)]
pub struct PathRenderer {
    style: RenderStyle,
    palette: SeriesPalette,
    value_axis_title: String,
}

impl PathRenderer {
    #[must_use]
    pub fn new(style: RenderStyle, palette: SeriesPalette, value_axis_title: String) -> Self {
        Self {
            style,
            palette,
            value_axis_title,
        }
    }

    #[must_use]
    pub fn style(&self) -> RenderStyle {
        self.style
    }

    #[must_use]
    pub fn palette(&self) -> &SeriesPalette {
        &self.palette
    }

    /// Full frame: base layers plus the overlay for `cursor`.
    #[must_use]
    pub fn render(
        &self,
        dataset: &Dataset,
        mapper: &ScaleMapper,
        viewport: Viewport,
        cursor: Option<&CursorState>,
    ) -> RenderFrame {
        self.render_base(dataset, mapper, viewport)
            .with_overlay(self.render_overlay(dataset, mapper, cursor))
    }

    /// Series and axis layers with no cursor applied.
    #[must_use]
    pub fn render_base(
        &self,
        dataset: &Dataset,
        mapper: &ScaleMapper,
        viewport: Viewport,
    ) -> RenderFrame {
        let mut frame = RenderFrame::new(viewport, mapper.plot());
        self.append_series_paths(&mut frame, dataset, mapper);
        self.append_time_axis(&mut frame, mapper);
        self.append_value_axis(&mut frame, mapper);
        frame
    }

    /// Opacity split, guide line and focus markers for one cursor state.
    #[must_use]
    pub fn render_overlay(
        &self,
        dataset: &Dataset,
        mapper: &ScaleMapper,
        cursor: Option<&CursorState>,
    ) -> OverlayFrame {
        let plot = mapper.plot();
        let boundary_x = split_boundary_x(cursor, plot.width);
        let mut overlay = OverlayFrame {
            split: OpacitySplit::new(boundary_x, plot.width, plot.height),
            guide_line: None,
            markers: Vec::new(),
        };

        let Some(state) = cursor else {
            return overlay;
        };
        if state.closest.is_some() {
            overlay.guide_line = Some(
                LinePrimitive::new(
                    boundary_x,
                    0.0,
                    boundary_x,
                    plot.height,
                    self.style.guide_line_width,
                    self.style.guide_line_color,
                )
                .with_stroke_style(LineStrokeStyle::Dashed {
                    dash_px: self.style.guide_line_dash_px,
                    gap_px: self.style.guide_line_gap_px,
                }),
            );
        }
        for nearest in &state.nearest {
            let Some(index) = dataset.index_of(&nearest.series_id) else {
                continue;
            };
            overlay.markers.push(CirclePrimitive::new(
                nearest.x,
                nearest.y,
                self.style.marker_radius,
                self.palette.color_for_index(index),
            ));
        }
        overlay
    }

    fn append_series_paths(&self, frame: &mut RenderFrame, dataset: &Dataset, mapper: &ScaleMapper) {
        for (index, series) in dataset.iter().enumerate() {
            let points = project_line_path(series, mapper);
            let color = self.palette.color_for_index(index);
            for (region, opacity) in [
                (ClipRegion::Leading, 1.0),
                (ClipRegion::Trailing, self.style.dimmed_opacity),
            ] {
                frame.series_paths.push(SeriesPathPrimitive {
                    series_id: series.id().clone(),
                    points: points.clone(),
                    stroke_width: self.style.series_stroke_width,
                    color,
                    opacity,
                    region,
                });
            }
        }
    }

    fn append_time_axis(&self, frame: &mut RenderFrame, mapper: &ScaleMapper) {
        let plot = mapper.plot();
        let style = self.style;
        frame.axis_lines.push(LinePrimitive::new(
            0.0,
            plot.height,
            plot.width,
            plot.height,
            style.axis_line_width,
            style.axis_color,
        ));

        let time_scale = mapper.time_scale();
        let tick_count = axis_tick_target_count(
            plot.width,
            AXIS_TIME_TARGET_SPACING_PX,
            AXIS_MIN_TICKS,
            AXIS_MAX_TICKS,
        );
        let step = time_scale.tick_step(tick_count);
        for tick in time_scale.ticks(tick_count) {
            let x = mapper.time_to_x(tick);
            frame.axis_lines.push(LinePrimitive::new(
                x,
                plot.height,
                x,
                plot.height + AXIS_TICK_LENGTH_PX,
                style.axis_line_width,
                style.axis_color,
            ));
            frame.texts.push(TextPrimitive::new(
                format_time_tick(tick, step),
                x,
                plot.height + AXIS_TICK_LENGTH_PX + AXIS_LABEL_GAP_PX,
                style.axis_font_size_px,
                style.axis_color,
                TextHAlign::Center,
            ));
        }
    }

    fn append_value_axis(&self, frame: &mut RenderFrame, mapper: &ScaleMapper) {
        let plot = mapper.plot();
        let style = self.style;
        frame.axis_lines.push(LinePrimitive::new(
            0.0,
            0.0,
            0.0,
            plot.height,
            style.axis_line_width,
            style.axis_color,
        ));

        let value_scale = mapper.value_scale();
        let tick_count = axis_tick_target_count(
            plot.height,
            AXIS_VALUE_TARGET_SPACING_PX,
            AXIS_MIN_TICKS,
            AXIS_MAX_TICKS,
        );
        let (min, max) = value_scale.domain();
        let step = crate::core::nice_step(max - min, tick_count);
        for tick in value_scale.ticks(tick_count) {
            let y = mapper.value_to_y(tick);
            frame.axis_lines.push(LinePrimitive::new(
                -AXIS_TICK_LENGTH_PX,
                y,
                0.0,
                y,
                style.axis_line_width,
                style.axis_color,
            ));
            frame.texts.push(TextPrimitive::new(
                format_value_tick(tick, step),
                -(AXIS_TICK_LENGTH_PX + AXIS_LABEL_GAP_PX),
                y - style.axis_font_size_px / 2.0,
                style.axis_font_size_px,
                style.axis_color,
                TextHAlign::Right,
            ));
        }

        if !self.value_axis_title.is_empty() {
            frame.texts.push(
                TextPrimitive::new(
                    self.value_axis_title.clone(),
                    -plot.left,
                    plot.height / 2.0,
                    style.axis_title_font_size_px,
                    style.axis_title_color,
                    TextHAlign::Center,
                )
                .with_rotation(-90.0),
            );
        }
    }
}
