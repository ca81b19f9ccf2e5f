use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasLayerKind, ClipRect, Color, LinePrimitive, LineStrokeStyle, RenderFrame, Renderer,
    TextHAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub paths_drawn: usize,
    pub lines_drawn: usize,
    pub markers_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(0.10, 0.12, 0.16),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))?;
        context.translate(frame.plot.left, frame.plot.top);

        let mut stats = CairoRenderStats::default();
        for layer in frame.layer_order() {
            match layer {
                CanvasLayerKind::Series => draw_series(context, frame, &mut stats)?,
                CanvasLayerKind::Axis => draw_axis(context, frame, &mut stats)?,
                CanvasLayerKind::Crosshair => draw_crosshair(context, frame, &mut stats)?,
            }
        }

        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))?;
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_series(
    context: &Context,
    frame: &RenderFrame,
    stats: &mut CairoRenderStats,
) -> ChartResult<()> {
    for path in &frame.series_paths {
        let Some((first, rest)) = path.points.split_first() else {
            continue;
        };
        context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))?;
        apply_clip(context, frame.overlay.split.clip_rect(path.region));

        apply_color(context, path.color.with_alpha(path.color.alpha * path.opacity));
        context.set_line_width(path.stroke_width);
        context.set_line_join(cairo::LineJoin::Round);
        context.move_to(first.x, first.y);
        for point in rest {
            context.line_to(point.x, point.y);
        }
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke series path", err))?;
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))?;
        stats.paths_drawn += 1;
    }
    Ok(())
}

fn draw_axis(context: &Context, frame: &RenderFrame, stats: &mut CairoRenderStats) -> ChartResult<()> {
    for line in &frame.axis_lines {
        stroke_line(context, *line)?;
        stats.lines_drawn += 1;
    }

    for text in &frame.texts {
        let layout = pangocairo::functions::create_layout(context);
        let font_description =
            FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _text_height) = layout.pixel_size();
        let offset = match text.h_align {
            TextHAlign::Left => 0.0,
            TextHAlign::Center => -f64::from(text_width) / 2.0,
            TextHAlign::Right => -f64::from(text_width),
        };

        context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))?;
        apply_color(context, text.color);
        context.translate(text.x, text.y);
        context.rotate(text.rotation_deg.to_radians());
        context.move_to(offset, 0.0);
        pangocairo::functions::show_layout(context, &layout);
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))?;
        stats.texts_drawn += 1;
    }
    Ok(())
}

fn draw_crosshair(
    context: &Context,
    frame: &RenderFrame,
    stats: &mut CairoRenderStats,
) -> ChartResult<()> {
    if let Some(line) = frame.overlay.guide_line {
        stroke_line(context, line)?;
        stats.lines_drawn += 1;
    }

    for marker in &frame.overlay.markers {
        apply_color(context, marker.fill_color);
        context.new_sub_path();
        context.arc(marker.cx, marker.cy, marker.radius, 0.0, TAU);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill marker", err))?;
        stats.markers_drawn += 1;
    }
    Ok(())
}

fn stroke_line(context: &Context, line: LinePrimitive) -> ChartResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    match line.stroke_style {
        LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
        LineStrokeStyle::Dashed { dash_px, gap_px } => context.set_dash(&[dash_px, gap_px], 0.0),
    }
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    let result = context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err));
    context.set_dash(&[], 0.0);
    result
}

fn apply_clip(context: &Context, rect: ClipRect) {
    context.rectangle(rect.x, rect.y, rect.width.max(0.0), rect.height.max(0.0));
    context.clip();
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
