use crate::error::ChartResult;
use crate::render::{ClipRegion, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests catch invalid geometry before it
/// reaches a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_path_count: usize,
    pub last_leading_path_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_marker_count: usize,
    pub last_boundary_x: Option<f64>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_path_count = frame.series_paths.len();
        self.last_leading_path_count = frame
            .series_paths
            .iter()
            .filter(|path| path.region == ClipRegion::Leading)
            .count();
        self.last_line_count =
            frame.axis_lines.len() + usize::from(frame.overlay.guide_line.is_some());
        self.last_text_count = frame.texts.len();
        self.last_marker_count = frame.overlay.markers.len();
        self.last_boundary_x = Some(frame.overlay.split.boundary_x);
        Ok(())
    }
}
