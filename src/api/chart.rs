use chrono::{DateTime, Utc};
use tracing::{debug, info, trace};

use crate::core::{Dataset, PlotArea, RangeSelection, ScaleMapper, SeriesId, Viewport};
use crate::error::ChartResult;
use crate::feed::{SeriesSource, SyntheticSeriesGenerator, fetch_dataset};
use crate::interaction::{CursorState, CursorTracker};
use crate::render::{RenderFrame, Renderer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::{ChartConfig, PathRenderer, RangeController, ViewState};

/// Portion of the frame that changed since the last `render` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawScope {
    /// Only the opacity split, guide line and markers moved.
    Overlay,
    /// Data, scales or size changed.
    Full,
}

impl RedrawScope {
    fn merge(current: Option<Self>, next: Self) -> Self {
        match (current, next) {
            (Some(Self::Full), _) | (_, Self::Full) => Self::Full,
            _ => Self::Overlay,
        }
    }
}

/// Interactive stock-value chart consumed by host applications.
///
/// Event handlers only mutate state and record a pending redraw; the host
/// decides when to call [`StockChart::render`]. Pointer events rebuild the
/// overlay alone, range changes and resizes rebuild the whole frame.
pub struct StockChart<R: Renderer, S: SeriesSource> {
    renderer: R,
    source: S,
    config: ChartConfig,
    symbols: Vec<SeriesId>,
    range: RangeController,
    painter: PathRenderer,
    plot: PlotArea,
    dataset: Dataset,
    mapper: ScaleMapper,
    cursor: Option<CursorState>,
    frame: RenderFrame,
    pending: Option<RedrawScope>,
}

impl<R: Renderer> StockChart<R, SyntheticSeriesGenerator> {
    /// Chart backed by the random-walk generator configured from `config`.
    pub fn synthetic(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        let generator = SyntheticSeriesGenerator::new()
            .with_base_value(config.base_value)
            .with_max_daily_delta(config.max_daily_delta);
        Self::new(renderer, generator, config)
    }
}

impl<R: Renderer, S: SeriesSource> StockChart<R, S> {
    /// Validates `config` and loads the initial range from `source`.
    pub fn new(renderer: R, mut source: S, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;

        let symbols = config.series_ids();
        let range = RangeController::new(config.initial_range);
        let painter = PathRenderer::new(
            config.style,
            config.palette()?,
            config.value_axis_title.clone(),
        );
        let plot = config.plot_area()?;
        let dataset = fetch_dataset(
            &mut source,
            &symbols,
            range.active().days(),
            end_instant(&config),
            config.base_value,
        )?;
        let mapper = ScaleMapper::for_plot(&dataset, plot)?;
        let frame = painter.render(&dataset, &mapper, config.viewport, None);

        info!(
            width = config.viewport.width,
            height = config.viewport.height,
            series = dataset.series_count(),
            samples = dataset.samples_per_series(),
            range = %range.active(),
            "stock chart initialized"
        );

        Ok(Self {
            renderer,
            source,
            config,
            symbols,
            range,
            painter,
            plot,
            dataset,
            mapper,
            cursor: None,
            frame,
            pending: Some(RedrawScope::Full),
        })
    }

    /// Activates `range` and regenerates every series for it.
    ///
    /// Selecting the already-active range is a no-op that keeps the data,
    /// cursor and frame. Otherwise any cursor is cleared. On error the
    /// previous range and data stay in place. Returns whether the active
    /// range changed.
    pub fn select_range(&mut self, range: RangeSelection) -> ChartResult<bool> {
        if range == self.range.active() {
            return Ok(false);
        }

        let dataset = fetch_dataset(
            &mut self.source,
            &self.symbols,
            range.days(),
            end_instant(&self.config),
            self.config.base_value,
        )?;
        let mapper = ScaleMapper::for_plot(&dataset, self.plot)?;

        self.range.select(range);
        self.dataset = dataset;
        self.mapper = mapper;
        self.cursor = None;
        self.rebuild_frame();

        debug!(
            range = %range,
            samples = self.dataset.samples_per_series(),
            "select range"
        );
        Ok(true)
    }

    /// Tracks a pointer given in surface coordinates.
    ///
    /// Positions outside the plot rectangle behave like [`Self::pointer_leave`].
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let (local_x, local_y) = self.plot.to_local(x, y);
        if !self.plot.contains_local(local_x, local_y) {
            self.pointer_leave();
            return;
        }

        self.cursor = Some(CursorTracker::track(local_x, &self.dataset, &self.mapper));
        self.rebuild_overlay();
    }

    /// Hides the crosshair and restores full opacity.
    pub fn pointer_leave(&mut self) {
        if self.cursor.take().is_some() {
            trace!("pointer left plot");
            self.rebuild_overlay();
        }
    }

    /// Applies a new surface size without regenerating data.
    ///
    /// An active cursor stays on the same instant and is re-projected.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        let plot = PlotArea::from_viewport(viewport, self.config.margins)?;
        let mapper = ScaleMapper::for_plot(&self.dataset, plot)?;

        self.config.viewport = viewport;
        self.plot = plot;
        self.mapper = mapper;
        self.cursor = self.cursor.take().map(|state| {
            let x = self.mapper.time_to_x(state.pointer_time);
            CursorTracker::track(x, &self.dataset, &self.mapper)
        });
        self.rebuild_frame();

        debug!(
            width = viewport.width,
            height = viewport.height,
            "resize chart"
        );
        Ok(())
    }

    /// Sends the current frame to the renderer.
    ///
    /// The whole frame is always shipped. The pending [`RedrawScope`] is
    /// advisory for hosts that can repaint only the overlay layer.
    pub fn render(&mut self) -> ChartResult<()> {
        self.renderer.render(&self.frame)?;
        trace!(scope = ?self.pending, "render frame");
        self.pending = None;
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        self.renderer.render_on_cairo_context(context, &self.frame)?;
        self.pending = None;
        Ok(())
    }

    /// Readouts, selector state and net deposits for the current cursor.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        ViewState::resolve(
            self.range.active(),
            self.config.base_value,
            &self.dataset,
            self.cursor.as_ref(),
            self.plot.width,
        )
    }

    #[must_use]
    pub fn pending_redraw(&self) -> Option<RedrawScope> {
        self.pending
    }

    #[must_use]
    pub fn active_range(&self) -> RangeSelection {
        self.range.active()
    }

    #[must_use]
    pub fn range_controller(&self) -> RangeController {
        self.range
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn scale_mapper(&self) -> &ScaleMapper {
        &self.mapper
    }

    #[must_use]
    pub fn cursor_state(&self) -> Option<&CursorState> {
        self.cursor.as_ref()
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn plot(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn rebuild_frame(&mut self) {
        self.frame = self.painter.render(
            &self.dataset,
            &self.mapper,
            self.config.viewport,
            self.cursor.as_ref(),
        );
        self.pending = Some(RedrawScope::Full);
    }

    fn rebuild_overlay(&mut self) {
        self.frame.overlay =
            self.painter
                .render_overlay(&self.dataset, &self.mapper, self.cursor.as_ref());
        self.pending = Some(RedrawScope::merge(self.pending, RedrawScope::Overlay));
    }
}

fn end_instant(config: &ChartConfig) -> DateTime<Utc> {
    config.anchor.unwrap_or_else(Utc::now)
}
