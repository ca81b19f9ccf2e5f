//! GTK4 embedding: a `DrawingArea` wired to a [`StockChart`].

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{StockChart, ViewState};
use crate::core::{RangeSelection, Viewport};
use crate::feed::SeriesSource;
use crate::render::CairoRenderer;

type ViewStateHook = Rc<RefCell<Option<Box<dyn Fn(&ViewState)>>>>;

/// Shared handle to the chart driven by GTK callbacks.
pub type UiChart<S> = Rc<RefCell<StockChart<CairoRenderer, S>>>;

/// Owns the drawing area and forwards draw, motion, leave and resize events.
pub struct GtkStockChart<S: SeriesSource + 'static> {
    chart: UiChart<S>,
    drawing_area: gtk::DrawingArea,
    view_state_hook: ViewStateHook,
}

impl<S: SeriesSource + 'static> GtkStockChart<S> {
    #[must_use]
    pub fn new(chart: StockChart<CairoRenderer, S>) -> Self {
        let viewport = chart.viewport();
        let chart = Rc::new(RefCell::new(chart));
        let view_state_hook: ViewStateHook = Rc::new(RefCell::new(None));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(viewport.width as i32);
        drawing_area.set_content_height(viewport.height as i32);

        drawing_area.set_draw_func({
            let chart = Rc::clone(&chart);
            move |_widget, context, width, height| {
                if width <= 0 || height <= 0 {
                    return;
                }
                let Ok(mut chart) = chart.try_borrow_mut() else {
                    return;
                };

                let viewport = Viewport::new(width as u32, height as u32);
                if chart.viewport() != viewport {
                    if let Err(err) = chart.resize(viewport) {
                        warn!(error = %err, width, height, "skipping resize before draw");
                    }
                }
                if let Err(err) = chart.render_on_cairo_context(context) {
                    warn!(error = %err, "stock chart draw failed");
                }
            }
        });

        let motion = gtk::EventControllerMotion::new();
        {
            let chart = Rc::clone(&chart);
            let drawing_area = drawing_area.clone();
            let hook = Rc::clone(&view_state_hook);
            motion.connect_motion(move |_, x, y| {
                if let Ok(mut chart) = chart.try_borrow_mut() {
                    chart.pointer_move(x, y);
                    notify(&hook, &chart);
                    if chart.pending_redraw().is_some() {
                        drawing_area.queue_draw();
                    }
                }
            });
        }
        {
            let chart = Rc::clone(&chart);
            let drawing_area = drawing_area.clone();
            let hook = Rc::clone(&view_state_hook);
            motion.connect_leave(move |_| {
                if let Ok(mut chart) = chart.try_borrow_mut() {
                    chart.pointer_leave();
                    notify(&hook, &chart);
                    if chart.pending_redraw().is_some() {
                        drawing_area.queue_draw();
                    }
                }
            });
        }
        drawing_area.add_controller(motion);

        Self {
            chart,
            drawing_area,
            view_state_hook,
        }
    }

    #[must_use]
    pub fn chart(&self) -> UiChart<S> {
        Rc::clone(&self.chart)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Registers a callback fired with the fresh view state after every
    /// pointer event and range change.
    pub fn set_view_state_hook<F>(&self, hook: F)
    where
        F: Fn(&ViewState) + 'static,
    {
        *self.view_state_hook.borrow_mut() = Some(Box::new(hook));
        if let Ok(chart) = self.chart.try_borrow() {
            notify(&self.view_state_hook, &chart);
        }
    }

    /// Switches the active range and schedules a redraw.
    pub fn select_range(&self, range: RangeSelection) {
        let Ok(mut chart) = self.chart.try_borrow_mut() else {
            return;
        };
        if let Err(err) = chart.select_range(range) {
            warn!(error = %err, range = %range, "range selection failed");
            return;
        }
        notify(&self.view_state_hook, &chart);
        self.drawing_area.queue_draw();
    }
}

fn notify<S: SeriesSource>(hook: &ViewStateHook, chart: &StockChart<CairoRenderer, S>) {
    if let Some(callback) = hook.borrow().as_ref() {
        callback(&chart.view_state());
    }
}
