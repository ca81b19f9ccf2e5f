use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use stock_graph::api::{ChartConfig, StockChart, Trend, viewport_for_window_width};
use stock_graph::core::RangeSelection;
use stock_graph::platform_gtk::GtkStockChart;
use stock_graph::render::CairoRenderer;

const WINDOW_WIDTH: i32 = 1280;
const WINDOW_HEIGHT: i32 = 680;

fn main() {
    let _ = stock_graph::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.stock_graph.demos.gtk_stock_graph")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let viewport = viewport_for_window_width(WINDOW_WIDTH as u32);
    let config = ChartConfig::new(viewport);

    let chart = match CairoRenderer::new(viewport.width as i32, viewport.height as i32)
        .and_then(|renderer| StockChart::synthetic(renderer, config))
    {
        Ok(chart) => chart,
        Err(err) => {
            eprintln!("failed to initialize stock chart: {err}");
            return;
        }
    };

    let adapter = Rc::new(GtkStockChart::new(chart));

    let net_deposits_label = gtk::Label::new(None);
    net_deposits_label.set_xalign(0.0);
    let hovered_label = gtk::Label::new(None);
    hovered_label.set_xalign(0.0);
    let readouts = gtk::Box::new(gtk::Orientation::Horizontal, 24);
    let readout_labels: Vec<gtk::Label> = (0..2)
        .map(|_| {
            let label = gtk::Label::new(None);
            readouts.append(&label);
            label
        })
        .collect();

    let range_buttons = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    let buttons: Rc<Vec<gtk::ToggleButton>> = Rc::new(
        RangeSelection::ALL
            .iter()
            .map(|range| {
                let button = gtk::ToggleButton::with_label(range.label());
                range_buttons.append(&button);
                button
            })
            .collect(),
    );

    adapter.set_view_state_hook({
        let net_deposits_label = net_deposits_label.clone();
        let hovered_label = hovered_label.clone();
        let buttons = Rc::clone(&buttons);
        move |state| {
            net_deposits_label.set_text(&state.net_deposits_text());
            hovered_label.set_text(&state.hovered_date_text().unwrap_or_default());
            for (label, readout) in readout_labels.iter().zip(&state.readouts) {
                label.set_text(&readout.label());
                let class = match readout.trend() {
                    Some(Trend::Loss) => "error",
                    _ => "success",
                };
                label.set_css_classes(&[class]);
            }
            for (index, button) in buttons.iter().enumerate() {
                let active = index == state.active_range_index;
                if button.is_active() != active {
                    button.set_active(active);
                }
            }
        }
    });

    for (range, button) in RangeSelection::ALL.into_iter().zip(buttons.iter()) {
        let adapter = Rc::clone(&adapter);
        button.connect_clicked(move |_| adapter.select_range(range));
    }

    let layout = gtk::Box::new(gtk::Orientation::Vertical, 12);
    layout.set_margin_top(20);
    layout.set_margin_start(20);
    layout.set_margin_end(20);
    layout.append(&net_deposits_label);
    layout.append(&readouts);
    layout.append(&hovered_label);
    layout.append(&range_buttons);
    layout.append(adapter.drawing_area());

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("stock-graph | Total Investment Value")
        .default_width(WINDOW_WIDTH)
        .default_height(WINDOW_HEIGHT)
        .build();
    window.set_child(Some(&layout));
    window.present();
}
