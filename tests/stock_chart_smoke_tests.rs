use chrono::{DateTime, Utc};
use stock_graph::api::{ChartConfig, RedrawScope, StockChart};
use stock_graph::core::{RangeSelection, SeriesId, Viewport};
use stock_graph::feed::SyntheticSeriesGenerator;
use stock_graph::render::NullRenderer;

fn anchor() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("valid anchor")
}

fn chart() -> StockChart<NullRenderer, SyntheticSeriesGenerator> {
    let config = ChartConfig::new(Viewport::new(1200, 500)).with_anchor(anchor());
    StockChart::new(
        NullRenderer::default(),
        SyntheticSeriesGenerator::with_seed(42),
        config,
    )
    .expect("chart init")
}

/// Surface coordinates of sample `index` of the first series.
fn sample_surface_point(chart: &StockChart<NullRenderer, SyntheticSeriesGenerator>, index: usize) -> (f64, f64) {
    let sample = chart.dataset().iter().next().expect("series").samples()[index].clone();
    let (x, y) = chart.scale_mapper().project(&sample);
    let plot = chart.plot();
    (x + plot.left, y + plot.top)
}

#[test]
fn starts_on_one_month_with_two_series() {
    let chart = chart();
    assert_eq!(chart.active_range(), RangeSelection::OneMonth);
    assert_eq!(chart.dataset().series_count(), 2);
    assert_eq!(chart.dataset().samples_per_series(), 31);
    assert_eq!(chart.pending_redraw(), Some(RedrawScope::Full));

    let state = chart.view_state();
    assert_eq!(state.active_range_index, 2);
    assert_eq!(state.net_deposits_text(), "Net deposits: $10,000.00");
    assert!(!state.cursor_active);
}

#[test]
fn render_sends_frame_and_clears_pending_redraw() {
    let mut chart = chart();
    chart.render().expect("render");

    let renderer = chart.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_path_count, 4);
    assert_eq!(renderer.last_leading_path_count, 2);
    assert_eq!(renderer.last_marker_count, 0);
    assert_eq!(renderer.last_boundary_x, Some(chart.plot().width));
    assert_eq!(chart.pending_redraw(), None);
}

#[test]
fn range_selection_regenerates_sample_counts() {
    let mut chart = chart();

    assert!(chart.select_range(RangeSelection::OneDay).expect("1D"));
    assert_eq!(chart.dataset().samples_per_series(), 2);

    assert!(chart.select_range(RangeSelection::All).expect("ALL"));
    assert_eq!(chart.dataset().samples_per_series(), 1826);
    assert_eq!(chart.view_state().active_range_index, 5);

    let expected = [2, 8, 31, 91, 366, 1826];
    for (range, samples) in RangeSelection::ALL.into_iter().zip(expected) {
        chart.select_range(range).expect("select range");
        assert_eq!(chart.dataset().samples_per_series(), samples);
    }
}

#[test]
fn reselecting_active_range_keeps_data_and_cursor() {
    let mut chart = chart();
    chart.render().expect("initial render");
    let (x, y) = sample_surface_point(&chart, 8);
    chart.pointer_move(x, y);
    chart.render().expect("overlay render");
    let before = chart.dataset().clone();

    let changed = chart.select_range(RangeSelection::OneMonth).expect("reselect");
    assert!(!changed);
    assert_eq!(chart.dataset(), &before);
    assert_eq!(chart.pending_redraw(), None);
    let cursor = chart.cursor_state().expect("cursor kept");
    assert!(cursor.nearest.iter().all(|item| item.index == 8));
    assert_eq!(chart.frame().overlay.markers.len(), 2);
}

#[test]
fn overlay_scope_still_ships_whole_frame() {
    let mut chart = chart();
    chart.render().expect("initial render");
    let (x, y) = sample_surface_point(&chart, 4);
    chart.pointer_move(x, y);
    assert_eq!(chart.pending_redraw(), Some(RedrawScope::Overlay));

    chart.render().expect("overlay render");
    let renderer = chart.renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_path_count, 4);
    assert_eq!(renderer.last_marker_count, 2);
}

#[test]
fn series_colors_and_order_survive_range_changes() {
    let mut chart = chart();
    let colors_before: Vec<_> = chart.frame().series_paths.iter().map(|path| path.color).collect();

    chart.select_range(RangeSelection::OneYear).expect("1Y");
    let frame = chart.frame();
    let colors_after: Vec<_> = frame.series_paths.iter().map(|path| path.color).collect();
    assert_eq!(colors_before, colors_after);
    assert_eq!(frame.series_paths[0].series_id, SeriesId::new("Stock A"));
    assert_eq!(frame.series_paths[2].series_id, SeriesId::new("Stock B"));
}

#[test]
fn pointer_move_updates_overlay_and_readouts() {
    let mut chart = chart();
    chart.render().expect("initial render");

    let (x, y) = sample_surface_point(&chart, 15);
    chart.pointer_move(x, y);
    assert_eq!(chart.pending_redraw(), Some(RedrawScope::Overlay));

    let cursor = chart.cursor_state().expect("cursor");
    assert!(cursor.nearest.iter().all(|item| item.index == 15));

    let state = chart.view_state();
    assert!(state.cursor_active);
    let hovered = chart.dataset().iter().next().expect("series").samples()[15].timestamp();
    assert_eq!(state.hovered_at, Some(hovered));
    assert_eq!(
        state.hovered_date_text(),
        Some(hovered.format("%Y-%m-%d").to_string())
    );
    for readout in &state.readouts {
        let sample = &chart.dataset().get(&readout.series_id).expect("series").samples()[15];
        assert_eq!(readout.value, Some(sample.value_decimal()));
        assert!(readout.label().starts_with(readout.series_id.as_str()));
    }

    chart.render().expect("overlay render");
    let renderer = chart.renderer();
    assert_eq!(renderer.last_marker_count, 2);
    let boundary = renderer.last_boundary_x.expect("boundary");
    assert!((boundary - (x - chart.plot().left)).abs() <= 1e-9);
}

#[test]
fn pointer_outside_plot_acts_like_leave() {
    let mut chart = chart();
    let (x, y) = sample_surface_point(&chart, 3);
    chart.pointer_move(x, y);
    assert!(chart.cursor_state().is_some());

    chart.pointer_move(10.0, 10.0);
    assert!(chart.cursor_state().is_none());
    assert_eq!(chart.frame().overlay.split.boundary_x, chart.plot().width);
}

#[test]
fn pointer_leave_resets_readouts() {
    let mut chart = chart();
    let (x, y) = sample_surface_point(&chart, 20);
    chart.pointer_move(x, y);
    chart.pointer_leave();

    let state = chart.view_state();
    assert!(!state.cursor_active);
    assert!(state.hovered_at.is_none());
    assert_eq!(state.split_boundary_x, chart.plot().width);
    assert!(chart.frame().overlay.markers.is_empty());
    assert!(chart.frame().overlay.guide_line.is_none());
    for readout in &state.readouts {
        assert_eq!(readout.value, None);
        assert_eq!(readout.value_text(), "$0.00");
        assert_eq!(readout.growth_text(), "0.00%");
    }
}

#[test]
fn range_change_clears_cursor() {
    let mut chart = chart();
    let (x, y) = sample_surface_point(&chart, 5);
    chart.pointer_move(x, y);
    chart.select_range(RangeSelection::OneWeek).expect("1W");
    assert!(chart.cursor_state().is_none());
    assert!(!chart.view_state().cursor_active);
}

#[test]
fn resize_keeps_data_and_cursor_instant() {
    let mut chart = chart();
    let before = chart.dataset().clone();
    let (x, y) = sample_surface_point(&chart, 10);
    chart.pointer_move(x, y);

    chart.resize(Viewport::new(800, 400)).expect("resize");
    assert_eq!(chart.dataset(), &before);
    assert_eq!(chart.viewport(), Viewport::new(800, 400));
    assert_eq!(chart.plot().width, 620.0);
    assert_eq!(chart.plot().height, 360.0);
    assert_eq!(chart.pending_redraw(), Some(RedrawScope::Full));

    let cursor = chart.cursor_state().expect("cursor survives resize");
    assert!(cursor.nearest.iter().all(|item| item.index == 10));
    for path in &chart.frame().series_paths {
        assert!(path.points.iter().all(|point| point.x <= 620.0 + 1e-9));
    }
}

#[test]
fn invalid_resize_is_rejected_without_side_effects() {
    let mut chart = chart();
    let plot = chart.plot();
    assert!(chart.resize(Viewport::new(100, 30)).is_err());
    assert_eq!(chart.plot(), plot);
    assert_eq!(chart.viewport(), Viewport::new(1200, 500));
}

#[test]
fn synthetic_constructor_uses_config_base_value() {
    let config = ChartConfig::default().with_base_value(5_000.0);
    let chart = StockChart::synthetic(NullRenderer::default(), config).expect("chart");
    let first = chart.dataset().iter().next().expect("series").first().expect("sample").value();
    assert!((first - 5_000.0).abs() <= 100.0 + 1e-9);
    assert_eq!(chart.view_state().net_deposits_text(), "Net deposits: $5,000.00");
}
