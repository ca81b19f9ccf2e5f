use chrono::{DateTime, Duration, Utc};
use stock_graph::core::{
    Dataset, Margins, PlotArea, ScaleMapper, Series, SeriesId, ValueRecord, Viewport,
};
use stock_graph::interaction::{CursorTracker, split_boundary_x};

fn anchor() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("valid anchor")
}

fn fixture(days: i64) -> (Dataset, ScaleMapper) {
    let build = |id: &str, offset: f64| {
        let records: Vec<_> = (0..days)
            .map(|day| {
                ValueRecord::new(
                    anchor() + Duration::days(day),
                    10_000.0 + offset + (day as f64 * 7.0) % 50.0,
                )
            })
            .collect();
        Series::from_records(SeriesId::new(id), &records, 10_000.0).expect("series")
    };
    let dataset =
        Dataset::new(vec![build("Stock A", 0.0), build("Stock B", -25.0)]).expect("dataset");
    let plot = PlotArea::from_viewport(Viewport::new(1200, 500), Margins::default()).expect("plot");
    let mapper = ScaleMapper::for_plot(&dataset, plot).expect("mapper");
    (dataset, mapper)
}

#[test]
fn pointer_on_sample_selects_it_in_every_series() {
    let (dataset, mapper) = fixture(31);
    let target = dataset.iter().next().expect("series").samples()[12].clone();
    let x = mapper.time_to_x(target.unix_seconds());

    let state = CursorTracker::track(x, &dataset, &mapper);
    assert_eq!(state.nearest.len(), 2);
    for nearest in &state.nearest {
        assert_eq!(nearest.index, 12);
        assert_eq!(nearest.sample.timestamp(), target.timestamp());
        assert!((nearest.x - x).abs() <= 1e-9);
        assert!(nearest.distance_seconds <= 1e-3);
    }

    let closest = state.closest.as_ref().expect("closest");
    assert_eq!(closest.timestamp, target.timestamp());
    assert!((state.split_boundary_x(mapper.plot().width) - x).abs() <= 1e-9);
}

#[test]
fn marker_positions_match_sample_projection() {
    let (dataset, mapper) = fixture(31);
    let state = CursorTracker::track(333.0, &dataset, &mapper);

    for nearest in &state.nearest {
        let (x, y) = mapper.project(&nearest.sample);
        assert_eq!((nearest.x, nearest.y), (x, y));
        assert_eq!(nearest.sample.series_id(), &nearest.series_id);
    }
}

#[test]
fn midpoint_between_samples_prefers_earlier_one() {
    let (dataset, mapper) = fixture(3);
    let first = anchor().timestamp() as f64;
    let midpoint_x = mapper.time_to_x(first + 43_200.0);

    let state = CursorTracker::track(midpoint_x, &dataset, &mapper);
    assert!(state.nearest.iter().all(|item| item.index == 0));
}

#[test]
fn pointer_past_the_edges_falls_back_to_edge_samples() {
    let (dataset, mapper) = fixture(10);

    let left = CursorTracker::track(-40.0, &dataset, &mapper);
    assert!(left.nearest.iter().all(|item| item.index == 0));
    assert_eq!(split_boundary_x(Some(&left), mapper.plot().width), 0.0);

    let right = CursorTracker::track(mapper.plot().width + 40.0, &dataset, &mapper);
    assert!(right.nearest.iter().all(|item| item.index == 9));
    assert_eq!(
        split_boundary_x(Some(&right), mapper.plot().width),
        mapper.plot().width
    );
}

#[test]
fn equal_distance_across_series_keeps_first_series() {
    let (dataset, mapper) = fixture(5);
    let state = CursorTracker::track(400.0, &dataset, &mapper);
    let closest = state.closest.as_ref().expect("closest");
    assert_eq!(closest.series_id.as_str(), "Stock A");
}

#[test]
fn single_sample_series_always_matches_that_sample() {
    let (dataset, mapper) = fixture(1);
    for x in [0.0, 250.0, 1_020.0] {
        let state = CursorTracker::track(x, &dataset, &mapper);
        assert!(state.nearest.iter().all(|item| item.index == 0));
        assert_eq!(state.closest.expect("closest").x, 0.0);
    }
}

#[test]
fn no_cursor_leaves_full_width_boundary() {
    assert_eq!(split_boundary_x(None, 1_020.0), 1_020.0);
}

#[test]
fn nearest_lookup_scales_to_five_years() {
    let (dataset, mapper) = fixture(1826);
    let target = dataset.iter().next().expect("series").samples()[1_000].clone();
    let state = CursorTracker::track(mapper.time_to_x(target.unix_seconds()), &dataset, &mapper);
    assert!(state.nearest.iter().all(|item| item.index == 1_000));
}
