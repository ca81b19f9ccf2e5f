use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;
use stock_graph::core::{
    Dataset, Margins, PlotArea, ScaleMapper, Series, SeriesId, ValueRecord, Viewport,
};
use stock_graph::interaction::{CursorTracker, nearest_sample_index};

fn build_dataset(values_a: &[f64], values_b: &[f64]) -> Dataset {
    let start = DateTime::<Utc>::from_timestamp(1_600_000_000, 0).expect("valid start");
    let build = |id: &str, values: &[f64]| {
        let records: Vec<_> = values
            .iter()
            .enumerate()
            .map(|(day, value)| ValueRecord::new(start + Duration::days(day as i64), *value))
            .collect();
        Series::from_records(SeriesId::new(id), &records, 10_000.0).expect("series")
    };
    Dataset::new(vec![build("Stock A", values_a), build("Stock B", values_b)]).expect("dataset")
}

fn walks() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..120).prop_flat_map(|len| {
        (
            prop::collection::vec(9_000.0f64..11_000.0, len),
            prop::collection::vec(9_000.0f64..11_000.0, len),
        )
    })
}

proptest! {
    #[test]
    fn nearest_sample_minimizes_time_distance(
        (values_a, values_b) in walks(),
        pointer_x in -100.0f64..1_200.0
    ) {
        let dataset = build_dataset(&values_a, &values_b);
        let plot = PlotArea::from_viewport(Viewport::new(1200, 500), Margins::default())
            .expect("plot");
        let mapper = ScaleMapper::for_plot(&dataset, plot).expect("mapper");

        let state = CursorTracker::track(pointer_x, &dataset, &mapper);
        prop_assert_eq!(state.nearest.len(), 2);

        for nearest in &state.nearest {
            let series = dataset.get(&nearest.series_id).expect("series");
            let best = series
                .samples()
                .iter()
                .map(|sample| (sample.unix_seconds() - state.pointer_time).abs())
                .fold(f64::INFINITY, f64::min);
            prop_assert!(nearest.distance_seconds <= best + 1e-6);
        }

        let boundary = state.split_boundary_x(plot.width);
        prop_assert!((0.0..=plot.width).contains(&boundary));

        let closest = state.closest.as_ref().expect("closest");
        let min_distance = state
            .nearest
            .iter()
            .map(|item| item.distance_seconds)
            .fold(f64::INFINITY, f64::min);
        let closest_item = state
            .nearest
            .iter()
            .find(|item| item.series_id == closest.series_id)
            .expect("closest series tracked");
        prop_assert_eq!(closest_item.distance_seconds, min_distance);
    }

    #[test]
    fn nearest_index_stays_in_bounds(
        (values_a, values_b) in walks(),
        target_offset in -1.0e7f64..2.0e7
    ) {
        let dataset = build_dataset(&values_a, &values_b);
        let series = dataset.iter().next().expect("series");
        let target = series.samples()[0].unix_seconds() + target_offset;

        let index = nearest_sample_index(series.samples(), target).expect("index");
        prop_assert!(index < series.len());
    }
}
