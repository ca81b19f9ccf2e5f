use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;
use stock_graph::core::{
    Dataset, Margins, PlotArea, ScaleMapper, Series, SeriesId, ValueRecord, Viewport,
    project_line_path,
};

fn build_dataset(values: &[f64]) -> Dataset {
    let start = DateTime::<Utc>::from_timestamp(1_600_000_000, 0).expect("valid start");
    let records: Vec<_> = values
        .iter()
        .enumerate()
        .map(|(day, value)| ValueRecord::new(start + Duration::days(day as i64), *value))
        .collect();
    let series = Series::from_records(SeriesId::new("Stock A"), &records, 10_000.0).expect("series");
    Dataset::new(vec![series]).expect("dataset")
}

proptest! {
    #[test]
    fn projected_points_stay_inside_plot(
        values in prop::collection::vec(1.0f64..50_000.0, 1..400),
        width in 200u32..2_400,
        height in 60u32..1_200
    ) {
        let dataset = build_dataset(&values);
        let plot = PlotArea::from_viewport(Viewport::new(width, height), Margins::default())
            .expect("plot");
        let mapper = ScaleMapper::for_plot(&dataset, plot).expect("mapper");

        let series = dataset.iter().next().expect("series");
        for point in project_line_path(series, &mapper) {
            prop_assert!(point.x >= -1e-9 && point.x <= plot.width + 1e-9);
            prop_assert!(point.y >= -1e-9 && point.y <= plot.height + 1e-9);
        }
    }

    #[test]
    fn value_axis_round_trips(
        values in prop::collection::vec(1.0f64..50_000.0, 2..60),
        factor in 0.0f64..1.0
    ) {
        let dataset = build_dataset(&values);
        let plot = PlotArea::from_viewport(Viewport::new(1200, 500), Margins::default())
            .expect("plot");
        let mapper = ScaleMapper::for_plot(&dataset, plot).expect("mapper");

        let (min, max) = mapper.value_domain();
        let value = min + factor * (max - min);
        let recovered = mapper.y_to_value(mapper.value_to_y(value));
        prop_assert!((recovered - value).abs() <= 1e-6);
    }

    #[test]
    fn time_axis_is_monotonic(
        values in prop::collection::vec(1.0f64..50_000.0, 2..200),
        left in 0.0f64..1_000.0,
        delta in 0.1f64..1_000.0
    ) {
        let dataset = build_dataset(&values);
        let plot = PlotArea::from_viewport(Viewport::new(1200, 500), Margins::default())
            .expect("plot");
        let mapper = ScaleMapper::for_plot(&dataset, plot).expect("mapper");

        prop_assert!(mapper.x_to_time(left + delta) > mapper.x_to_time(left));
    }
}
