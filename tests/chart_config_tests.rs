use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use stock_graph::ChartError;
use stock_graph::api::{
    ChartConfig, RenderStyle, format_currency, format_percent, viewport_for_window_width,
};
use stock_graph::core::{Margins, RangeSelection, Viewport};

#[test]
fn defaults_match_investment_chart_layout() {
    let config = ChartConfig::default();
    assert_eq!(config.viewport, Viewport::new(1200, 500));
    assert_eq!(config.margins, Margins::new(20.0, 90.0, 20.0, 90.0));
    assert_eq!(config.symbols, vec!["Stock A", "Stock B"]);
    assert_eq!(config.palette, vec!["#4ade80", "#ef4444"]);
    assert_eq!(config.base_value, 10_000.0);
    assert_eq!(config.initial_range, RangeSelection::OneMonth);
    assert_eq!(config.value_axis_title, "Total Investment Value (CAD)");
    assert!(config.anchor.is_none());
    config.validate().expect("defaults are valid");
}

#[test]
fn json_round_trip_preserves_config() {
    let anchor = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("anchor");
    let config = ChartConfig::new(Viewport::new(900, 420))
        .with_symbols(["AAPL", "MSFT", "NVDA"])
        .with_palette(["#111111", "#222222"])
        .with_initial_range(RangeSelection::ThreeMonths)
        .with_anchor(anchor);

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"3M\""));
    let parsed = ChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed.viewport, config.viewport);
    assert_eq!(parsed.symbols, config.symbols);
    assert_eq!(parsed.palette, config.palette);
    assert_eq!(parsed.initial_range, RangeSelection::ThreeMonths);
    assert_eq!(parsed.anchor, Some(anchor));
    assert_eq!(parsed.series_ids().len(), 3);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let parsed = ChartConfig::from_json_str(r#"{ "symbols": ["X", "Y"], "initial_range": "1Y" }"#)
        .expect("parse");
    assert_eq!(parsed.symbols, vec!["X", "Y"]);
    assert_eq!(parsed.initial_range, RangeSelection::OneYear);
    assert_eq!(parsed.viewport, Viewport::new(1200, 500));
    assert_eq!(parsed.style, RenderStyle::default());
}

#[test]
fn invalid_configs_are_rejected() {
    let duplicate = ChartConfig::default().with_symbols(["A", "A"]);
    assert!(matches!(duplicate.validate(), Err(ChartError::InvalidConfig(_))));

    let no_symbols = ChartConfig::default().with_symbols(Vec::<String>::new());
    assert!(matches!(no_symbols.validate(), Err(ChartError::InvalidConfig(_))));

    let zero_base = ChartConfig::default().with_base_value(0.0);
    assert!(matches!(zero_base.validate(), Err(ChartError::InvalidConfig(_))));

    let bad_color = ChartConfig::default().with_palette(["green"]);
    assert!(bad_color.validate().is_err());

    let tiny = ChartConfig::new(Viewport::new(120, 40));
    assert!(matches!(tiny.validate(), Err(ChartError::InvalidViewport { .. })));

    let mut style = RenderStyle::default();
    style.dimmed_opacity = 1.5;
    assert!(ChartConfig::default().with_style(style).validate().is_err());

    assert!(ChartConfig::from_json_str("{ not json").is_err());
}

#[test]
fn window_width_caps_chart_width() {
    assert_eq!(viewport_for_window_width(2_000), Viewport::new(1200, 500));
    assert_eq!(viewport_for_window_width(840), Viewport::new(800, 500));
    assert_eq!(viewport_for_window_width(20).width, 0);
}

#[test]
fn readout_formats_use_grouping_and_two_decimals() {
    assert_eq!(format_currency(Decimal::new(1_234_567, 2), 2), "$12,345.67");
    assert_eq!(format_currency(Decimal::new(-98_765, 1), 2), "-$9,876.50");
    assert_eq!(format_currency(Decimal::ZERO, 2), "$0.00");
    assert_eq!(format_percent(Decimal::new(123, 2)), "1.23%");
    assert_eq!(format_percent(Decimal::new(-4, 1)), "-0.40%");
}
