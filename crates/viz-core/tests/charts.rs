// File: crates/viz-core/tests/charts.rs
// Purpose: Scene contents of the scatter, detail and bar charts built from small CSV tables.

use viz_core::{BarChart, BarsConfig, ChartError, DataError, DetailChart, ScatterChart, Shape, Table, Theme};

const WORLD: &str = "time,location,fertility_rate,life_expectancy,pop_mlns
1990,USA,2.1,75.2,252.1
1990,AUS,1.9,77.0,17.1
2000,USA,2.0,76.6,281.7
2000,AUS,1.8,79.2,19.2
2010,AUS,1.9,81.7,22.0
";

const SEASONS: &str = "Year,Episodes,Avg. Viewers (mil),Most watched episode,Viewers (mil),Data
1990,13,27.8,Pilot,33.6,Actual
1991,22,24.4,Finale,29.9,Actual
1992,24,22.4,Premiere,28.1,Predicted
";

fn table(csv: &str) -> Table {
    Table::from_reader(csv.as_bytes()).expect("parse csv")
}

#[test]
fn countries_keep_first_appearance_order() {
    let t = table(WORLD);
    let chart = ScatterChart::new(&t, Theme::light()).unwrap();
    assert_eq!(chart.countries(), vec!["USA".to_string(), "AUS".to_string()]);
    assert_eq!(chart.default_country("AUS").as_deref(), Some("AUS"));
    assert_eq!(chart.default_country("NZL").as_deref(), Some("USA"));
}

#[test]
fn scatter_draws_one_dot_per_row_and_a_trend_path() {
    let t = table(WORLD);
    let theme = Theme::light();
    let chart = ScatterChart::new(&t, theme).unwrap();
    let scene = chart.build("AUS").unwrap();

    assert_eq!((scene.width, scene.height), (500, 500));
    let dots: Vec<_> = scene.with_class("dot").collect();
    assert_eq!(dots.len(), 3);
    for d in &dots {
        match &d.shape {
            Shape::Circle { r, fill, .. } => {
                assert_eq!(*r, 3.0);
                assert_eq!(*fill, theme.point);
            }
            other => panic!("dot is not a circle: {other:?}"),
        }
        let tip = d.tooltip.as_ref().expect("dot tooltip");
        assert_eq!(tip.title, "AUS");
    }

    let trend: Vec<_> = scene.with_class("trend").collect();
    assert_eq!(trend.len(), 1);
    match &trend[0].shape {
        Shape::Path { points, stroke } => {
            assert_eq!(points.len(), 3);
            assert_eq!(stroke.color, theme.trend_path);
            // time increases left to right
            assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
        }
        other => panic!("trend is not a path: {other:?}"),
    }
    assert!(scene.texts().contains(&"Population (in millions)"));
}

#[test]
fn scatter_limits_span_every_country() {
    let t = table(WORLD);
    let chart = ScatterChart::new(&t, Theme::light()).unwrap();
    let l = chart.limits();
    assert_eq!((l.x_min, l.x_max), (1990.0, 2010.0));
    assert_eq!((l.y_min, l.y_max), (17.1, 281.7));

    // larger population sits higher on the page
    let ys = chart.y_scale();
    assert!(ys.map(281.7) < ys.map(17.1));
}

#[test]
fn unknown_country_is_reported() {
    let t = table(WORLD);
    let chart = ScatterChart::new(&t, Theme::light()).unwrap();
    match chart.build("NZL") {
        Err(ChartError::UnknownCountry(c)) => assert_eq!(c, "NZL"),
        other => panic!("expected UnknownCountry, got {:?}", other.map(|s| s.elements.len())),
    }
    let detail = DetailChart::new(&t, Theme::light()).unwrap();
    assert!(matches!(detail.build("NZL"), Err(ChartError::UnknownCountry(_))));
}

#[test]
fn detail_chart_plots_fertility_against_life_expectancy() {
    let t = table(WORLD);
    let detail = DetailChart::new(&t, Theme::light()).unwrap();
    let scene = detail.build("USA").unwrap();
    assert_eq!((scene.width, scene.height), (300, 300));
    assert_eq!(scene.with_class("dot").count(), 2);
    let texts = scene.texts();
    assert!(texts.contains(&"USA"));
    assert!(texts.contains(&"Fertility Rate"));
    assert!(texts.contains(&"Life Expectancy (years)"));
}

#[test]
fn missing_column_is_a_data_error() {
    let t = table("time,location\n1990,AUS\n");
    match ScatterChart::new(&t, Theme::light()) {
        Err(ChartError::Data(DataError::MissingColumn(c))) => assert_eq!(c, "pop_mlns"),
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("expected an error"),
    }
}

#[test]
fn bars_are_coloured_by_data_kind() {
    let t = table(SEASONS);
    let theme = Theme::light();
    let chart = BarChart::new(&t, theme, BarsConfig::default()).unwrap();
    let scene = chart.build();

    assert_eq!((scene.width, scene.height), (750, 500));
    let fills: Vec<_> = scene
        .with_class("bar")
        .map(|e| match &e.shape {
            Shape::Rect { fill, y, height, .. } => {
                assert!((y + height - 450.0).abs() < 1e-3, "bars stand on the baseline");
                fill.expect("bar fill")
            }
            other => panic!("bar is not a rect: {other:?}"),
        })
        .collect();
    assert_eq!(fills, vec![theme.actual, theme.actual, theme.predicted]);

    // value labels are drawn after every bar
    let last_bar = scene.elements.iter().rposition(|e| e.class == Some("bar")).unwrap();
    let first_label = scene.elements.iter().position(|e| e.class == Some("value-label")).unwrap();
    assert!(first_label > last_bar);
    assert_eq!(scene.with_class("value-label").count(), 3);
}

#[test]
fn bar_tooltips_describe_the_season() {
    let t = table(SEASONS);
    let chart = BarChart::new(&t, Theme::light(), BarsConfig::default()).unwrap();
    let scene = chart.build();
    let tip = scene.with_class("bar").nth(1).and_then(|e| e.tooltip.clone()).unwrap();
    assert_eq!(tip.title, "Season #1991");
    let text = tip.to_text();
    assert!(text.contains("Episodes: 22"));
    assert!(text.contains("Most watched episode: Finale"));
}

#[test]
fn average_line_and_badge_follow_the_data() {
    let t = table(SEASONS);
    let chart = BarChart::new(&t, Theme::light(), BarsConfig::default()).unwrap();
    assert!((chart.average() - 24.9).abs() < 1e-9);

    let scene = chart.build();
    let line = scene.with_class("average").next().expect("average line");
    let expected_y = chart.y_scale().map(chart.average());
    match &line.shape {
        Shape::Line { x1, y1, x2, y2, stroke } => {
            assert_eq!(y1, y2);
            assert!((y1 - expected_y).abs() < 1e-3);
            assert!((x1 - (chart.x_scale().map(1990.0) - 8.0)).abs() < 1e-3);
            assert!((x2 - (chart.x_scale().map(1992.0) + 20.0)).abs() < 1e-3);
            assert_eq!(stroke.dash, Some((8.0, 8.0)));
        }
        other => panic!("average is not a line: {other:?}"),
    }
    assert_eq!(scene.with_class("average-badge").count(), 1);
    assert!(scene.texts().contains(&"24.9"));
}

#[test]
fn legend_and_titles_are_present() {
    let t = table(SEASONS);
    let chart = BarChart::new(&t, Theme::light(), BarsConfig::default()).unwrap();
    let scene = chart.build();
    assert_eq!(scene.with_class("legend").count(), 2);
    let texts = scene.texts();
    for expected in ["Actual", "Predicted", "Viewership Data", "Average Viewership by Season", "Year of Release"] {
        assert!(texts.contains(&expected), "missing {expected}");
    }
    // configured year ticks past the plotted seasons are dropped
    assert!(texts.contains(&"1990"));
    assert!(texts.contains(&"1992"));
    assert!(!texts.contains(&"2014"));
}

#[test]
fn wide_year_range_is_limited_to_plotted_seasons() {
    let t = table(SEASONS);
    let cfg = BarsConfig { tick_start: -2_000_000_000, tick_end: 2_000_000_000, ..BarsConfig::default() };
    let chart = BarChart::new(&t, Theme::light(), cfg).unwrap();
    assert_eq!(chart.year_ticks(), vec![1990.0, 1991.0, 1992.0]);
    assert_eq!(chart.build().with_class("tick-label").filter(|e| matches!(&e.shape, Shape::Text { rotate, .. } if *rotate != 0.0)).count(), 3);

    // a configured window inside the data still wins
    let narrow = BarsConfig { tick_start: 1991, tick_end: 1992, ..BarsConfig::default() };
    let chart = BarChart::new(&t, Theme::light(), narrow).unwrap();
    assert_eq!(chart.year_ticks(), vec![1991.0]);
}

#[test]
fn regression_overlay_is_opt_in() {
    let t = table(SEASONS);
    let off = BarChart::new(&t, Theme::light(), BarsConfig::default()).unwrap().build();
    assert_eq!(off.with_class("regression").count(), 0);

    let cfg = BarsConfig { show_regression: true, ..BarsConfig::default() };
    let chart = BarChart::new(&t, Theme::light(), cfg).unwrap();
    let fit = chart.regression().expect("fit over three seasons");
    assert!(fit.slope < 0.0);
    assert_eq!(chart.build().with_class("regression").count(), 1);
}

#[test]
fn malformed_viewers_are_rejected() {
    let t = table("Year,Avg. Viewers (mil)\n1990,lots\n");
    match BarChart::new(&t, Theme::light(), BarsConfig::default()) {
        Err(ChartError::Data(DataError::InvalidNumber { value, .. })) => assert_eq!(value, "lots"),
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("expected an error"),
    }
}
