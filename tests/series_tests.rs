use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use chart_interact::core::{DataPoint, Series, SeriesSet};

fn series(name: &str, points: &[(f64, f64)]) -> Series {
    Series::new(
        name,
        points.iter().map(|&(x, y)| DataPoint::new(x, y)).collect(),
    )
    .expect("valid series")
}

#[test]
fn data_point_from_decimal_time_is_supported() {
    let time = Utc
        .timestamp_opt(1_700_000_000, 0)
        .single()
        .expect("valid ts");
    let point = DataPoint::from_decimal_time(time, Decimal::new(12345, 2)).expect("point");

    assert!((point.x - 1_700_000_000.0).abs() <= 1e-6);
    assert!((point.y - 123.45).abs() <= 1e-9);
    assert!(point.label.is_none());
}

#[test]
fn series_rejects_non_finite_samples_and_empty_names() {
    let err = Series::new("s", vec![DataPoint::new(0.0, f64::NAN)]).expect_err("nan must fail");
    assert!(format!("{err}").contains("finite"));

    let err = Series::new("", Vec::new()).expect_err("empty name must fail");
    assert!(format!("{err}").contains("name"));
}

#[test]
fn series_records_sortedness() {
    assert!(series("a", &[(0.0, 1.0), (1.0, 2.0), (1.0, 3.0)]).is_sorted_by_x());
    assert!(!series("b", &[(2.0, 1.0), (0.0, 2.0)]).is_sorted_by_x());
    assert!(series("c", &[]).is_sorted_by_x());
}

#[test]
fn series_set_replaces_same_name_in_place() {
    let mut set: SeriesSet = [
        series("first", &[(0.0, 0.0)]),
        series("second", &[(1.0, 1.0)]),
    ]
    .into_iter()
    .collect();

    set.insert(series("first", &[(5.0, 5.0), (6.0, 6.0)]));

    let names: Vec<&str> = set.iter().map(Series::name).collect();
    assert_eq!(names, vec!["first", "second"]);
    assert_eq!(set.get("first").expect("first").len(), 2);
    assert_eq!(set.total_points(), 3);

    assert!(set.remove("first").is_some());
    assert!(set.remove("first").is_none());
    assert_eq!(set.len(), 1);
}

#[test]
fn visible_extents_skip_hidden_and_empty_series() {
    let mut set: SeriesSet = [
        series("low", &[(0.0, -5.0), (10.0, 5.0)]),
        series("wide", &[(-100.0, 0.0), (100.0, 1_000.0)]),
        series("empty", &[]),
    ]
    .into_iter()
    .collect();

    assert!(set.set_visible("wide", false));
    assert!(!set.set_visible("missing", false));

    let extents = set.visible_extents().expect("extents");
    assert_eq!(
        (extents.x_min, extents.x_max, extents.y_min, extents.y_max),
        (0.0, 10.0, -5.0, 5.0)
    );

    set.set_visible("low", false);
    assert!(set.visible_extents().is_none());
}
