use chart_interact::ChartError;
use chart_interact::core::{calculate_nice_bounds, calculate_nice_bounds_with_ticks};

#[test]
fn nice_bounds_round_outward_to_friendly_steps() {
    let bounds = calculate_nice_bounds(3.0, 97.0).expect("bounds");
    assert_eq!(bounds.min, 0.0);
    assert_eq!(bounds.max, 100.0);
    assert_eq!(bounds.interval, 20.0);
    assert_eq!(bounds.tick_count(), 5);
    assert_eq!(bounds.ticks(), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
}

#[test]
fn nice_bounds_keep_already_nice_edges() {
    let bounds = calculate_nice_bounds(0.0, 100.0).expect("bounds");
    assert_eq!((bounds.min, bounds.max), (0.0, 100.0));
}

#[test]
fn nice_bounds_handle_negative_ranges() {
    let bounds = calculate_nice_bounds(-43.0, -7.0).expect("bounds");
    assert!(bounds.min <= -43.0);
    assert!(bounds.max >= -7.0);
    assert_eq!(bounds.interval, 10.0);
}

#[test]
fn nice_bounds_cover_one_billion() {
    let bounds = calculate_nice_bounds(0.0, 1_000_000_000.0).expect("bounds");
    assert!(bounds.min.is_finite());
    assert!(bounds.max.is_finite());
    assert!(bounds.max >= 1_000_000_000.0);
    assert!(bounds.min <= 0.0);
}

#[test]
fn degenerate_input_synthesizes_a_range() {
    let zero = calculate_nice_bounds(0.0, 0.0).expect("zero bounds");
    assert_eq!((zero.min, zero.max), (-1.0, 1.0));

    let five = calculate_nice_bounds(5.0, 5.0).expect("single value bounds");
    assert!(five.min < 5.0);
    assert!(five.max > 5.0);
    assert!(five.min.is_finite() && five.max.is_finite());
}

#[test]
fn huge_degenerate_input_stays_finite() {
    let bounds = calculate_nice_bounds(f64::MAX, f64::MAX).expect("bounds");
    assert!(bounds.min.is_finite());
    assert!(bounds.max.is_finite());
    assert!(bounds.max > bounds.min);
}

#[test]
fn inverted_or_non_finite_range_is_rejected() {
    let err = calculate_nice_bounds(10.0, 1.0).expect_err("inverted must fail");
    assert!(matches!(err, ChartError::InvalidRange { .. }));
    assert!(format!("{err}").contains("invalid range"));

    assert!(calculate_nice_bounds(f64::NAN, 1.0).is_err());
    assert!(calculate_nice_bounds(0.0, f64::INFINITY).is_err());
}

#[test]
fn custom_tick_target_changes_interval() {
    let bounds = calculate_nice_bounds_with_ticks(0.0, 100.0, 10).expect("bounds");
    assert_eq!(bounds.interval, 10.0);
    assert_eq!(bounds.tick_count(), 10);
}
