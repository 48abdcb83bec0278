use approx::assert_relative_eq;
use chart_interact::ChartError;
use chart_interact::core::{CoordinateSystem, DataWindow, Rect, calculate_nice_bounds};

fn system() -> CoordinateSystem {
    CoordinateSystem::new(
        Rect::new(40.0, 20.0, 400.0, 300.0),
        DataWindow::new(0.0, 100.0, 0.0, 100.0),
        2.0,
    )
    .expect("coordinate system")
}

#[test]
fn data_maps_into_chart_area_with_inverted_y() {
    let cs = system();

    assert_relative_eq!(cs.data_to_screen_x(0.0), 40.0);
    assert_relative_eq!(cs.data_to_screen_x(100.0), 440.0);
    assert_relative_eq!(cs.data_to_screen_y(0.0), 320.0);
    assert_relative_eq!(cs.data_to_screen_y(100.0), 20.0);

    let (x, y) = cs.data_to_screen(50.0, 50.0);
    assert_relative_eq!(x, 240.0);
    assert_relative_eq!(y, 170.0);
}

#[test]
fn screen_maps_back_to_data() {
    let cs = system();
    let (x, y) = cs.screen_to_data(240.0, 170.0);
    assert_relative_eq!(x, 50.0);
    assert_relative_eq!(y, 50.0);
    assert_relative_eq!(cs.screen_to_data_y(20.0), 100.0);
}

#[test]
fn scales_and_physical_pixels_follow_area_and_ratio() {
    let cs = system();
    assert_relative_eq!(cs.x_scale(), 4.0);
    assert_relative_eq!(cs.y_scale(), 3.0);
    assert_relative_eq!(cs.to_physical_pixels(10.0), 20.0);
    assert!(cs.contains_screen(40.0, 20.0));
    assert!(!cs.contains_screen(39.0, 20.0));
}

#[test]
fn builders_produce_new_systems() {
    let cs = system();
    let zoomed = cs
        .with_window(DataWindow::new(25.0, 75.0, 25.0, 75.0))
        .expect("window");
    assert_relative_eq!(zoomed.data_to_screen_x(50.0), 240.0);
    assert_relative_eq!(zoomed.x_scale(), 8.0);

    let resized = cs
        .with_chart_area(Rect::new(0.0, 0.0, 200.0, 100.0))
        .expect("area");
    assert_relative_eq!(resized.data_to_screen_x(100.0), 200.0);

    assert!(cs.with_device_pixel_ratio(0.0).is_err());
}

#[test]
fn nice_bounds_feed_a_coordinate_system() {
    let x = calculate_nice_bounds(3.0, 97.0).expect("x bounds");
    let y = calculate_nice_bounds(-5.0, 42.0).expect("y bounds");
    let cs = CoordinateSystem::from_nice_bounds(Rect::new(0.0, 0.0, 500.0, 250.0), x, y, 1.0)
        .expect("system");
    assert_relative_eq!(cs.window().x_min, 0.0);
    assert_relative_eq!(cs.window().x_max, 100.0);
    assert!(cs.window().y_min <= -5.0);
    assert!(cs.window().y_max >= 42.0);
}

#[test]
fn degenerate_inputs_fail_at_construction() {
    let window = DataWindow::new(0.0, 100.0, 0.0, 100.0);

    let err = CoordinateSystem::new(Rect::new(0.0, 0.0, 0.0, 300.0), window, 1.0)
        .expect_err("zero width must fail");
    assert!(matches!(err, ChartError::DegenerateCoordinateSystem(_)));
    assert!(format!("{err}").contains("chart area"));

    let err = CoordinateSystem::new(
        Rect::new(0.0, 0.0, 400.0, 300.0),
        DataWindow::new(5.0, 5.0, 0.0, 1.0),
        1.0,
    )
    .expect_err("zero x span must fail");
    assert!(format!("{err}").contains("data window"));

    assert!(
        CoordinateSystem::new(
            Rect::new(0.0, 0.0, 400.0, 300.0),
            DataWindow::new(0.0, f64::NAN, 0.0, 1.0),
            1.0,
        )
        .is_err()
    );
    assert!(
        CoordinateSystem::new(
            Rect::new(0.0, 0.0, 400.0, 300.0),
            DataWindow::new(-f64::MAX, f64::MAX, 0.0, 1.0),
            1.0,
        )
        .is_err()
    );
}
