use approx::assert_relative_eq;
use chart_interact::core::{
    AxisMode, CoordinateSystem, DataWindow, EdgeBehavior, Rect, ViewportBehavior,
    ViewportController,
};

fn base() -> CoordinateSystem {
    CoordinateSystem::new(
        Rect::new(0.0, 0.0, 400.0, 300.0),
        DataWindow::new(0.0, 100.0, 0.0, 100.0),
        1.0,
    )
    .expect("base system")
}

fn controller(behavior: ViewportBehavior) -> ViewportController {
    ViewportController::new(base(), behavior).expect("viewport controller")
}

#[test]
fn zoom_in_shrinks_window_around_center() {
    let mut viewport = controller(ViewportBehavior::default());
    assert!(viewport.zoom_in(Some(2.0)).expect("zoom"));

    let window = viewport.visible_window();
    assert_relative_eq!(window.x_min, 25.0);
    assert_relative_eq!(window.x_max, 75.0);
    assert_relative_eq!(window.y_min, 25.0);
    assert_relative_eq!(window.y_max, 75.0);
    assert_eq!(viewport.effective().window(), window);
    assert!(viewport.is_zoomed());
}

#[test]
fn default_step_is_applied_without_factor() {
    let mut viewport = controller(ViewportBehavior::default());
    viewport.zoom_in(None).expect("zoom");
    assert_relative_eq!(viewport.zoom_level(), 1.2);
    viewport.zoom_out(None).expect("zoom out");
    assert_relative_eq!(viewport.zoom_level(), 1.0);
}

#[test]
fn zoom_is_clamped_to_configured_limits() {
    let mut viewport = controller(ViewportBehavior::default());
    for _ in 0..40 {
        viewport.zoom_in(None).expect("zoom in");
    }
    assert_relative_eq!(viewport.zoom_level(), 10.0);
    assert!(!viewport.zoom_in(None).expect("zoom at max"));

    for _ in 0..40 {
        viewport.zoom_out(None).expect("zoom out");
    }
    assert_relative_eq!(viewport.zoom_level(), 1.0);
    assert!(!viewport.zoom_out(None).expect("zoom at min"));
}

#[test]
fn pivot_zoom_keeps_pivot_in_place() {
    let mut viewport = controller(ViewportBehavior::default());
    viewport
        .zoom_by(2.0, Some((0.0, 0.0)))
        .expect("pivot zoom");

    let window = viewport.visible_window();
    assert_relative_eq!(window.x_min, 0.0, epsilon = 1e-9);
    assert_relative_eq!(window.x_max, 50.0, epsilon = 1e-9);
    assert_relative_eq!(window.y_min, 0.0, epsilon = 1e-9);
    assert_relative_eq!(window.y_max, 50.0, epsilon = 1e-9);
}

#[test]
fn clamp_keeps_window_inside_extents() {
    let mut viewport = controller(ViewportBehavior::default());
    viewport.zoom_in(Some(2.0)).expect("zoom");

    // Dragging right by 40px at 8px/unit reveals 5 units of smaller X.
    assert!(viewport.pan(40.0, 0.0).expect("pan"));
    assert_relative_eq!(viewport.visible_window().x_min, 20.0, epsilon = 1e-9);

    viewport.pan(10_000.0, -10_000.0).expect("pan far");
    let window = viewport.visible_window();
    assert!(window.is_within(base().window()));
    assert_relative_eq!(window.x_min, 0.0, epsilon = 1e-9);
    assert_relative_eq!(window.y_min, 0.0, epsilon = 1e-9);
}

#[test]
fn pan_is_a_no_op_at_identity_zoom_under_clamp() {
    let mut viewport = controller(ViewportBehavior::default());
    assert!(!viewport.pan(50.0, 50.0).expect("pan"));
    assert_eq!(viewport.visible_window(), base().window());
}

#[test]
fn bounce_exposes_overflow_and_settles_back() {
    let mut viewport = controller(ViewportBehavior {
        edge_behavior: EdgeBehavior::Bounce,
        ..ViewportBehavior::default()
    });
    viewport.zoom_in(Some(2.0)).expect("zoom");
    viewport.pan(400.0, 0.0).expect("pan");

    let overflow = viewport.overflow();
    assert_relative_eq!(overflow.x, -25.0, epsilon = 1e-9);
    assert_relative_eq!(overflow.y, 0.0, epsilon = 1e-9);

    let removed = viewport.settle().expect("settle");
    assert_relative_eq!(removed.x, -25.0, epsilon = 1e-9);
    assert!(viewport.overflow().is_zero());
    assert_relative_eq!(viewport.visible_window().x_min, 0.0, epsilon = 1e-9);
    assert_relative_eq!(viewport.visible_window().x_max, 50.0, epsilon = 1e-9);
}

#[test]
fn free_edges_never_settle() {
    let mut viewport = controller(ViewportBehavior {
        edge_behavior: EdgeBehavior::Free,
        ..ViewportBehavior::default()
    });
    viewport.pan(400.0, 0.0).expect("pan");
    assert_relative_eq!(viewport.visible_window().x_min, -100.0, epsilon = 1e-9);
    assert!(viewport.settle().expect("settle").is_zero());
    assert!(!viewport.overflow().is_zero());
}

#[test]
fn axis_modes_gate_zoom_and_pan() {
    let mut viewport = controller(ViewportBehavior {
        zoom_mode: AxisMode::X,
        pan_mode: AxisMode::None,
        ..ViewportBehavior::default()
    });
    viewport.zoom_in(Some(2.0)).expect("zoom");
    let window = viewport.visible_window();
    assert_relative_eq!(window.x_max - window.x_min, 50.0);
    assert_relative_eq!(window.y_max - window.y_min, 100.0);
    assert!(!viewport.pan(40.0, 40.0).expect("pan"));

    let mut frozen = controller(ViewportBehavior {
        zoom_mode: AxisMode::None,
        ..ViewportBehavior::default()
    });
    assert!(!frozen.zoom_in(Some(2.0)).expect("zoom"));
    assert_relative_eq!(frozen.zoom_level(), 1.0);
}

#[test]
fn reset_restores_full_extents() {
    let mut viewport = controller(ViewportBehavior::default());
    viewport.zoom_by(3.0, Some((90.0, 10.0))).expect("zoom");
    assert!(viewport.reset());
    assert_eq!(viewport.visible_window(), base().window());
    assert_eq!(viewport.effective(), &base());
    assert!(!viewport.reset());
}

#[test]
fn base_change_keeps_zoom_level() {
    let mut viewport = controller(ViewportBehavior::default());
    viewport.zoom_in(Some(2.0)).expect("zoom");

    let wider = base()
        .with_window(DataWindow::new(0.0, 200.0, 0.0, 100.0))
        .expect("wider");
    viewport.set_base(wider).expect("set base");
    assert_relative_eq!(viewport.zoom_level(), 2.0);
    assert_relative_eq!(
        viewport.visible_window().x_max - viewport.visible_window().x_min,
        100.0
    );
}

#[test]
fn invalid_behavior_is_rejected() {
    let err = ViewportController::new(
        base(),
        ViewportBehavior {
            min_zoom: 0.0,
            ..ViewportBehavior::default()
        },
    )
    .expect_err("zero min zoom must fail");
    assert!(format!("{err}").contains("min_zoom"));

    let mut viewport = controller(ViewportBehavior::default());
    assert!(viewport.zoom_by(f64::NAN, None).is_err());
    assert!(viewport.pan(f64::INFINITY, 0.0).is_err());
}

#[test]
fn reset_state_is_unzoomed_when_min_zoom_exceeds_one() {
    let mut viewport = controller(ViewportBehavior {
        min_zoom: 2.0,
        ..ViewportBehavior::default()
    });
    assert_relative_eq!(viewport.zoom_level(), 2.0);
    assert!(!viewport.is_zoomed());

    assert!(viewport.zoom_in(None).expect("zoom"));
    assert!(viewport.is_zoomed());

    assert!(viewport.reset());
    assert!(!viewport.is_zoomed());
}
