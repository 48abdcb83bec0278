use chart_interact::api::{ActivationMode, InteractionConfig, TooltipBehavior};
use chart_interact::core::{AxisMode, EdgeBehavior, ViewportBehavior};
use chart_interact::interaction::{DismissStrategy, SelectionMode};

#[test]
fn config_json_roundtrip_preserves_values() {
    let config = InteractionConfig {
        selection_enabled: true,
        double_tap_zoom: false,
        drag_slop_px: 8.0,
        ..InteractionConfig::default()
    }
    .with_tooltip(TooltipBehavior {
        activation: ActivationMode::LongPress,
        dismiss_strategy: DismissStrategy::OnTimer,
        dismiss_delay_ms: 250,
        duration_ms: 5_000,
        animate_fade: true,
    })
    .with_viewport(ViewportBehavior {
        zoom_mode: AxisMode::X,
        edge_behavior: EdgeBehavior::Bounce,
        max_zoom: 20.0,
        ..ViewportBehavior::default()
    })
    .with_live_mode(true);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = InteractionConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn missing_fields_take_defaults() {
    let parsed = InteractionConfig::from_json_str(r#"{"zoom_enabled": false}"#).expect("parse");
    assert!(!parsed.zoom_enabled);
    assert!(parsed.tooltip_enabled);
    assert!(parsed.crosshair_enabled);
    assert!(parsed.pan_enabled);
    assert!(parsed.double_tap_zoom);
    assert_eq!(parsed.tooltip, TooltipBehavior::default());
    assert_eq!(parsed.viewport, ViewportBehavior::default());
    assert_eq!(parsed.drag_slop_px, 4.0);

    let parsed = InteractionConfig::from_json_str("{}").expect("parse");
    assert_eq!(parsed, InteractionConfig::default());
}

#[test]
fn nested_sections_accept_partial_objects() {
    let parsed = InteractionConfig::from_json_str(
        r#"{
            "tooltip": { "dismiss_strategy": "on_release_delayed", "activation": "hover" },
            "trackball": { "selection_mode": "shared" },
            "viewport": { "pan_mode": "none", "edge_behavior": "free" }
        }"#,
    )
    .expect("parse");

    assert_eq!(parsed.tooltip.dismiss_strategy, DismissStrategy::OnReleaseDelayed);
    assert_eq!(parsed.tooltip.activation, ActivationMode::Hover);
    assert_eq!(parsed.tooltip.dismiss_delay_ms, 1_500);
    assert_eq!(parsed.trackball.selection_mode, SelectionMode::Shared);
    assert_eq!(parsed.trackball.snap_radius_px, 50.0);
    assert_eq!(parsed.viewport.pan_mode, AxisMode::None);
    assert_eq!(parsed.viewport.edge_behavior, EdgeBehavior::Free);
    assert!(!parsed.allows_pan());
    assert!(parsed.allows_zoom());
}

#[test]
fn invalid_values_are_rejected_as_config_errors() {
    let err =
        InteractionConfig::from_json_str(r#"{"viewport": {"min_zoom": 4.0, "max_zoom": 2.0}}"#)
            .expect_err("inverted zoom bounds must fail");
    assert!(format!("{err}").contains("invalid config"));
    assert!(format!("{err}").contains("max_zoom"));

    let err = InteractionConfig::from_json_str(r#"{"trackball": {"snap_radius_px": -1.0}}"#)
        .expect_err("negative radius must fail");
    assert!(format!("{err}").contains("snap_radius_px"));

    let err = InteractionConfig::from_json_str(r#"{"tooltip": {"dismiss_strategy": "sometimes"}}"#)
        .expect_err("unknown strategy must fail");
    assert!(format!("{err}").contains("failed to parse config"));

    let err = InteractionConfig::from_json_str("not json").expect_err("garbage must fail");
    assert!(format!("{err}").contains("invalid config"));
}

#[test]
fn validate_rejects_non_finite_tuning() {
    let config = InteractionConfig {
        wheel_zoom_step_ratio: 0.0,
        ..InteractionConfig::default()
    };
    let err = config.validate().expect_err("zero ratio must fail");
    assert!(format!("{err}").contains("wheel_zoom_step_ratio"));

    let config = InteractionConfig {
        drag_slop_px: f64::NAN,
        ..InteractionConfig::default()
    };
    assert!(config.validate().is_err());
    assert!(InteractionConfig::default().validate().is_ok());
}

#[test]
fn zoom_and_pan_gates_combine_toggle_and_axis_mode() {
    let config = InteractionConfig::default().with_viewport(ViewportBehavior {
        zoom_mode: AxisMode::None,
        ..ViewportBehavior::default()
    });
    assert!(!config.allows_zoom());
    assert!(config.allows_pan());

    let config = InteractionConfig {
        pan_enabled: false,
        ..InteractionConfig::default()
    };
    assert!(!config.allows_pan());

    let config = InteractionConfig {
        tooltip_enabled: false,
        crosshair_enabled: false,
        ..InteractionConfig::default()
    };
    assert!(!config.shows_episodes());
}
