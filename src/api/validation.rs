use crate::error::{ChartError, ChartResult};

use super::InteractionConfig;

pub(super) fn validate_interaction_config(
    config: InteractionConfig,
) -> ChartResult<InteractionConfig> {
    config.viewport.validate()?;
    if !config.trackball.snap_radius_px.is_finite() || config.trackball.snap_radius_px < 0.0 {
        return Err(ChartError::InvalidConfig(
            "trackball snap_radius_px must be finite and >= 0".to_owned(),
        ));
    }
    if !config.drag_slop_px.is_finite() || config.drag_slop_px < 0.0 {
        return Err(ChartError::InvalidConfig(
            "drag_slop_px must be finite and >= 0".to_owned(),
        ));
    }
    if !config.wheel_zoom_step_ratio.is_finite() || config.wheel_zoom_step_ratio <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "wheel_zoom_step_ratio must be finite and > 0".to_owned(),
        ));
    }
    Ok(config)
}

pub(super) fn validate_device_pixel_ratio(device_pixel_ratio: f64) -> ChartResult<f64> {
    if !device_pixel_ratio.is_finite() || device_pixel_ratio <= 0.0 {
        return Err(ChartError::InvalidData(
            "device pixel ratio must be finite and > 0".to_owned(),
        ));
    }
    Ok(device_pixel_ratio)
}
