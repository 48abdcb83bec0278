use crate::error::{ChartError, ChartResult};

const WHEEL_STEP_UNITS: f64 = 120.0;

/// Converts a wheel delta into a zoom multiplier. Scrolling up (negative
/// delta) zooms in.
pub(super) fn resolve_wheel_zoom_factor(
    wheel_delta_y: f64,
    zoom_step_ratio: f64,
) -> ChartResult<Option<f64>> {
    if !wheel_delta_y.is_finite() {
        return Err(ChartError::InvalidData(
            "wheel delta must be finite".to_owned(),
        ));
    }
    if wheel_delta_y == 0.0 {
        return Ok(None);
    }

    let normalized_steps = wheel_delta_y / WHEEL_STEP_UNITS;
    let base = 1.0 + zoom_step_ratio;
    let factor = base.powf(-normalized_steps);
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ChartError::InvalidData(
            "computed wheel zoom factor must be finite and > 0".to_owned(),
        ));
    }
    Ok(Some(factor))
}

/// Turns a cumulative pinch scale into the multiplier since the previous update.
pub(super) fn resolve_pinch_zoom_step(
    previous_scale: f64,
    current_scale: f64,
) -> ChartResult<Option<f64>> {
    if !current_scale.is_finite() || current_scale <= 0.0 {
        return Err(ChartError::InvalidData(
            "pinch zoom factor must be finite and > 0".to_owned(),
        ));
    }
    if !previous_scale.is_finite() || previous_scale <= 0.0 {
        return Err(ChartError::InvalidData(
            "previous pinch zoom factor must be finite and > 0".to_owned(),
        ));
    }
    let step = current_scale / previous_scale;
    if (step - 1.0).abs() <= f64::EPSILON {
        return Ok(None);
    }
    Ok(Some(step))
}
