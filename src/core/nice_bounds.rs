use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Tick count aimed for when auto-scaling an axis.
pub const DEFAULT_TARGET_TICKS: usize = 5;

/// Multipliers considered "nice", scaled by the interval's power of ten.
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Relative tolerance used when matching a normalized interval to a nice step.
const NICE_STEP_TOLERANCE: f64 = 1e-9;

/// Human-friendly axis range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NiceBounds {
    pub min: f64,
    pub max: f64,
    pub interval: f64,
}

impl NiceBounds {
    /// Number of intervals between `min` and `max`.
    #[must_use]
    pub fn tick_count(self) -> usize {
        ((self.max - self.min) / self.interval).round() as usize
    }

    /// Tick values from `min` to `max` inclusive.
    #[must_use]
    pub fn ticks(self) -> Vec<f64> {
        (0..=self.tick_count())
            .map(|step| self.min + step as f64 * self.interval)
            .collect()
    }
}

/// Rounds `[data_min, data_max]` outward to nice bounds using the default tick target.
pub fn calculate_nice_bounds(data_min: f64, data_max: f64) -> ChartResult<NiceBounds> {
    calculate_nice_bounds_with_ticks(data_min, data_max, DEFAULT_TARGET_TICKS)
}

pub fn calculate_nice_bounds_with_ticks(
    data_min: f64,
    data_max: f64,
    target_ticks: usize,
) -> ChartResult<NiceBounds> {
    if !data_min.is_finite() || !data_max.is_finite() || data_min > data_max {
        return Err(ChartError::InvalidRange {
            min: data_min,
            max: data_max,
        });
    }

    let (low, high) = if data_min == data_max {
        synthesize_range(data_min)
    } else {
        (data_min, data_max)
    };

    let target = target_ticks.max(1) as f64;
    // Dividing before subtracting keeps the span finite near f64::MAX.
    let rough_interval = high / target - low / target;
    let interval = nice_interval(rough_interval);

    let mut min = snap_down(low, interval);
    let mut max = snap_up(high, interval);
    if min > low {
        min -= interval;
    }
    if max < high {
        max += interval;
    }
    // Absorbed steps (huge magnitude, tiny interval) fall back to the raw edge.
    if !min.is_finite() || min > low {
        min = low;
    }
    if !max.is_finite() || max < high {
        max = high;
    }

    Ok(NiceBounds { min, max, interval })
}

/// Symmetric fallback span around a single value.
fn synthesize_range(value: f64) -> (f64, f64) {
    if value == 0.0 {
        return (-1.0, 1.0);
    }
    let pad = value.abs() * 0.1;
    let low = value - pad;
    let high = value + pad;
    (
        if low.is_finite() { low } else { f64::MIN },
        if high.is_finite() { high } else { f64::MAX },
    )
}

/// Rounds `rough` up to the next `{1, 2, 2.5, 5, 10} x 10^n`.
fn nice_interval(rough: f64) -> f64 {
    if !rough.is_finite() || rough <= 0.0 {
        return f64::MIN_POSITIVE;
    }
    let magnitude = 10f64.powf(rough.log10().floor());
    let normalized = rough / magnitude;
    if magnitude == 0.0 || !normalized.is_finite() {
        return rough;
    }

    let step = NICE_STEPS
        .iter()
        .copied()
        .find(|step| *step >= normalized * (1.0 - NICE_STEP_TOLERANCE))
        .unwrap_or(10.0);
    let interval = step * magnitude;
    if interval.is_finite() && interval >= rough * (1.0 - NICE_STEP_TOLERANCE) {
        interval
    } else {
        rough
    }
}

fn snap_down(value: f64, interval: f64) -> f64 {
    (value / interval).floor() * interval
}

fn snap_up(value: f64, interval: f64) -> f64 {
    (value / interval).ceil() * interval
}
