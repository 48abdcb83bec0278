use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::ViewportBehavior;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{DismissStrategy, SelectionMode};

use super::validation::validate_interaction_config;

fn default_true() -> bool {
    true
}

/// Gesture that shows a tooltip/crosshair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivationMode {
    SingleTap,
    LongPress,
    DoubleTap,
    Hover,
    /// Tap, long-press and hover all activate.
    #[default]
    Auto,
    None,
}

impl ActivationMode {
    #[must_use]
    pub fn accepts_tap(self) -> bool {
        matches!(self, Self::SingleTap | Self::Auto)
    }

    #[must_use]
    pub fn accepts_long_press(self) -> bool {
        matches!(self, Self::LongPress | Self::Auto)
    }

    #[must_use]
    pub fn accepts_double_tap(self) -> bool {
        self == Self::DoubleTap
    }

    #[must_use]
    pub fn accepts_hover(self) -> bool {
        matches!(self, Self::Hover | Self::Auto)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipBehavior {
    pub activation: ActivationMode,
    pub dismiss_strategy: DismissStrategy,
    /// Delay after release for delayed strategies.
    pub dismiss_delay_ms: u64,
    /// Display time for timer-based strategies.
    pub duration_ms: u64,
    /// Start shown tooltips transparent and let the host fade them in.
    pub animate_fade: bool,
}

impl Default for TooltipBehavior {
    fn default() -> Self {
        Self {
            activation: ActivationMode::Auto,
            dismiss_strategy: DismissStrategy::Smart,
            dismiss_delay_ms: 1_500,
            duration_ms: 3_000,
            animate_fade: false,
        }
    }
}

impl TooltipBehavior {
    #[must_use]
    pub fn dismiss_delay(self) -> Duration {
        Duration::from_millis(self.dismiss_delay_ms)
    }

    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Trackball / multi-series selection tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackballBehavior {
    pub selection_mode: SelectionMode,
    pub snap_radius_px: f64,
}

impl Default for TrackballBehavior {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::Single,
            snap_radius_px: 50.0,
        }
    }
}

/// Interaction configuration snapshot consumed by the state machine.
///
/// Serializable so hosts can keep interaction setup next to their own
/// chart configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    #[serde(default = "default_true")]
    pub tooltip_enabled: bool,
    #[serde(default = "default_true")]
    pub crosshair_enabled: bool,
    #[serde(default = "default_true")]
    pub zoom_enabled: bool,
    #[serde(default = "default_true")]
    pub pan_enabled: bool,
    #[serde(default)]
    pub selection_enabled: bool,
    #[serde(default)]
    pub viewport: ViewportBehavior,
    #[serde(default)]
    pub tooltip: TooltipBehavior,
    #[serde(default)]
    pub trackball: TrackballBehavior,
    #[serde(default)]
    pub live_mode: bool,
    #[serde(default = "default_true")]
    pub double_tap_zoom: bool,
    /// Pointer travel before a press turns into a pan.
    #[serde(default = "default_drag_slop_px")]
    pub drag_slop_px: f64,
    #[serde(default = "default_wheel_zoom_step_ratio")]
    pub wheel_zoom_step_ratio: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            tooltip_enabled: true,
            crosshair_enabled: true,
            zoom_enabled: true,
            pan_enabled: true,
            selection_enabled: false,
            viewport: ViewportBehavior::default(),
            tooltip: TooltipBehavior::default(),
            trackball: TrackballBehavior::default(),
            live_mode: false,
            double_tap_zoom: true,
            drag_slop_px: default_drag_slop_px(),
            wheel_zoom_step_ratio: default_wheel_zoom_step_ratio(),
        }
    }
}

impl InteractionConfig {
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipBehavior) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: ViewportBehavior) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_trackball(mut self, trackball: TrackballBehavior) -> Self {
        self.trackball = trackball;
        self
    }

    #[must_use]
    pub fn with_live_mode(mut self, live_mode: bool) -> Self {
        self.live_mode = live_mode;
        self
    }

    /// Zoom is active only with the master toggle on and an axis enabled.
    #[must_use]
    pub fn allows_zoom(self) -> bool {
        self.zoom_enabled && self.viewport.zoom_mode.is_enabled()
    }

    #[must_use]
    pub fn allows_pan(self) -> bool {
        self.pan_enabled && self.viewport.pan_mode.is_enabled()
    }

    #[must_use]
    pub fn shows_episodes(self) -> bool {
        self.tooltip_enabled || self.crosshair_enabled
    }

    pub fn validate(self) -> ChartResult<Self> {
        validate_interaction_config(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON. Missing fields take defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

fn default_drag_slop_px() -> f64 {
    4.0
}

fn default_wheel_zoom_step_ratio() -> f64 {
    0.1
}
