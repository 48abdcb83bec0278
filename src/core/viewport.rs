use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::coordinate_system::CoordinateSystem;
use crate::core::primitives::approx_equal;
use crate::core::types::DataWindow;
use crate::error::{ChartError, ChartResult};

/// Axes a zoom or pan gesture may act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AxisMode {
    None,
    X,
    Y,
    #[default]
    Both,
}

impl AxisMode {
    #[must_use]
    pub fn allows_x(self) -> bool {
        matches!(self, Self::X | Self::Both)
    }

    #[must_use]
    pub fn allows_y(self) -> bool {
        matches!(self, Self::Y | Self::Both)
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self != Self::None
    }
}

/// What happens when a pan would move the window past the data extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EdgeBehavior {
    /// Window never leaves the data extents.
    #[default]
    Clamp,
    /// Window may overshoot while dragging; `settle` snaps it back.
    Bounce,
    /// No constraint.
    Free,
}

/// Zoom/pan limits and axis gating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportBehavior {
    pub zoom_mode: AxisMode,
    pub pan_mode: AxisMode,
    pub edge_behavior: EdgeBehavior,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Multiplier applied by a single zoom-in step.
    pub zoom_step: f64,
}

impl Default for ViewportBehavior {
    fn default() -> Self {
        Self {
            zoom_mode: AxisMode::Both,
            pan_mode: AxisMode::Both,
            edge_behavior: EdgeBehavior::Clamp,
            min_zoom: 1.0,
            max_zoom: 10.0,
            zoom_step: 1.2,
        }
    }
}

impl ViewportBehavior {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.min_zoom.is_finite() || self.min_zoom <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "viewport min_zoom must be finite and > 0".to_owned(),
            ));
        }
        if !self.max_zoom.is_finite() || self.max_zoom < self.min_zoom {
            return Err(ChartError::InvalidConfig(
                "viewport max_zoom must be finite and >= min_zoom".to_owned(),
            ));
        }
        if !self.zoom_step.is_finite() || self.zoom_step <= 1.0 {
            return Err(ChartError::InvalidConfig(
                "viewport zoom_step must be finite and > 1".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Zoom factor and pan offset relative to the base coordinate system.
///
/// Pan offsets are the displacement of the visible window center from the
/// full-extent center, expressed as a fraction of the visible span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub zoom_level: f64,
    pub pan_offset_x: f64,
    pub pan_offset_y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom_level: 1.0,
            pan_offset_x: 0.0,
            pan_offset_y: 0.0,
        }
    }
}

/// Signed data-space distance the visible window extends past the full extents.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanOverflow {
    pub x: f64,
    pub y: f64,
}

impl PanOverflow {
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Owns zoom/pan state and derives the effective coordinate system.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    behavior: ViewportBehavior,
    base: CoordinateSystem,
    state: ViewportState,
    effective: CoordinateSystem,
}

impl ViewportController {
    pub fn new(base: CoordinateSystem, behavior: ViewportBehavior) -> ChartResult<Self> {
        let behavior = behavior.validate()?;
        let mut controller = Self {
            behavior,
            base,
            state: ViewportState::default(),
            effective: base,
        };
        controller.state.zoom_level = controller.initial_zoom();
        controller.rebuild()?;
        Ok(controller)
    }

    #[must_use]
    pub fn behavior(&self) -> ViewportBehavior {
        self.behavior
    }

    #[must_use]
    pub fn base(&self) -> &CoordinateSystem {
        &self.base
    }

    #[must_use]
    pub fn effective(&self) -> &CoordinateSystem {
        &self.effective
    }

    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.state.zoom_level
    }

    /// Whether the zoom level differs from the level `reset` restores.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        !approx_equal(self.state.zoom_level, self.initial_zoom())
    }

    /// Swaps the base system (layout/data change) while keeping zoom and pan.
    pub fn set_base(&mut self, base: CoordinateSystem) -> ChartResult<()> {
        let mut next = self.clone();
        next.base = base;
        if next.behavior.edge_behavior == EdgeBehavior::Clamp {
            next.clamp_pan();
        }
        next.rebuild()?;
        *self = next;
        Ok(())
    }

    pub fn zoom_in(&mut self, factor: Option<f64>) -> ChartResult<bool> {
        let step = self.resolve_step(factor)?;
        self.zoom_by(step, None)
    }

    pub fn zoom_out(&mut self, factor: Option<f64>) -> ChartResult<bool> {
        let step = self.resolve_step(factor)?;
        self.zoom_by(1.0 / step, None)
    }

    /// Multiplies the zoom level by `multiplier`, keeping `pivot` (data space)
    /// at the same relative position. `None` pivots on the window center.
    pub fn zoom_by(&mut self, multiplier: f64, pivot: Option<(f64, f64)>) -> ChartResult<bool> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom multiplier must be finite and > 0".to_owned(),
            ));
        }
        let mode = self.behavior.zoom_mode;
        if !mode.is_enabled() {
            return Ok(false);
        }

        let target = (self.state.zoom_level * multiplier)
            .clamp(self.behavior.min_zoom, self.behavior.max_zoom);
        if approx_equal(target, self.state.zoom_level) {
            return Ok(false);
        }

        let old = self.visible_window();
        let full = self.base.window();
        let (pivot_x, pivot_y) = pivot.unwrap_or((old.x_center(), old.y_center()));

        if mode.allows_x() {
            let span = full.x_span() / target;
            let min = pivot_x - (pivot_x - old.x_min) * (span / old.x_span());
            self.state.pan_offset_x = (min + span / 2.0 - full.x_center()) / span;
        }
        if mode.allows_y() {
            let span = full.y_span() / target;
            let min = pivot_y - (pivot_y - old.y_min) * (span / old.y_span());
            self.state.pan_offset_y = (min + span / 2.0 - full.y_center()) / span;
        }
        self.state.zoom_level = target;

        if self.behavior.edge_behavior == EdgeBehavior::Clamp {
            self.clamp_pan();
        }
        self.rebuild()?;
        trace!(zoom_level = target, "viewport zoom changed");
        Ok(true)
    }

    /// Pans by a pointer displacement in screen pixels.
    ///
    /// Dragging right reveals smaller X; dragging down reveals larger Y.
    pub fn pan(&mut self, delta_screen_x: f64, delta_screen_y: f64) -> ChartResult<bool> {
        if !delta_screen_x.is_finite() || !delta_screen_y.is_finite() {
            return Err(ChartError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }
        let mode = self.behavior.pan_mode;
        if !mode.is_enabled() {
            return Ok(false);
        }

        let before = self.state;
        let window = self.visible_window();
        if mode.allows_x() && delta_screen_x != 0.0 {
            let delta_data = -delta_screen_x / self.effective.x_scale();
            self.state.pan_offset_x += delta_data / window.x_span();
        }
        if mode.allows_y() && delta_screen_y != 0.0 {
            let delta_data = delta_screen_y / self.effective.y_scale();
            self.state.pan_offset_y += delta_data / window.y_span();
        }

        if self.behavior.edge_behavior == EdgeBehavior::Clamp {
            self.clamp_pan();
        }
        if self.state == before {
            return Ok(false);
        }
        self.rebuild()?;
        Ok(true)
    }

    /// Restores the unzoomed identity state. Returns `true` when anything changed.
    pub fn reset(&mut self) -> bool {
        let initial = ViewportState {
            zoom_level: self.initial_zoom(),
            ..ViewportState::default()
        };
        if self.state == initial {
            return false;
        }
        self.state = initial;
        self.effective = self
            .base
            .with_window(self.visible_window())
            .unwrap_or(self.base);
        true
    }

    #[must_use]
    pub fn visible_window(&self) -> DataWindow {
        let full = self.base.window();
        if self.state == ViewportState::default() {
            return full;
        }
        let (x_span, y_span) = self.visible_spans();
        let x_center = full.x_center() + self.state.pan_offset_x * x_span;
        let y_center = full.y_center() + self.state.pan_offset_y * y_span;
        DataWindow::new(
            x_center - x_span / 2.0,
            x_center + x_span / 2.0,
            y_center - y_span / 2.0,
            y_center + y_span / 2.0,
        )
    }

    /// How far the visible window currently extends past the full extents.
    #[must_use]
    pub fn overflow(&self) -> PanOverflow {
        let full = self.base.window();
        let window = self.visible_window();
        PanOverflow {
            x: axis_overflow(window.x_min, window.x_max, full.x_min, full.x_max),
            y: axis_overflow(window.y_min, window.y_max, full.y_min, full.y_max),
        }
    }

    /// Snaps a bounced window back inside the extents.
    ///
    /// Returns the overflow that was removed so a painter can animate the
    /// spring-back. Only acts under [`EdgeBehavior::Bounce`].
    pub fn settle(&mut self) -> ChartResult<PanOverflow> {
        if self.behavior.edge_behavior != EdgeBehavior::Bounce {
            return Ok(PanOverflow::default());
        }
        let overflow = self.overflow();
        if overflow.is_zero() {
            return Ok(overflow);
        }
        self.clamp_pan();
        self.rebuild()?;
        trace!(overflow_x = overflow.x, overflow_y = overflow.y, "viewport settled");
        Ok(overflow)
    }

    fn initial_zoom(&self) -> f64 {
        1.0_f64.clamp(self.behavior.min_zoom, self.behavior.max_zoom)
    }

    fn resolve_step(&self, factor: Option<f64>) -> ChartResult<f64> {
        let step = factor.unwrap_or(self.behavior.zoom_step);
        if !step.is_finite() || step <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        Ok(step)
    }

    fn visible_spans(&self) -> (f64, f64) {
        let full = self.base.window();
        let mode = self.behavior.zoom_mode;
        let zoom = self.state.zoom_level;
        let x_span = if mode.allows_x() {
            full.x_span() / zoom
        } else {
            full.x_span()
        };
        let y_span = if mode.allows_y() {
            full.y_span() / zoom
        } else {
            full.y_span()
        };
        (x_span, y_span)
    }

    fn clamp_pan(&mut self) {
        let full = self.base.window();
        let (x_span, y_span) = self.visible_spans();
        self.state.pan_offset_x =
            clamp_axis_offset(self.state.pan_offset_x, full.x_min, full.x_max, x_span);
        self.state.pan_offset_y =
            clamp_axis_offset(self.state.pan_offset_y, full.y_min, full.y_max, y_span);
    }

    fn rebuild(&mut self) -> ChartResult<()> {
        self.effective = self.base.with_window(self.visible_window())?;
        Ok(())
    }
}

fn clamp_axis_offset(offset: f64, full_min: f64, full_max: f64, visible_span: f64) -> f64 {
    let full_span = full_max - full_min;
    if visible_span >= full_span {
        return 0.0;
    }
    let full_center = full_min + full_span / 2.0;
    let half = visible_span / 2.0;
    let center = (full_center + offset * visible_span).clamp(full_min + half, full_max - half);
    (center - full_center) / visible_span
}

fn axis_overflow(min: f64, max: f64, full_min: f64, full_max: f64) -> f64 {
    if min < full_min {
        min - full_min
    } else if max > full_max {
        max - full_max
    } else {
        0.0
    }
}
