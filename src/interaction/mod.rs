pub mod dismiss;
pub mod input;

use serde::{Deserialize, Serialize};

use crate::core::{CoordinateSystem, DataPoint};

pub use dismiss::{
    ActivationSource, DismissStrategy, DismissTimer, EpisodeToken, FOREVER, TimerCommand,
    TimerFire, dismiss_delay,
};
pub use hit_test::{HitResult, HitResults, HitStrategy, HitTestOptions, HitTester, SelectionMode};
pub use input::{ChartInput, GestureFamily, GestureSet, PointerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragKind {
    Pan,
    Zoom,
}

/// Single active mode of an interaction state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionPhase {
    Idle,
    PointerDown,
    Dragging(DragKind),
    TooltipShown(DismissStrategy),
    CrosshairActive,
}

/// Tooltip content and placement for the painting layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipData {
    /// One entry in single mode, one per series in shared mode.
    pub points: HitResults,
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub source: ActivationSource,
}

impl TooltipData {
    /// Builds tooltip data anchored on the first hit. Returns `None` for no hits.
    #[must_use]
    pub fn from_hits(points: HitResults, source: ActivationSource) -> Option<Self> {
        let first = points.first()?;
        let (anchor_x, anchor_y) = (first.screen_x, first.screen_y);
        Some(Self {
            points,
            anchor_x,
            anchor_y,
            source,
        })
    }

    #[must_use]
    pub fn primary(&self) -> Option<&HitResult> {
        self.points.first()
    }

    #[must_use]
    pub fn reprojected(&self, coordinates: &CoordinateSystem) -> Self {
        let points: HitResults = self
            .points
            .iter()
            .map(|hit| hit.reprojected(coordinates))
            .collect();
        let (anchor_x, anchor_y) = points
            .first()
            .map_or((self.anchor_x, self.anchor_y), |hit| {
                (hit.screen_x, hit.screen_y)
            });
        Self {
            points,
            anchor_x,
            anchor_y,
            source: self.source,
        }
    }
}

/// Read-only interaction state consumed by the painting layer.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    tooltip_visible: bool,
    tooltip_data: Option<TooltipData>,
    tooltip_opacity: f64,
    tooltip_target_opacity: f64,
    crosshair_position: Option<(f64, f64)>,
    crosshair_point: Option<DataPoint>,
    selected_point: Option<HitResult>,
    is_interacting: bool,
    is_pointer_down: bool,
    probe_x: Option<f64>,
    probe_y: Option<f64>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            tooltip_visible: false,
            tooltip_data: None,
            tooltip_opacity: 0.0,
            tooltip_target_opacity: 0.0,
            crosshair_position: None,
            crosshair_point: None,
            selected_point: None,
            is_interacting: false,
            is_pointer_down: false,
            probe_x: None,
            probe_y: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn tooltip_visible(&self) -> bool {
        self.tooltip_visible
    }

    #[must_use]
    pub fn tooltip_data(&self) -> Option<&TooltipData> {
        self.tooltip_data.as_ref()
    }

    /// Current opacity as reported by the fade animation, in `[0, 1]`.
    #[must_use]
    pub fn tooltip_opacity(&self) -> f64 {
        self.tooltip_opacity
    }

    #[must_use]
    pub fn tooltip_target_opacity(&self) -> f64 {
        self.tooltip_target_opacity
    }

    #[must_use]
    pub fn crosshair_position(&self) -> Option<(f64, f64)> {
        self.crosshair_position
    }

    #[must_use]
    pub fn crosshair_point(&self) -> Option<&DataPoint> {
        self.crosshair_point.as_ref()
    }

    #[must_use]
    pub fn selected_point(&self) -> Option<&HitResult> {
        self.selected_point.as_ref()
    }

    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.is_interacting
    }

    #[must_use]
    pub fn is_pointer_down(&self) -> bool {
        self.is_pointer_down
    }

    #[must_use]
    pub fn probe_x(&self) -> Option<f64> {
        self.probe_x
    }

    #[must_use]
    pub fn probe_y(&self) -> Option<f64> {
        self.probe_y
    }

    #[must_use]
    pub fn is_probe_active(&self) -> bool {
        self.probe_x.is_some() || self.probe_y.is_some()
    }

    pub(crate) fn show(
        &mut self,
        data: TooltipData,
        tooltip: bool,
        crosshair: bool,
        fade_in: bool,
    ) {
        if crosshair {
            if let Some(primary) = data.primary() {
                self.crosshair_position = Some((primary.screen_x, primary.screen_y));
                self.crosshair_point = Some(primary.point.clone());
            }
        } else {
            self.crosshair_position = None;
            self.crosshair_point = None;
        }

        if tooltip {
            // A fade restarts from transparent only when the tooltip was hidden.
            if !self.tooltip_visible {
                self.tooltip_opacity = if fade_in { 0.0 } else { 1.0 };
            }
            self.tooltip_visible = true;
            self.tooltip_target_opacity = 1.0;
            self.tooltip_data = Some(data);
        } else {
            self.tooltip_visible = false;
            self.tooltip_target_opacity = 0.0;
            self.tooltip_opacity = 0.0;
            self.tooltip_data = None;
        }
    }

    pub(crate) fn hide(&mut self) {
        self.tooltip_visible = false;
        self.tooltip_data = None;
        self.tooltip_opacity = 0.0;
        self.tooltip_target_opacity = 0.0;
        self.crosshair_position = None;
        self.crosshair_point = None;
    }

    pub(crate) fn reproject(&mut self, coordinates: &CoordinateSystem) {
        if let Some(data) = &self.tooltip_data {
            self.tooltip_data = Some(data.reprojected(coordinates));
        }
        if let Some(point) = &self.crosshair_point {
            self.crosshair_position = Some(coordinates.data_to_screen(point.x, point.y));
        }
        if let Some(selected) = &self.selected_point {
            self.selected_point = Some(selected.reprojected(coordinates));
        }
    }

    pub(crate) fn set_tooltip_opacity(&mut self, opacity: f64) {
        if opacity.is_finite() {
            self.tooltip_opacity = opacity.clamp(0.0, 1.0);
        }
    }

    pub(crate) fn set_selected_point(&mut self, selected: Option<HitResult>) {
        self.selected_point = selected;
    }

    pub(crate) fn set_pointer_down(&mut self, down: bool) {
        self.is_pointer_down = down;
    }

    pub(crate) fn set_interacting(&mut self, interacting: bool) {
        self.is_interacting = interacting;
    }

    pub(crate) fn set_probe_x(&mut self, x: Option<f64>) {
        self.probe_x = x;
    }

    pub(crate) fn set_probe_y(&mut self, y: Option<f64>) {
        self.probe_y = y;
    }
}
