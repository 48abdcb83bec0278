use tracing::{debug, trace};

use crate::core::{PanOverflow, ViewportState};
use crate::error::ChartResult;

use super::InteractionStateMachine;

impl InteractionStateMachine {
    /// Current zoom level; `1.0` before a coordinate system exists.
    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.viewport
            .as_ref()
            .map_or(1.0, |viewport| viewport.zoom_level())
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.viewport
            .as_ref()
            .is_some_and(|viewport| viewport.is_zoomed())
    }

    #[must_use]
    pub fn viewport_state(&self) -> ViewportState {
        self.viewport
            .as_ref()
            .map(|viewport| viewport.state())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn pan_overflow(&self) -> PanOverflow {
        self.viewport
            .as_ref()
            .map(|viewport| viewport.overflow())
            .unwrap_or_default()
    }

    /// Zooms in one step (or by `factor`) around the window center.
    pub fn zoom_in(&mut self, factor: Option<f64>) -> ChartResult<bool> {
        if !self.config.allows_zoom() {
            return Ok(false);
        }
        let Some(viewport) = self.viewport.as_mut() else {
            return Ok(false);
        };
        let changed = viewport.zoom_in(factor)?;
        self.finish_viewport_update(changed);
        Ok(changed)
    }

    pub fn zoom_out(&mut self, factor: Option<f64>) -> ChartResult<bool> {
        if !self.config.allows_zoom() {
            return Ok(false);
        }
        let Some(viewport) = self.viewport.as_mut() else {
            return Ok(false);
        };
        let changed = viewport.zoom_out(factor)?;
        self.finish_viewport_update(changed);
        Ok(changed)
    }

    /// Multiplies the zoom level keeping the data under a screen point fixed.
    pub fn zoom_at(&mut self, multiplier: f64, screen_x: f64, screen_y: f64) -> ChartResult<bool> {
        if !self.config.allows_zoom() {
            return Ok(false);
        }
        let Some(viewport) = self.viewport.as_mut() else {
            return Ok(false);
        };
        let pivot = viewport.effective().screen_to_data(screen_x, screen_y);
        let changed = viewport.zoom_by(multiplier, Some(pivot))?;
        self.finish_viewport_update(changed);
        Ok(changed)
    }

    /// Pans by a screen-space displacement.
    pub fn pan_by(&mut self, delta_screen_x: f64, delta_screen_y: f64) -> ChartResult<bool> {
        if !self.config.allows_pan() {
            return Ok(false);
        }
        let Some(viewport) = self.viewport.as_mut() else {
            return Ok(false);
        };
        let changed = viewport.pan(delta_screen_x, delta_screen_y)?;
        self.finish_viewport_update(changed);
        Ok(changed)
    }

    /// Snaps a bounced pan back inside the data extents and reports the
    /// overflow that was removed.
    pub fn settle_viewport(&mut self) -> ChartResult<PanOverflow> {
        let Some(viewport) = self.viewport.as_mut() else {
            return Ok(PanOverflow::default());
        };
        let overflow = viewport.settle()?;
        self.finish_viewport_update(!overflow.is_zero());
        Ok(overflow)
    }

    /// Restores zoom 1.0 and zero pan.
    pub fn reset_zoom(&mut self) -> bool {
        let changed = self
            .viewport
            .as_mut()
            .is_some_and(|viewport| viewport.reset());
        self.finish_viewport_update(changed);
        changed
    }

    /// Returns the machine to idle: identity viewport, no episode, no
    /// pending timer, no probe, no selection.
    pub fn reset(&mut self) {
        self.reset_zoom();
        self.dismiss_tooltip();
        self.cancel_dismiss_timer();
        self.last_query = None;
        self.pointer = None;
        self.drag = None;
        self.scale_gesture = None;
        self.state.set_probe_x(None);
        self.state.set_probe_y(None);
        self.state.set_selected_point(None);
        self.state.set_pointer_down(false);
        self.state.set_interacting(false);
        debug!("interaction state reset");
    }

    fn finish_viewport_update(&mut self, changed: bool) {
        if !changed {
            return;
        }
        self.after_viewport_change();
        trace!(zoom_level = self.zoom_level(), "effective coordinate system updated");
    }
}
