use tracing::trace;

use crate::error::ChartResult;
use crate::interaction::{ActivationSource, ChartInput, DragKind, PointerId};

use super::InteractionStateMachine;
use super::machine::ActivePointer;
use super::tooltip_controller::ReleaseTrigger;
use super::zoom_factor_resolver::{resolve_pinch_zoom_step, resolve_wheel_zoom_factor};

impl InteractionStateMachine {
    /// Applies one host input event.
    ///
    /// Errors only surface for non-finite wheel/pinch magnitudes; a miss,
    /// an unknown pointer or a disabled interaction is a silent no-op.
    pub fn handle_input(&mut self, input: ChartInput) -> ChartResult<()> {
        trace!(?input, "chart input");
        match input {
            ChartInput::PointerDown { pointer, x, y } => self.on_pointer_down(pointer, x, y),
            ChartInput::PointerMove { pointer, x, y } => self.on_pointer_move(pointer, x, y)?,
            ChartInput::PointerUp { pointer, .. } | ChartInput::PointerCancel { pointer } => {
                self.on_pointer_released(pointer)?;
            }
            ChartInput::Hover { x, y } => self.on_hover(x, y),
            ChartInput::Exit => self.release_episode(ReleaseTrigger::Exit),
            ChartInput::Wheel { x, y, delta_y } => self.on_wheel(x, y, delta_y)?,
            ChartInput::ScaleStart { .. } => self.on_scale_start(),
            ChartInput::ScaleUpdate {
                focal_x,
                focal_y,
                scale,
            } => self.on_scale_update(focal_x, focal_y, scale)?,
            ChartInput::ScaleEnd => self.on_scale_end(),
            ChartInput::Tap { x, y } => self.on_tap(x, y),
            ChartInput::DoubleTap { x, y } => self.on_double_tap(x, y)?,
            ChartInput::LongPress { x, y } => self.on_long_press(x, y),
        }
        Ok(())
    }

    fn on_pointer_down(&mut self, pointer: PointerId, x: f64, y: f64) {
        // Secondary pointers only feed the host's scale recognizer.
        if self.pointer.is_some() {
            return;
        }
        self.pointer = Some(ActivePointer {
            id: pointer,
            origin: (x, y),
            last: (x, y),
            scrubbed: false,
        });
        self.state.set_pointer_down(true);
        self.state.set_interacting(true);
    }

    fn on_pointer_move(&mut self, pointer: PointerId, x: f64, y: f64) -> ChartResult<()> {
        let Some(mut active) = self.pointer.filter(|active| active.id == pointer) else {
            return Ok(());
        };
        let (delta_x, delta_y) = (x - active.last.0, y - active.last.1);
        active.last = (x, y);
        let holding = self.episode.is_some_and(|episode| episode.held);
        active.scrubbed |= holding;
        self.pointer = Some(active);

        if self.scale_gesture.is_some() {
            return Ok(());
        }
        if holding {
            self.refresh_episode(x, Some(y));
            return Ok(());
        }
        // The scrubbed episode may have timed out under the finger.
        if active.scrubbed {
            return Ok(());
        }

        match self.drag {
            Some(DragKind::Pan) => {
                self.pan_by(delta_x, delta_y)?;
            }
            Some(DragKind::Zoom) => {}
            None => {
                let travel = (x - active.origin.0).hypot(y - active.origin.1);
                if travel > self.config.drag_slop_px && self.config.allows_pan() {
                    self.drag = Some(DragKind::Pan);
                    trace!(pointer, "pan drag started");
                    self.pan_by(x - active.origin.0, y - active.origin.1)?;
                }
            }
        }
        Ok(())
    }

    fn on_pointer_released(&mut self, pointer: PointerId) -> ChartResult<()> {
        if !self.pointer.is_some_and(|active| active.id == pointer) {
            return Ok(());
        }
        self.pointer = None;
        if self.drag == Some(DragKind::Pan) {
            self.drag = None;
            self.settle_viewport()?;
        }
        self.state.set_pointer_down(false);
        self.state.set_interacting(self.scale_gesture.is_some());
        self.release_episode(ReleaseTrigger::Pointer);
        Ok(())
    }

    fn on_hover(&mut self, x: f64, y: f64) {
        if !self.config.tooltip.activation.accepts_hover() || self.pointer.is_some() {
            return;
        }
        let hover_episode = self
            .episode
            .filter(|episode| episode.source == ActivationSource::Hover);
        if let Some(mut episode) = hover_episode {
            // Re-entry after an exit waits for the next exit again.
            if !episode.awaiting_release && self.config.tooltip.dismiss_strategy.arms_on_release()
            {
                self.cancel_dismiss_timer();
                episode.awaiting_release = true;
                self.episode = Some(episode);
            }
            if !self.refresh_episode(x, Some(y)) {
                self.dismiss_tooltip();
            }
            return;
        }
        self.activate(ActivationSource::Hover, x, Some(y));
    }

    fn on_tap(&mut self, x: f64, y: f64) {
        if self.config.selection_enabled {
            self.toggle_selection(x, y);
        }
        if self.config.tooltip.activation.accepts_tap() {
            self.activate(ActivationSource::Tap, x, Some(y));
        }
    }

    fn on_double_tap(&mut self, x: f64, y: f64) -> ChartResult<()> {
        if self.config.tooltip.activation.accepts_double_tap() {
            self.activate(ActivationSource::DoubleTap, x, Some(y));
            return Ok(());
        }
        if self.config.double_tap_zoom {
            let step = self.config.viewport.zoom_step;
            self.zoom_at(step, x, y)?;
        }
        Ok(())
    }

    fn on_long_press(&mut self, x: f64, y: f64) {
        if !self.config.tooltip.activation.accepts_long_press() || self.drag.is_some() {
            return;
        }
        if self.activate(ActivationSource::LongPress, x, Some(y)) {
            if let Some(active) = self.pointer.as_mut() {
                active.scrubbed = true;
            }
        }
    }

    fn on_wheel(&mut self, x: f64, y: f64, delta_y: f64) -> ChartResult<()> {
        if !self.config.allows_zoom() {
            return Ok(());
        }
        let ratio = self.config.wheel_zoom_step_ratio;
        if let Some(factor) = resolve_wheel_zoom_factor(delta_y, ratio)? {
            self.zoom_at(factor, x, y)?;
        }
        Ok(())
    }

    fn on_scale_start(&mut self) {
        if !self.config.allows_zoom() {
            return;
        }
        self.scale_gesture = Some(1.0);
        self.drag = Some(DragKind::Zoom);
        self.state.set_interacting(true);
    }

    fn on_scale_update(&mut self, focal_x: f64, focal_y: f64, scale: f64) -> ChartResult<()> {
        let Some(previous) = self.scale_gesture else {
            return Ok(());
        };
        if let Some(step) = resolve_pinch_zoom_step(previous, scale)? {
            self.scale_gesture = Some(scale);
            self.zoom_at(step, focal_x, focal_y)?;
        }
        Ok(())
    }

    fn on_scale_end(&mut self) {
        if self.scale_gesture.take().is_none() {
            return;
        }
        if self.drag == Some(DragKind::Zoom) {
            self.drag = None;
        }
        self.state.set_interacting(self.pointer.is_some());
    }

    /// Tapping the selected sample again clears the selection.
    fn toggle_selection(&mut self, x: f64, y: f64) {
        let Some(hit) = self.find_nearest(x, Some(y)) else {
            return;
        };
        let same = self
            .state
            .selected_point()
            .is_some_and(|selected| selected.series == hit.series && selected.index == hit.index);
        if same {
            self.state.set_selected_point(None);
        } else {
            trace!(series = %hit.series, index = hit.index, "point selected");
            self.state.set_selected_point(Some(hit));
        }
    }
}
