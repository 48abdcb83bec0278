use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::CoordinateSystem;
use crate::error::ChartResult;
use crate::interaction::{ChartInput, GestureSet, HitResult, HitStrategy, InteractionState};

use super::{InteractionConfig, InteractionStateMachine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartFamily {
    Line,
    Bar,
}

/// Capability set shared by every interactive chart family.
///
/// Each surface exclusively owns its [`InteractionStateMachine`]; the
/// provided methods are the only entry points a [`super::ChartController`]
/// uses, so it never depends on a concrete chart family.
pub trait InteractiveSurface {
    fn family(&self) -> ChartFamily;
    fn machine(&self) -> &InteractionStateMachine;
    fn machine_mut(&mut self) -> &mut InteractionStateMachine;

    fn coordinate_system(&self) -> Option<CoordinateSystem> {
        self.machine().coordinate_system().copied()
    }

    fn find_hit(&self, screen_x: f64, screen_y: Option<f64>) -> Option<HitResult> {
        self.machine().find_nearest(screen_x, screen_y)
    }

    fn handle_input(&mut self, input: ChartInput) -> ChartResult<()> {
        self.machine_mut().handle_input(input)
    }

    fn required_gestures(&self) -> GestureSet {
        self.machine().required_gestures()
    }

    fn interaction_state(&self) -> &InteractionState {
        self.machine().state()
    }

    fn zoom_level(&self) -> f64 {
        self.machine().zoom_level()
    }

    fn is_zoomed(&self) -> bool {
        self.machine().is_zoomed()
    }

    fn zoom_in(&mut self) -> bool {
        match self.machine_mut().zoom_in(None) {
            Ok(changed) => changed,
            Err(err) => {
                warn!(error = %err, "zoom in rejected");
                false
            }
        }
    }

    fn zoom_out(&mut self) -> bool {
        match self.machine_mut().zoom_out(None) {
            Ok(changed) => changed,
            Err(err) => {
                warn!(error = %err, "zoom out rejected");
                false
            }
        }
    }

    fn reset_zoom(&mut self) -> bool {
        self.machine_mut().reset_zoom()
    }

    fn reset(&mut self) {
        self.machine_mut().reset();
    }

    /// Ends the current episode and cancels its dismiss timer.
    fn interrupt_episode(&mut self) {
        self.machine_mut().dismiss_tooltip();
    }
}

/// X-sorted line/area family: binary-search hit testing, live interpolation.
#[derive(Debug)]
pub struct LineChart {
    machine: InteractionStateMachine,
}

impl LineChart {
    pub fn new(config: InteractionConfig) -> ChartResult<Self> {
        Ok(Self {
            machine: InteractionStateMachine::new(config, HitStrategy::SortedByX)?,
        })
    }
}

impl InteractiveSurface for LineChart {
    fn family(&self) -> ChartFamily {
        ChartFamily::Line
    }

    fn machine(&self) -> &InteractionStateMachine {
        &self.machine
    }

    fn machine_mut(&mut self) -> &mut InteractionStateMachine {
        &mut self.machine
    }
}

/// Categorical bar family: linear-scan hit testing.
#[derive(Debug)]
pub struct BarChart {
    machine: InteractionStateMachine,
}

impl BarChart {
    pub fn new(config: InteractionConfig) -> ChartResult<Self> {
        Ok(Self {
            machine: InteractionStateMachine::new(config, HitStrategy::Categorical)?,
        })
    }
}

impl InteractiveSurface for BarChart {
    fn family(&self) -> ChartFamily {
        ChartFamily::Bar
    }

    fn machine(&self) -> &InteractionStateMachine {
        &self.machine
    }

    fn machine_mut(&mut self) -> &mut InteractionStateMachine {
        &mut self.machine
    }
}
