use tracing::trace;

use crate::interaction::ActivationSource;

use super::InteractionStateMachine;

impl InteractionStateMachine {
    #[must_use]
    pub fn is_probe_active(&self) -> bool {
        self.state.is_probe_active()
    }

    /// Sets the probe X and re-runs hit-testing without a pointer event.
    pub fn set_probe_x(&mut self, screen_x: Option<f64>) -> bool {
        self.state.set_probe_x(screen_x.filter(|x| x.is_finite()));
        self.apply_probe()
    }

    /// Sets the probe Y used for multi-series disambiguation.
    pub fn set_probe_y(&mut self, screen_y: Option<f64>) -> bool {
        self.state.set_probe_y(screen_y.filter(|y| y.is_finite()));
        self.apply_probe()
    }

    pub fn set_probe(&mut self, screen_x: f64, screen_y: Option<f64>) -> bool {
        self.state.set_probe_x(Some(screen_x).filter(|x| x.is_finite()));
        self.state.set_probe_y(screen_y.filter(|y| y.is_finite()));
        self.apply_probe()
    }

    pub fn clear_probe(&mut self) {
        self.state.set_probe_x(None);
        self.state.set_probe_y(None);
        self.apply_probe();
    }

    /// Re-resolves the shown tooltip at the last query position so a moving
    /// data window keeps equivalent content. No-op outside live mode or
    /// while nothing is shown.
    pub fn update_live_tooltip(&mut self) -> bool {
        if !self.config.live_mode || !self.state.tooltip_visible() {
            return false;
        }
        let Some((screen_x, screen_y)) = self.last_query else {
            return false;
        };
        let updated = self.refresh_episode(screen_x, screen_y);
        trace!(screen_x, updated, "live tooltip refreshed");
        updated
    }

    /// Returns whether an episode is shown for the probe afterwards.
    fn apply_probe(&mut self) -> bool {
        let probe_episode = self
            .episode
            .is_some_and(|episode| episode.source == ActivationSource::Probe);
        match self.state.probe_x() {
            Some(screen_x) => {
                let screen_y = self.state.probe_y();
                if probe_episode {
                    if self.refresh_episode(screen_x, screen_y) {
                        return true;
                    }
                    self.dismiss_tooltip();
                    return false;
                }
                self.activate(ActivationSource::Probe, screen_x, screen_y)
            }
            None => {
                // A Y-only probe has no X to resolve against.
                if probe_episode {
                    self.dismiss_tooltip();
                }
                false
            }
        }
    }
}
