use std::time::Duration;

use tracing::{debug, trace};

use crate::interaction::{
    ActivationSource, DismissStrategy, DismissTimer, EpisodeToken, HitResults, SelectionMode,
    TimerCommand, TimerFire, TooltipData, dismiss_delay,
};

use super::InteractionStateMachine;
use super::machine::Episode;

/// What ended the press that an episode may be waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ReleaseTrigger {
    Pointer,
    Exit,
}

impl InteractionStateMachine {
    /// Auto-dismiss delay for the current episode, or for a tap-style show
    /// when nothing is shown.
    #[must_use]
    pub fn dismiss_delay(&self) -> Duration {
        let long_press = self
            .episode
            .is_some_and(|episode| episode.source.is_long_press());
        self.dismiss_delay_for(long_press)
    }

    #[must_use]
    pub fn pending_dismiss_timer(&self) -> Option<DismissTimer> {
        self.pending_timer
    }

    /// Drains scheduling instructions for hosts driving timers on their own loop.
    pub fn take_timer_commands(&mut self) -> Vec<TimerCommand> {
        std::mem::take(&mut self.timer_commands)
    }

    /// Machine clock used for timer deadlines.
    #[must_use]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Advances the machine clock and fires the dismiss timer when it is due.
    pub fn advance_clock(&mut self, elapsed: Duration) -> Option<TimerFire> {
        self.clock = self.clock.saturating_add(elapsed);
        let timer = self.pending_timer?;
        if timer.deadline > self.clock {
            return None;
        }
        Some(self.on_dismiss_timer_elapsed(timer.episode))
    }

    /// Timer callback entry point. A token that no longer matches the armed
    /// timer is ignored.
    pub fn on_dismiss_timer_elapsed(&mut self, episode: EpisodeToken) -> TimerFire {
        match self.pending_timer {
            Some(timer) if timer.episode == episode => {
                self.pending_timer = None;
                trace!(episode = episode.value(), "dismiss timer fired");
                self.end_episode();
                TimerFire::Dismissed
            }
            _ => {
                trace!(episode = episode.value(), "stale dismiss timer ignored");
                TimerFire::StaleIgnored
            }
        }
    }

    /// Hides the tooltip/crosshair now. Returns `false` when nothing was shown.
    pub fn dismiss_tooltip(&mut self) -> bool {
        if self.episode.is_none() {
            return false;
        }
        self.cancel_dismiss_timer();
        self.end_episode();
        true
    }

    /// Reports the current value of an external fade animation.
    pub fn set_tooltip_opacity(&mut self, opacity: f64) {
        self.state.set_tooltip_opacity(opacity);
    }

    pub(super) fn dismiss_delay_for(&self, long_press: bool) -> Duration {
        let tooltip = self.config.tooltip;
        dismiss_delay(
            tooltip.dismiss_strategy,
            tooltip.dismiss_delay(),
            tooltip.duration(),
            long_press,
        )
    }

    /// Hit-tests at a screen position with the configured selection mode.
    pub(super) fn hit_at(&self, screen_x: f64, screen_y: Option<f64>) -> HitResults {
        let Some(coordinates) = self.coordinate_system() else {
            return HitResults::new();
        };
        match self.config.trackball.selection_mode {
            SelectionMode::Single => self
                .hit_tester
                .find_nearest(self.series.iter(), coordinates, screen_x, screen_y)
                .into_iter()
                .collect(),
            SelectionMode::Shared => {
                self.hit_tester
                    .find_shared(self.series.iter(), coordinates, screen_x)
            }
        }
    }

    /// Runs the hit tester and starts a new episode on a hit.
    ///
    /// A miss ends whatever episode is currently shown.
    pub(super) fn activate(
        &mut self,
        source: ActivationSource,
        screen_x: f64,
        screen_y: Option<f64>,
    ) -> bool {
        if !self.config.shows_episodes() {
            return false;
        }
        self.last_query = Some((screen_x, screen_y));
        let hits = self.hit_at(screen_x, screen_y);
        match TooltipData::from_hits(hits, source) {
            Some(data) => {
                self.start_episode(source, data);
                true
            }
            None => {
                self.dismiss_tooltip();
                false
            }
        }
    }

    /// Updates the shown content of the current episode without restarting it.
    pub(super) fn refresh_episode(&mut self, screen_x: f64, screen_y: Option<f64>) -> bool {
        let Some(episode) = self.episode else {
            return false;
        };
        self.last_query = Some((screen_x, screen_y));
        let hits = self.hit_at(screen_x, screen_y);
        let Some(data) = TooltipData::from_hits(hits, episode.source) else {
            return false;
        };
        self.show_data(data);
        true
    }

    /// Applies a pointer release or exit to the current episode.
    pub(super) fn release_episode(&mut self, trigger: ReleaseTrigger) {
        let Some(mut episode) = self.episode else {
            return;
        };
        let strategy = self.config.tooltip.dismiss_strategy;
        let is_hover = episode.source == ActivationSource::Hover;
        let applies = match trigger {
            ReleaseTrigger::Pointer => !is_hover || strategy == DismissStrategy::OnRelease,
            ReleaseTrigger::Exit => {
                is_hover || (strategy == DismissStrategy::OnRelease && !episode.held)
            }
        };
        if !episode.awaiting_release || !applies {
            return;
        }

        episode.awaiting_release = false;
        episode.held = false;
        self.episode = Some(episode);

        match strategy {
            DismissStrategy::OnRelease => {
                self.cancel_dismiss_timer();
                self.end_episode();
            }
            DismissStrategy::OnReleaseDelayed | DismissStrategy::Smart => {
                let delay = self.dismiss_delay_for(episode.source.is_long_press());
                self.arm_dismiss_timer(episode.token, delay);
            }
            DismissStrategy::OnTimer | DismissStrategy::Never => {}
        }
    }

    pub(super) fn cancel_dismiss_timer(&mut self) {
        if let Some(timer) = self.pending_timer.take() {
            trace!(episode = timer.episode.value(), "dismiss timer cancelled");
            self.timer_commands.push(TimerCommand::Cancel(timer.episode));
        }
    }

    pub(super) fn after_viewport_change(&mut self) {
        if let Some(coordinates) = self.coordinate_system().copied() {
            self.state.reproject(&coordinates);
        }
    }

    fn start_episode(&mut self, source: ActivationSource, data: TooltipData) {
        self.cancel_dismiss_timer();
        let strategy = self.config.tooltip.dismiss_strategy;
        let held = self.state.is_pointer_down()
            && !matches!(source, ActivationSource::Hover | ActivationSource::Probe);
        let awaiting_release =
            held || source == ActivationSource::Hover || strategy == DismissStrategy::OnRelease;

        let token = self.episodes.next_token();
        self.episode = Some(Episode {
            token,
            source,
            held,
            awaiting_release,
        });
        self.show_data(data);
        debug!(episode = token.value(), ?source, ?strategy, "interaction episode started");

        if strategy == DismissStrategy::OnTimer {
            let delay = self.config.tooltip.duration();
            self.arm_dismiss_timer(token, delay);
        } else if strategy.arms_on_release() && !awaiting_release {
            // Nothing is held, so there is no release to wait for.
            let delay = self.dismiss_delay_for(source.is_long_press());
            self.arm_dismiss_timer(token, delay);
        }
    }

    fn show_data(&mut self, data: TooltipData) {
        self.state.show(
            data,
            self.config.tooltip_enabled,
            self.config.crosshair_enabled,
            self.config.tooltip.animate_fade,
        );
    }

    fn arm_dismiss_timer(&mut self, episode: EpisodeToken, delay: Duration) {
        self.cancel_dismiss_timer();
        let timer = DismissTimer {
            episode,
            delay,
            deadline: self.clock.saturating_add(delay),
        };
        self.pending_timer = Some(timer);
        self.timer_commands.push(TimerCommand::Arm(timer));
        trace!(
            episode = episode.value(),
            delay_ms = delay.as_millis() as u64,
            "dismiss timer armed"
        );
    }

    fn end_episode(&mut self) {
        if let Some(episode) = self.episode.take() {
            debug!(episode = episode.token.value(), "interaction episode ended");
        }
        self.state.hide();
    }
}
