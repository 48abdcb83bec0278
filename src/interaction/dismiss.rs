use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay reported for strategies that never auto-dismiss.
pub const FOREVER: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Policy deciding when a shown tooltip/crosshair hides on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DismissStrategy {
    /// Hide as soon as the activating pointer is released.
    OnRelease,
    /// Hide `dismiss_delay` after release.
    OnReleaseDelayed,
    /// Hide `duration` after show, regardless of release.
    OnTimer,
    /// Only a new interaction or an explicit reset hides it.
    Never,
    /// `duration` for long-press shows, `dismiss_delay` otherwise; armed on release.
    #[default]
    Smart,
}

impl DismissStrategy {
    /// Whether the dismiss timer is armed at release time rather than at show time.
    #[must_use]
    pub fn arms_on_release(self) -> bool {
        matches!(self, Self::OnReleaseDelayed | Self::Smart)
    }
}

/// Gesture that started the current episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationSource {
    Tap,
    DoubleTap,
    LongPress,
    Hover,
    Probe,
}

impl ActivationSource {
    #[must_use]
    pub fn is_long_press(self) -> bool {
        self == Self::LongPress
    }
}

/// Auto-dismiss delay for a strategy.
///
/// `Never` reports [`FOREVER`]; `OnRelease` reports zero.
#[must_use]
pub fn dismiss_delay(
    strategy: DismissStrategy,
    dismiss_delay: Duration,
    duration: Duration,
    long_press: bool,
) -> Duration {
    match strategy {
        DismissStrategy::OnRelease => Duration::ZERO,
        DismissStrategy::OnReleaseDelayed => dismiss_delay,
        DismissStrategy::OnTimer => duration,
        DismissStrategy::Never => FOREVER,
        DismissStrategy::Smart => {
            if long_press {
                duration
            } else {
                dismiss_delay
            }
        }
    }
}

/// Identity of one show-to-hide episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EpisodeToken(u64);

impl EpisodeToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic token source; each show starts a fresh episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct EpisodeCounter {
    next: u64,
}

impl EpisodeCounter {
    pub(crate) fn next_token(&mut self) -> EpisodeToken {
        self.next += 1;
        EpisodeToken(self.next)
    }
}

/// A scheduled dismissal bound to exactly one episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DismissTimer {
    pub episode: EpisodeToken,
    pub delay: Duration,
    /// Machine clock reading at which the timer is due.
    pub deadline: Duration,
}

/// Scheduling instruction for the host event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerCommand {
    Arm(DismissTimer),
    Cancel(EpisodeToken),
}

/// Outcome of delivering a timer callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerFire {
    Dismissed,
    /// The token no longer matches the armed timer; nothing changed.
    StaleIgnored,
}
