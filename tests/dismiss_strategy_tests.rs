use std::time::Duration;

use chart_interact::api::{InteractionConfig, LineChart, InteractiveSurface, TooltipBehavior};
use chart_interact::interaction::{DismissStrategy, FOREVER, dismiss_delay};

const DELAY: Duration = Duration::from_millis(500);
const DURATION: Duration = Duration::from_secs(3);

#[test]
fn on_release_has_no_delay() {
    assert_eq!(
        dismiss_delay(DismissStrategy::OnRelease, DELAY, DURATION, false),
        Duration::ZERO
    );
}

#[test]
fn on_release_delayed_uses_dismiss_delay() {
    assert_eq!(
        dismiss_delay(DismissStrategy::OnReleaseDelayed, DELAY, DURATION, false),
        Duration::from_millis(500)
    );
}

#[test]
fn on_timer_uses_duration() {
    assert_eq!(
        dismiss_delay(DismissStrategy::OnTimer, DELAY, DURATION, false),
        Duration::from_secs(3)
    );
}

#[test]
fn never_is_at_least_a_year() {
    let delay = dismiss_delay(DismissStrategy::Never, DELAY, DURATION, false);
    assert_eq!(delay, FOREVER);
    assert!(delay >= Duration::from_secs(365 * 24 * 60 * 60));
}

#[test]
fn smart_depends_on_activation_gesture() {
    assert_eq!(
        dismiss_delay(DismissStrategy::Smart, DELAY, DURATION, true),
        DURATION
    );
    assert_eq!(
        dismiss_delay(DismissStrategy::Smart, DELAY, DURATION, false),
        DELAY
    );
}

#[test]
fn machine_reports_configured_delay() {
    let config = InteractionConfig::default().with_tooltip(TooltipBehavior {
        dismiss_strategy: DismissStrategy::OnReleaseDelayed,
        dismiss_delay_ms: 500,
        ..TooltipBehavior::default()
    });
    let chart = LineChart::new(config).expect("chart");
    assert_eq!(chart.machine().dismiss_delay(), DELAY);
}
