use std::time::Duration;

use crate::core::{CoordinateSystem, DataWindow, Rect, SeriesSet, ViewportController};
use crate::error::ChartResult;
use crate::interaction::dismiss::EpisodeCounter;
use crate::interaction::{
    ActivationSource, DismissTimer, DragKind, EpisodeToken, GestureSet, HitResult, HitStrategy,
    HitTestOptions, HitTester, InteractionPhase, InteractionState, PointerId, TimerCommand,
};

use super::{ActivationMode, InteractionConfig};

/// One show-to-hide lifetime of the tooltip/crosshair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Episode {
    pub(super) token: EpisodeToken,
    pub(super) source: ActivationSource,
    /// Shown while a pointer was held; pointer moves scrub the selection.
    pub(super) held: bool,
    /// A release (or exit, for hover) still has to be applied.
    pub(super) awaiting_release: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ActivePointer {
    pub(super) id: PointerId,
    pub(super) origin: (f64, f64),
    pub(super) last: (f64, f64),
    /// The press scrubbed a held episode; it never turns into a pan.
    pub(super) scrubbed: bool,
}

/// Per-surface interaction engine.
///
/// `InteractionStateMachine` consumes pointer/gesture input, drives the
/// viewport controller and hit tester, and owns tooltip/crosshair
/// visibility plus the dismiss timer. All mutation happens through
/// `&mut self` on one event loop; the painting layer reads
/// [`InteractionState`] and [`Self::coordinate_system`] between events.
#[derive(Debug)]
pub struct InteractionStateMachine {
    pub(super) config: InteractionConfig,
    pub(super) hit_tester: HitTester,
    pub(super) series: SeriesSet,
    pub(super) chart_area: Option<Rect>,
    pub(super) device_pixel_ratio: f64,
    pub(super) bounds_override: Option<DataWindow>,
    pub(super) viewport: Option<ViewportController>,
    pub(super) state: InteractionState,
    pub(super) episode: Option<Episode>,
    pub(super) episodes: EpisodeCounter,
    pub(super) pending_timer: Option<DismissTimer>,
    pub(super) timer_commands: Vec<TimerCommand>,
    pub(super) clock: Duration,
    pub(super) last_query: Option<(f64, Option<f64>)>,
    pub(super) pointer: Option<ActivePointer>,
    pub(super) drag: Option<DragKind>,
    pub(super) scale_gesture: Option<f64>,
}

impl InteractionStateMachine {
    pub fn new(config: InteractionConfig, strategy: HitStrategy) -> ChartResult<Self> {
        let config = config.validate()?;
        let hit_tester = HitTester::new(HitTestOptions {
            strategy,
            live: config.live_mode,
            snap_radius_px: config.trackball.snap_radius_px,
        });

        Ok(Self {
            config,
            hit_tester,
            series: SeriesSet::new(),
            chart_area: None,
            device_pixel_ratio: 1.0,
            bounds_override: None,
            viewport: None,
            state: InteractionState::default(),
            episode: None,
            episodes: EpisodeCounter::default(),
            pending_timer: None,
            timer_commands: Vec::new(),
            clock: Duration::ZERO,
            last_query: None,
            pointer: None,
            drag: None,
            scale_gesture: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> InteractionConfig {
        self.config
    }

    #[must_use]
    pub fn hit_tester(&self) -> HitTester {
        self.hit_tester
    }

    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Effective (zoomed/panned) coordinate system, once area and data are known.
    #[must_use]
    pub fn coordinate_system(&self) -> Option<&CoordinateSystem> {
        self.viewport.as_ref().map(ViewportController::effective)
    }

    /// Unzoomed coordinate system covering the full data extents.
    #[must_use]
    pub fn base_coordinate_system(&self) -> Option<&CoordinateSystem> {
        self.viewport.as_ref().map(ViewportController::base)
    }

    #[must_use]
    pub fn viewport(&self) -> Option<&ViewportController> {
        self.viewport.as_ref()
    }

    #[must_use]
    pub fn current_episode(&self) -> Option<EpisodeToken> {
        self.episode.map(|episode| episode.token)
    }

    #[must_use]
    pub fn activation_source(&self) -> Option<ActivationSource> {
        self.episode.map(|episode| episode.source)
    }

    #[must_use]
    pub fn phase(&self) -> InteractionPhase {
        if let Some(kind) = self.drag {
            return InteractionPhase::Dragging(kind);
        }
        if self.state.tooltip_visible() {
            return InteractionPhase::TooltipShown(self.config.tooltip.dismiss_strategy);
        }
        if self.state.crosshair_position().is_some() {
            return InteractionPhase::CrosshairActive;
        }
        if self.state.is_pointer_down() {
            return InteractionPhase::PointerDown;
        }
        InteractionPhase::Idle
    }

    /// Nearest sample under a screen position using the configured tester.
    #[must_use]
    pub fn find_nearest(&self, screen_x: f64, screen_y: Option<f64>) -> Option<HitResult> {
        let coordinates = self.coordinate_system()?;
        self.hit_tester
            .find_nearest(self.series.iter(), coordinates, screen_x, screen_y)
    }

    /// Gesture recognizers the host has to install for this configuration.
    #[must_use]
    pub fn required_gestures(&self) -> GestureSet {
        let activation = if self.config.shows_episodes() {
            self.config.tooltip.activation
        } else {
            ActivationMode::None
        };
        let allows_zoom = self.config.allows_zoom();

        GestureSet {
            tap: activation.accepts_tap() || self.config.selection_enabled,
            long_press: activation.accepts_long_press(),
            double_tap: activation.accepts_double_tap()
                || (self.config.double_tap_zoom && allows_zoom),
            pan: self.config.allows_pan() || activation.accepts_long_press(),
            scale: allows_zoom,
            hover: activation.accepts_hover(),
        }
    }
}
