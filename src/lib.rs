//! chart-interact: headless interaction engine for 2-D data charts.
//!
//! The crate maps data series onto a chart area, keeps zoom/pan state,
//! resolves pointer input into nearest-sample hits and drives
//! tooltip/crosshair visibility with an explicit dismiss-timer protocol.
//! Painting is left to the host: it reads [`interaction::InteractionState`]
//! and the effective [`core::CoordinateSystem`] after each event.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{
    ChartController, InteractionConfig, InteractionStateMachine, InteractiveSurface, LineChart,
};
pub use error::{ChartError, ChartResult};
