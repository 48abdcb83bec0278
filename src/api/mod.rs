mod config;
mod controller;
mod data_controller;
mod machine;
mod pointer_controller;
mod probe_controller;
mod surface;
mod tooltip_controller;
mod validation;
mod viewport_commands;
mod zoom_factor_resolver;

pub use config::{ActivationMode, InteractionConfig, TooltipBehavior, TrackballBehavior};
pub use controller::{
    ChartController, ConnectionState, ControllerEvent, ListenerId, SharedSurface,
};
pub use machine::InteractionStateMachine;
pub use surface::{BarChart, ChartFamily, InteractiveSurface, LineChart};
