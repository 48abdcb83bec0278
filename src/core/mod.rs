pub mod coordinate_system;
pub mod nice_bounds;
pub mod primitives;
pub mod series;
pub mod types;
pub mod viewport;

pub use coordinate_system::CoordinateSystem;
pub use nice_bounds::{
    DEFAULT_TARGET_TICKS, NiceBounds, calculate_nice_bounds, calculate_nice_bounds_with_ticks,
};
pub use series::{Series, SeriesSet};
pub use types::{DataPoint, DataWindow, Rect};
pub use viewport::{
    AxisMode, EdgeBehavior, PanOverflow, ViewportBehavior, ViewportController, ViewportState,
};
