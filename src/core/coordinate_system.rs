use serde::{Deserialize, Serialize};

use crate::core::nice_bounds::NiceBounds;
use crate::core::types::{DataWindow, Rect};
use crate::error::{ChartError, ChartResult};

/// Immutable affine mapping between a data window and a chart area.
///
/// Screen Y grows downward while data Y grows upward, so the Y mapping is
/// inverted in both directions. Any change to the area, the window or the
/// device pixel ratio produces a new value through the `with_*` builders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSystem {
    chart_area: Rect,
    window: DataWindow,
    device_pixel_ratio: f64,
}

impl CoordinateSystem {
    pub fn new(chart_area: Rect, window: DataWindow, device_pixel_ratio: f64) -> ChartResult<Self> {
        if !chart_area.is_valid() {
            return Err(ChartError::DegenerateCoordinateSystem(format!(
                "chart area must be finite with positive extent: width={}, height={}",
                chart_area.width, chart_area.height
            )));
        }
        if !window.is_valid() {
            return Err(ChartError::DegenerateCoordinateSystem(format!(
                "data window must be finite with max > min: x=[{}, {}], y=[{}, {}]",
                window.x_min, window.x_max, window.y_min, window.y_max
            )));
        }
        if !window.x_span().is_finite() || !window.y_span().is_finite() {
            return Err(ChartError::DegenerateCoordinateSystem(
                "data window span overflows f64".to_owned(),
            ));
        }
        if !device_pixel_ratio.is_finite() || device_pixel_ratio <= 0.0 {
            return Err(ChartError::DegenerateCoordinateSystem(format!(
                "device pixel ratio must be finite and > 0, got {device_pixel_ratio}"
            )));
        }

        Ok(Self {
            chart_area,
            window,
            device_pixel_ratio,
        })
    }

    /// Builds a system from auto-scaled axis bounds.
    pub fn from_nice_bounds(
        chart_area: Rect,
        x_bounds: NiceBounds,
        y_bounds: NiceBounds,
        device_pixel_ratio: f64,
    ) -> ChartResult<Self> {
        Self::new(
            chart_area,
            DataWindow::new(x_bounds.min, x_bounds.max, y_bounds.min, y_bounds.max),
            device_pixel_ratio,
        )
    }

    #[must_use]
    pub fn chart_area(&self) -> Rect {
        self.chart_area
    }

    #[must_use]
    pub fn window(&self) -> DataWindow {
        self.window
    }

    #[must_use]
    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    pub fn with_window(&self, window: DataWindow) -> ChartResult<Self> {
        Self::new(self.chart_area, window, self.device_pixel_ratio)
    }

    pub fn with_chart_area(&self, chart_area: Rect) -> ChartResult<Self> {
        Self::new(chart_area, self.window, self.device_pixel_ratio)
    }

    pub fn with_device_pixel_ratio(&self, device_pixel_ratio: f64) -> ChartResult<Self> {
        Self::new(self.chart_area, self.window, device_pixel_ratio)
    }

    /// Logical pixels per data unit along X.
    #[must_use]
    pub fn x_scale(&self) -> f64 {
        self.chart_area.width / self.window.x_span()
    }

    /// Logical pixels per data unit along Y.
    #[must_use]
    pub fn y_scale(&self) -> f64 {
        self.chart_area.height / self.window.y_span()
    }

    #[must_use]
    pub fn data_to_screen_x(&self, x: f64) -> f64 {
        let normalized = (x - self.window.x_min) / self.window.x_span();
        self.chart_area.x + normalized * self.chart_area.width
    }

    #[must_use]
    pub fn data_to_screen_y(&self, y: f64) -> f64 {
        let normalized = (y - self.window.y_min) / self.window.y_span();
        self.chart_area.bottom() - normalized * self.chart_area.height
    }

    #[must_use]
    pub fn screen_to_data_x(&self, screen_x: f64) -> f64 {
        let normalized = (screen_x - self.chart_area.x) / self.chart_area.width;
        self.window.x_min + normalized * self.window.x_span()
    }

    #[must_use]
    pub fn screen_to_data_y(&self, screen_y: f64) -> f64 {
        let normalized = (self.chart_area.bottom() - screen_y) / self.chart_area.height;
        self.window.y_min + normalized * self.window.y_span()
    }

    #[must_use]
    pub fn data_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (self.data_to_screen_x(x), self.data_to_screen_y(y))
    }

    #[must_use]
    pub fn screen_to_data(&self, screen_x: f64, screen_y: f64) -> (f64, f64) {
        (self.screen_to_data_x(screen_x), self.screen_to_data_y(screen_y))
    }

    /// Converts a logical-pixel length to physical device pixels.
    #[must_use]
    pub fn to_physical_pixels(&self, logical: f64) -> f64 {
        logical * self.device_pixel_ratio
    }

    #[must_use]
    pub fn contains_screen(&self, screen_x: f64, screen_y: f64) -> bool {
        self.chart_area.contains(screen_x, screen_y)
    }
}
