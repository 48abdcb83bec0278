use tracing::{debug, trace};

use crate::core::{
    CoordinateSystem, DataWindow, Rect, Series, SeriesSet, ViewportController,
    calculate_nice_bounds,
};
use crate::error::{ChartError, ChartResult};

use super::InteractionStateMachine;
use super::validation::validate_device_pixel_ratio;

impl InteractionStateMachine {
    #[must_use]
    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    #[must_use]
    pub fn chart_area(&self) -> Option<Rect> {
        self.chart_area
    }

    #[must_use]
    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    #[must_use]
    pub fn data_bounds_override(&self) -> Option<DataWindow> {
        self.bounds_override
    }

    /// Sets the screen rectangle the plot occupies.
    pub fn set_chart_area(&mut self, chart_area: Rect) -> ChartResult<()> {
        if !chart_area.is_valid() {
            return Err(ChartError::DegenerateCoordinateSystem(format!(
                "chart area must be finite with positive extent: width={}, height={}",
                chart_area.width, chart_area.height
            )));
        }
        let previous = self.chart_area.replace(chart_area);
        if let Err(err) = self.rebuild_coordinate_system() {
            self.chart_area = previous;
            return Err(err);
        }
        trace!(
            width = chart_area.width,
            height = chart_area.height,
            "chart area updated"
        );
        Ok(())
    }

    pub fn set_device_pixel_ratio(&mut self, device_pixel_ratio: f64) -> ChartResult<()> {
        let device_pixel_ratio = validate_device_pixel_ratio(device_pixel_ratio)?;
        let previous = std::mem::replace(&mut self.device_pixel_ratio, device_pixel_ratio);
        if let Err(err) = self.rebuild_coordinate_system() {
            self.device_pixel_ratio = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Replaces the whole series collection.
    ///
    /// An active tooltip/crosshair stays shown; only its placement is
    /// recomputed against the rebuilt coordinate system.
    pub fn set_series<I>(&mut self, series: I) -> ChartResult<()>
    where
        I: IntoIterator<Item = Series>,
    {
        let next: SeriesSet = series.into_iter().collect();
        let series_count = next.len();
        let point_count = next.total_points();
        self.replace_series(next)?;
        debug!(series_count, point_count, "series replaced");
        Ok(())
    }

    /// Inserts a series, replacing a same-named one in place.
    pub fn upsert_series(&mut self, series: Series) -> ChartResult<()> {
        let mut next = self.series.clone();
        next.insert(series);
        self.replace_series(next)
    }

    pub fn remove_series(&mut self, name: &str) -> ChartResult<bool> {
        let mut next = self.series.clone();
        if next.remove(name).is_none() {
            return Ok(false);
        }
        self.replace_series(next)?;
        Ok(true)
    }

    /// Toggles series visibility. Returns `false` for an unknown name.
    pub fn set_series_visible(&mut self, name: &str, visible: bool) -> ChartResult<bool> {
        let mut next = self.series.clone();
        if !next.set_visible(name, visible) {
            return Ok(false);
        }
        self.replace_series(next)?;
        Ok(true)
    }

    /// Pins the data window instead of auto-scaling. `None` restores auto-scaling.
    pub fn set_data_bounds(&mut self, bounds: Option<DataWindow>) -> ChartResult<()> {
        if let Some(window) = bounds {
            if !window.is_valid() {
                return Err(ChartError::DegenerateCoordinateSystem(format!(
                    "data bounds must be finite with max > min: x=[{}, {}], y=[{}, {}]",
                    window.x_min, window.x_max, window.y_min, window.y_max
                )));
            }
        }
        let previous = std::mem::replace(&mut self.bounds_override, bounds);
        if let Err(err) = self.rebuild_coordinate_system() {
            self.bounds_override = previous;
            return Err(err);
        }
        Ok(())
    }

    fn replace_series(&mut self, next: SeriesSet) -> ChartResult<()> {
        let previous = std::mem::replace(&mut self.series, next);
        if let Err(err) = self.rebuild_coordinate_system() {
            self.series = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Rebuilds the base coordinate system after a layout or data change.
    ///
    /// Zoom and pan survive the rebuild. Without a chart area or visible
    /// data there is no coordinate system and hit-tests resolve to nothing.
    fn rebuild_coordinate_system(&mut self) -> ChartResult<()> {
        let Some(chart_area) = self.chart_area else {
            self.viewport = None;
            return Ok(());
        };
        let window = match self.bounds_override {
            Some(window) => Some(window),
            None => self.auto_scaled_window()?,
        };
        let Some(window) = window else {
            self.viewport = None;
            return Ok(());
        };

        let base = CoordinateSystem::new(chart_area, window, self.device_pixel_ratio)?;
        match self.viewport.as_mut() {
            Some(viewport) => viewport.set_base(base)?,
            None => self.viewport = Some(ViewportController::new(base, self.config.viewport)?),
        }
        self.after_viewport_change();
        Ok(())
    }

    fn auto_scaled_window(&self) -> ChartResult<Option<DataWindow>> {
        let Some(extents) = self.series.visible_extents() else {
            return Ok(None);
        };
        let x = calculate_nice_bounds(extents.x_min, extents.x_max)?;
        let y = calculate_nice_bounds(extents.y_min, extents.y_max)?;
        Ok(Some(DataWindow::new(x.min, x.max, y.min, y.max)))
    }
}
