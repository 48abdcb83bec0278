use indexmap::IndexMap;

use crate::core::types::{DataPoint, DataWindow};
use crate::error::{ChartError, ChartResult};

/// Ordered, read-only sample sequence with a stable name.
///
/// Samples keep insertion order. `sorted_by_x` is computed once at
/// construction so hit-testing can pick binary search safely.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    points: Vec<DataPoint>,
    visible: bool,
    sorted_by_x: bool,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<DataPoint>) -> ChartResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ChartError::InvalidData(
                "series name must not be empty".to_owned(),
            ));
        }
        for point in &points {
            point.validate()?;
        }
        let sorted_by_x = points.windows(2).all(|pair| pair[0].x <= pair[1].x);
        Ok(Self {
            name,
            points,
            visible: true,
            sorted_by_x,
        })
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_sorted_by_x(&self) -> bool {
        self.sorted_by_x
    }

    /// Returns `(x_min, x_max, y_min, y_max)` over all samples.
    #[must_use]
    pub fn extents(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.points.first()?;
        let mut acc = (first.x, first.x, first.y, first.y);
        for point in &self.points[1..] {
            acc.0 = acc.0.min(point.x);
            acc.1 = acc.1.max(point.x);
            acc.2 = acc.2.min(point.y);
            acc.3 = acc.3.max(point.y);
        }
        Some(acc)
    }
}

/// Insertion-ordered collection of series keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet {
    entries: IndexMap<String, Series>,
}

impl SeriesSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a series. A series with the same name is replaced in place.
    pub fn insert(&mut self, series: Series) {
        self.entries.insert(series.name().to_owned(), series);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Series> {
        self.entries.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Series> {
        self.entries.shift_remove(name)
    }

    /// Toggles visibility. Returns `false` when no series has this name.
    pub fn set_visible(&mut self, name: &str, visible: bool) -> bool {
        match self.entries.get_mut(name) {
            Some(series) => {
                series.set_visible(visible);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.entries.values()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Series> {
        self.entries.values().filter(|series| series.is_visible())
    }

    #[must_use]
    pub fn total_points(&self) -> usize {
        self.entries.values().map(Series::len).sum()
    }

    /// Raw extents over visible, non-empty series.
    #[must_use]
    pub fn visible_extents(&self) -> Option<DataWindow> {
        self.visible()
            .filter_map(Series::extents)
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3)))
            .map(|(x_min, x_max, y_min, y_max)| DataWindow::new(x_min, x_max, y_min, y_max))
    }
}

impl FromIterator<Series> for SeriesSet {
    fn from_iter<I: IntoIterator<Item = Series>>(iter: I) -> Self {
        let mut set = Self::new();
        for series in iter {
            set.insert(series);
        }
        set
    }
}
