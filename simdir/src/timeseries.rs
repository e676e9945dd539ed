//! Minimal time series container for diagnostics columns.

/// Ordered samples `y(t)`, sorted by `t` as produced by the readers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeries {
    pub t: Vec<f64>,
    pub y: Vec<f64>,
}

impl TimeSeries {
    /// Build a series from matching time and value vectors.
    ///
    /// # Panics
    /// Panics if `t` and `y` have different lengths.
    pub fn new(t: Vec<f64>, y: Vec<f64>) -> Self {
        assert_eq!(
            t.len(),
            y.len(),
            "time and value vectors must have the same length"
        );
        Self { t, y }
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}
