use serde::{Deserialize, Serialize};

use crate::style::GradientColor;

/// One ordered run of samples drawn with its own gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    points: Vec<f64>,
    gradient: GradientColor,
}

impl Series {
    #[must_use]
    pub fn new(points: Vec<f64>, gradient: GradientColor) -> Self {
        Self { points, gradient }
    }

    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    #[must_use]
    pub fn gradient(&self) -> &GradientColor {
        &self.gradient
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<(Vec<f64>, GradientColor)> for Series {
    fn from((points, gradient): (Vec<f64>, GradientColor)) -> Self {
        Self::new(points, gradient)
    }
}

/// Ordered, immutable collection of series.
///
/// A series is identified by its position, which also defines draw order
/// (later series are painted on top).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartDataset {
    series: Vec<Series>,
}

impl ChartDataset {
    #[must_use]
    pub fn new(series: Vec<Series>) -> Self {
        Self { series }
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Series> {
        self.series.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total number of samples over every series.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }

    /// Flattened view of every sample, series by series.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.series
            .iter()
            .flat_map(|series| series.points().iter().copied())
    }
}

impl<S: Into<Series>> FromIterator<S> for ChartDataset {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
