use crate::core::{ChartDataset, Rect, ValueDomain, compute_domain};
use crate::error::{ChartError, ChartResult};

/// Screen units per data point used when nothing else is configured.
pub const DEFAULT_STEP_SIZE: f64 = 12.0;

/// Shared-scale helper for multi-series line charts.
///
/// Holds a validated step size; every computation is pure and recomputed on
/// demand, so callers can run it on every layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiSeriesScaler {
    step_size: f64,
}

impl MultiSeriesScaler {
    pub fn new(step_size: f64) -> ChartResult<Self> {
        Ok(Self {
            step_size: validate_step_size(step_size)?,
        })
    }

    #[must_use]
    pub fn step_size(self) -> f64 {
        self.step_size
    }

    #[must_use]
    pub fn domain(self, dataset: &ChartDataset) -> ValueDomain {
        compute_domain(dataset)
    }

    /// Drawing rectangle for a series with `step_count` samples.
    ///
    /// Only the width changes: `container.width / step_size * step_count`.
    #[must_use]
    pub fn display_frame(self, container: Rect, step_count: usize) -> Rect {
        container.with_width(container.width() / self.step_size * step_count as f64)
    }

    /// Drawing rectangles for every series of `dataset`, in dataset order.
    #[must_use]
    pub fn series_frames(self, container: Rect, dataset: &ChartDataset) -> Vec<Rect> {
        dataset
            .series()
            .iter()
            .map(|series| self.display_frame(container, series.len()))
            .collect()
    }
}

/// Free-standing form of [`MultiSeriesScaler::display_frame`].
pub fn compute_display_width(
    container: Rect,
    step_size: f64,
    step_count: usize,
) -> ChartResult<Rect> {
    Ok(MultiSeriesScaler::new(step_size)?.display_frame(container, step_count))
}

pub(crate) fn validate_step_size(step_size: f64) -> ChartResult<f64> {
    if !step_size.is_finite() || step_size <= 0.0 {
        return Err(ChartError::InvalidStepSize(step_size));
    }
    Ok(step_size)
}
