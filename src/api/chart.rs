use tracing::{debug, trace, warn};

use crate::core::{
    ChartDataset, LineGeometry, MultiSeriesScaler, Point, Rect, SampleHit, ValueDomain,
};
use crate::error::ChartResult;
use crate::interaction::{HapticFeedback, NoHaptics, SelectionState};
use crate::render::Renderer;
use crate::style::ColorScheme;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::{MultiLineChartConfig, ValueFormat};

/// Extra plot height on top of half the form height, room for the indicator label.
pub const PLOT_EXTRA_HEIGHT: f64 = 30.0;

/// Multi-series line chart on one shared vertical scale.
///
/// Owns the immutable dataset, the drag-selection state and the feedback
/// sink. Scaling is recomputed on every layout/render pass.
pub struct MultiLineChart<R: Renderer, H: HapticFeedback = NoHaptics> {
    pub(super) renderer: R,
    pub(super) haptics: H,
    pub(super) config: MultiLineChartConfig,
    pub(super) value_format: ValueFormat,
    pub(super) dataset: ChartDataset,
    pub(super) scaler: MultiSeriesScaler,
    pub(super) selection: SelectionState,
}

impl<R: Renderer> MultiLineChart<R, NoHaptics> {
    pub fn new(
        renderer: R,
        config: MultiLineChartConfig,
        dataset: ChartDataset,
    ) -> ChartResult<Self> {
        Self::with_haptics(renderer, config, dataset, NoHaptics)
    }
}

impl<R: Renderer, H: HapticFeedback> MultiLineChart<R, H> {
    pub fn with_haptics(
        renderer: R,
        config: MultiLineChartConfig,
        dataset: ChartDataset,
        haptics: H,
    ) -> ChartResult<Self> {
        config.validate()?;
        let value_format = config.value_format()?;
        let scaler = MultiSeriesScaler::new(config.step_size)?;

        if !dataset.is_empty() && config.selection_series >= dataset.len() {
            warn!(
                selection_series = config.selection_series,
                series_count = dataset.len(),
                "selection series out of range; drag gestures will not select values"
            );
        }
        debug!(
            series_count = dataset.len(),
            point_count = dataset.point_count(),
            step_size = config.step_size,
            "create multi-line chart"
        );

        Ok(Self {
            renderer,
            haptics,
            config,
            value_format,
            dataset,
            scaler,
            selection: SelectionState::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &MultiLineChartConfig {
        &self.config
    }

    #[must_use]
    pub fn dataset(&self) -> &ChartDataset {
        &self.dataset
    }

    #[must_use]
    pub fn scaler(&self) -> MultiSeriesScaler {
        self.scaler
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    #[must_use]
    pub fn haptics(&self) -> &H {
        &self.haptics
    }

    #[must_use]
    pub fn value_format(&self) -> &ValueFormat {
        &self.value_format
    }

    /// Global min/max over every series; `(0, 0)` without samples.
    #[must_use]
    pub fn domain(&self) -> ValueDomain {
        self.scaler.domain(&self.dataset)
    }

    /// Plot area: full form width, half the form height plus label room,
    /// centered vertically.
    #[must_use]
    pub fn plot_rect(&self) -> Rect {
        let form = self.config.form;
        let height = form.height / 2.0 + PLOT_EXTRA_HEIGHT;
        Rect::from_xywh(0.0, (form.height - height) / 2.0, form.width, height)
    }

    #[must_use]
    pub fn series_frame(&self, index: usize) -> Option<Rect> {
        let series = self.dataset.get(index)?;
        Some(self.scaler.display_frame(self.plot_rect(), series.len()))
    }

    #[must_use]
    pub fn series_geometry(&self, index: usize) -> Option<LineGeometry> {
        self.series_geometry_in(index, self.domain())
    }

    pub(super) fn series_geometry_in(
        &self,
        index: usize,
        domain: ValueDomain,
    ) -> Option<LineGeometry> {
        let series = self.dataset.get(index)?;
        let frame = self.scaler.display_frame(self.plot_rect(), series.len());
        Some(LineGeometry::new(frame, domain, series.len()))
    }

    /// Sample of the selection series under `location`.
    #[must_use]
    pub fn sample_at(&self, location: Point) -> Option<SampleHit> {
        self.sample_at_in(location, self.domain())
    }

    pub(super) fn sample_at_in(&self, location: Point, domain: ValueDomain) -> Option<SampleHit> {
        let index = self.config.selection_series;
        let series = self.dataset.get(index)?;
        self.series_geometry_in(index, domain)?
            .closest_sample(location.x, series.points())
    }

    /// Handles a drag update at `location` (chart coordinates).
    ///
    /// Returns `true` when the selected value changed and selection feedback
    /// was played.
    pub fn drag_changed(&mut self, location: Point) -> bool {
        let hit = self.sample_at(location);
        let changed = self
            .selection
            .drag_changed(location, hit.map(|hit| hit.value));
        trace!(
            x = location.x,
            y = location.y,
            index = hit.map(|hit| hit.index),
            changed,
            "drag changed"
        );
        if changed {
            self.haptics.play_selection();
        }
        changed
    }

    pub fn drag_ended(&mut self) {
        trace!("drag ended");
        self.selection.drag_ended();
    }

    pub fn render(&mut self, scheme: ColorScheme) -> ChartResult<()> {
        let frame = self.build_render_frame(scheme)?;
        self.renderer.render(&frame)
    }

    /// Renders into an external cairo context, e.g. from a GTK draw callback.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        scheme: ColorScheme,
    ) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame(scheme)?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
