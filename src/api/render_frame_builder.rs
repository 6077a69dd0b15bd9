use tracing::debug;

use crate::core::{ChartDataset, LineGeometry, MultiSeriesScaler, Rect, Series, ValueDomain};
use crate::error::ChartResult;
use crate::interaction::HapticFeedback;
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};
use crate::style::{ColorScheme, palette};

use super::MultiLineChart;

const PLOT_CORNER_RADIUS: f64 = 20.0;
const SERIES_STROKE_WIDTH: f64 = 3.0;
const SHADOW_OFFSET: f64 = 4.0;
const SHADOW_ALPHA: f64 = 0.35;
const CONTENT_PADDING: f64 = 12.0;
const TITLE_FONT_SIZE: f64 = 16.0;
const LEGEND_FONT_SIZE: f64 = 12.0;
const VALUE_FONT_SIZE: f64 = 14.0;
const INDICATOR_DIAMETER: f64 = 14.0;
const INDICATOR_BORDER_WIDTH: f64 = 3.0;

impl<R: Renderer, H: HapticFeedback> MultiLineChart<R, H> {
    /// Materializes one draw pass for `scheme`.
    ///
    /// Paint order: drop shadow, plot background, series (dataset order),
    /// indicator knob; texts go on top.
    pub fn build_render_frame(&self, scheme: ColorScheme) -> ChartResult<RenderFrame> {
        let style = self.config.style.resolve(scheme);
        let form = self.config.form;
        let plot = self.plot_rect();
        let domain = self.domain();

        let mut frame = RenderFrame::new(form);

        if self.config.drop_shadow {
            frame.rects.push(
                RectPrimitive::new(
                    plot.origin.x,
                    plot.origin.y + SHADOW_OFFSET,
                    plot.width(),
                    plot.height(),
                    style.drop_shadow_color.with_alpha(SHADOW_ALPHA),
                )
                .with_corner_radius(PLOT_CORNER_RADIUS),
            );
        }
        frame.rects.push(
            RectPrimitive::new(
                plot.origin.x,
                plot.origin.y,
                plot.width(),
                plot.height(),
                style.background_color,
            )
            .with_corner_radius(PLOT_CORNER_RADIUS),
        );

        frame.lines.extend(project_series_lines(
            &self.dataset,
            plot,
            domain,
            self.scaler,
        ));

        let mut header_y = CONTENT_PADDING;
        if !self.config.title.is_empty() {
            frame.texts.push(TextPrimitive::new(
                self.config.title.as_str(),
                CONTENT_PADDING,
                header_y,
                TITLE_FONT_SIZE,
                style.text_color,
                TextHAlign::Left,
            ));
            header_y += TITLE_FONT_SIZE + 4.0;
        }
        if let Some(legend) = self.config.legend.as_deref().filter(|legend| !legend.is_empty()) {
            frame.texts.push(TextPrimitive::new(
                legend,
                CONTENT_PADDING,
                header_y,
                LEGEND_FONT_SIZE,
                style.legend_text_color,
                TextHAlign::Left,
            ));
        }
        if let Some(rate) = self.config.rate_value {
            frame.texts.push(TextPrimitive::new(
                format!("{rate}%"),
                form.width - CONTENT_PADDING,
                CONTENT_PADDING,
                LEGEND_FONT_SIZE,
                style.accent_color,
                TextHAlign::Right,
            ));
        }

        if self.selection.indicator_visible() {
            let location = self.selection.touch_location();
            if let Some(hit) = self.sample_at_in(location, domain) {
                let radius = INDICATOR_DIAMETER / 2.0;
                frame.overlays.push(
                    RectPrimitive::new(
                        hit.position.x - radius,
                        hit.position.y - radius,
                        INDICATOR_DIAMETER,
                        INDICATOR_DIAMETER,
                        palette::INDICATOR_KNOB,
                    )
                    .with_corner_radius(radius)
                    .with_border(INDICATOR_BORDER_WIDTH, Color::WHITE),
                );
                frame.texts.push(TextPrimitive::new(
                    self.value_format.format(hit.value),
                    hit.position.x,
                    plot.origin.y + CONTENT_PADDING / 2.0,
                    VALUE_FONT_SIZE,
                    style.text_color,
                    TextHAlign::Center,
                ));
            }
        }

        debug!(
            scheme = ?scheme,
            rects = frame.rects.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "build multi-line render frame"
        );
        Ok(frame)
    }
}

fn series_lines(
    series: &Series,
    plot: Rect,
    domain: ValueDomain,
    scaler: MultiSeriesScaler,
) -> Vec<LinePrimitive> {
    let frame = scaler.display_frame(plot, series.len());
    let segments =
        LineGeometry::new(frame, domain, series.len()).project_segments(series.points());
    let count = segments.len() as f64;

    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let color = series.gradient().color_at((index as f64 + 0.5) / count);
            LinePrimitive::new(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                SERIES_STROKE_WIDTH,
                color,
            )
        })
        .collect()
}

#[cfg(not(feature = "parallel-projection"))]
fn project_series_lines(
    dataset: &ChartDataset,
    plot: Rect,
    domain: ValueDomain,
    scaler: MultiSeriesScaler,
) -> Vec<LinePrimitive> {
    dataset
        .series()
        .iter()
        .flat_map(|series| series_lines(series, plot, domain, scaler))
        .collect()
}

#[cfg(feature = "parallel-projection")]
fn project_series_lines(
    dataset: &ChartDataset,
    plot: Rect,
    domain: ValueDomain,
    scaler: MultiSeriesScaler,
) -> Vec<LinePrimitive> {
    use rayon::prelude::*;

    let per_series: Vec<Vec<LinePrimitive>> = dataset
        .series()
        .par_iter()
        .map(|series| series_lines(series, plot, domain, scaler))
        .collect();
    per_series.into_iter().flatten().collect()
}
