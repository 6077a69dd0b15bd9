use approx::assert_relative_eq;
use multiline_chart::api::{MultiLineChart, MultiLineChartConfig};
use multiline_chart::core::{ChartDataset, Point, Rect, Series, ValueDomain};
use multiline_chart::render::{Color, NullRenderer, TextHAlign};
use multiline_chart::style::{ChartStyle, ColorScheme, GradientColor, palette};

fn sample_dataset() -> ChartDataset {
    ChartDataset::new(vec![
        Series::new(
            vec![8.0, 23.0, 54.0, 32.0, 12.0, 37.0, 7.0, 23.0, 43.0, 4.0, 15.0, 12.0],
            GradientColor::orange(),
        ),
        Series::new(vec![9.0, 11.0, 40.0, 28.0, 19.0], GradientColor::blu_purpl()),
    ])
}

fn build_chart(config: MultiLineChartConfig) -> MultiLineChart<NullRenderer> {
    MultiLineChart::new(NullRenderer::default(), config, sample_dataset()).expect("chart init")
}

fn default_config() -> MultiLineChartConfig {
    MultiLineChartConfig::new("Line chart", 12.0).with_legend("Basic")
}

#[test]
fn chart_exposes_shared_domain_and_plot_rect() {
    let chart = build_chart(default_config());
    assert_eq!(chart.domain(), ValueDomain::new(4.0, 54.0));
    assert_eq!(chart.plot_rect(), Rect::from_xywh(0.0, 45.0, 180.0, 150.0));

    let first = chart.series_frame(0).expect("first series");
    let second = chart.series_frame(1).expect("second series");
    assert_relative_eq!(first.width(), 180.0);
    assert_relative_eq!(second.width(), 75.0);
    assert_eq!(second.origin, first.origin);
    assert!(chart.series_frame(2).is_none());
}

#[test]
fn frame_contains_background_series_and_header() {
    let chart = build_chart(default_config());
    let frame = chart.build_render_frame(ColorScheme::Light).expect("frame");
    frame.validate().expect("valid frame");

    assert_eq!(frame.rects.len(), 2, "drop shadow + background");
    assert_eq!(frame.lines.len(), 11 + 4);
    assert!(frame.overlays.is_empty());
    assert_eq!(frame.texts.len(), 2);
    assert_eq!(frame.texts[0].text, "Line chart");
    assert_eq!(frame.texts[1].text, "Basic");
    assert_eq!(frame.rects[1].fill_color, Color::WHITE);
}

#[test]
fn drop_shadow_toggle_controls_shadow_rect() {
    let chart = build_chart(default_config().with_drop_shadow(false));
    let frame = chart.build_render_frame(ColorScheme::Light).expect("frame");
    assert_eq!(frame.rects.len(), 1);
}

#[test]
fn series_segments_use_their_gradient() {
    let chart = build_chart(default_config());
    let frame = chart.build_render_frame(ColorScheme::Light).expect("frame");

    let orange = GradientColor::orange();
    assert_eq!(frame.lines[0].color, orange.color_at(0.5 / 11.0));
    assert_eq!(frame.lines[10].color, orange.color_at(10.5 / 11.0));

    let blu_purpl = GradientColor::blu_purpl();
    assert_eq!(frame.lines[11].color, blu_purpl.color_at(0.5 / 4.0));
    assert_relative_eq!(frame.lines[14].x2, 75.0);
}

#[test]
fn dark_scheme_uses_dark_style() {
    let chart = build_chart(default_config());
    let frame = chart.build_render_frame(ColorScheme::Dark).expect("frame");
    assert_eq!(frame.rects[1].fill_color, Color::BLACK);
    assert_eq!(frame.texts[0].color, Color::WHITE);

    let custom_dark = ChartStyle {
        background_color: palette::DARK_PURPLE,
        ..ChartStyle::line_view_dark_mode()
    };
    let style = ChartStyle::line_chart_style_one().with_dark_mode_style(custom_dark);
    let chart = build_chart(default_config().with_style(style));
    let frame = chart.build_render_frame(ColorScheme::Dark).expect("frame");
    assert_eq!(frame.rects[1].fill_color, palette::DARK_PURPLE);
}

#[test]
fn indicator_follows_drag_selection() {
    let mut chart = build_chart(default_config());
    chart.drag_changed(Point::new(20.0, 100.0));

    let frame = chart.build_render_frame(ColorScheme::Light).expect("frame");
    frame.validate().expect("valid frame");
    assert_eq!(frame.overlays.len(), 1);
    assert_eq!(frame.texts.len(), 3);

    let knob = frame.overlays[0];
    assert_relative_eq!(knob.x + knob.width / 2.0, 180.0 / 11.0, epsilon = 1e-9);
    assert_relative_eq!(knob.y + knob.height / 2.0, 195.0 - 19.0 * 2.4, epsilon = 1e-9);
    assert_eq!(knob.fill_color, palette::INDICATOR_KNOB);

    let label = &frame.texts[2];
    assert_eq!(label.text, "23.0");
    assert_eq!(label.h_align, TextHAlign::Center);

    chart.drag_ended();
    let frame = chart.build_render_frame(ColorScheme::Light).expect("frame");
    assert!(frame.overlays.is_empty());
    assert_eq!(frame.texts.len(), 2);
}

#[test]
fn indicator_label_uses_value_specifier() {
    let mut chart = build_chart(default_config().with_value_specifier("%.2f pts"));
    chart.drag_changed(Point::new(0.0, 100.0));
    let frame = chart.build_render_frame(ColorScheme::Light).expect("frame");
    assert_eq!(frame.texts[2].text, "8.00 pts");
}

#[test]
fn rate_value_adds_badge_text() {
    let chart = build_chart(default_config().with_rate_value(14));
    let frame = chart.build_render_frame(ColorScheme::Light).expect("frame");
    assert_eq!(frame.texts.len(), 3);
    assert_eq!(frame.texts[2].text, "14%");
    assert_eq!(frame.texts[2].h_align, TextHAlign::Right);
}

#[test]
fn empty_dataset_renders_background_only() {
    let config = MultiLineChartConfig::new("", 12.0);
    let mut chart = MultiLineChart::new(NullRenderer::default(), config, ChartDataset::default())
        .expect("chart init");

    assert_eq!(chart.domain(), ValueDomain::new(0.0, 0.0));
    assert!(!chart.drag_changed(Point::new(10.0, 10.0)));

    chart.render(ColorScheme::Light).expect("render");
    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_rect_count, 2);
    assert_eq!(renderer.last_line_count, 0);
    assert_eq!(renderer.last_text_count, 0);
}

#[test]
fn flat_series_still_produces_finite_geometry() {
    let dataset = ChartDataset::new(vec![Series::new(vec![5.0, 5.0, 5.0], GradientColor::green())]);
    let config = MultiLineChartConfig::new("Flat", 12.0);
    let mut chart = MultiLineChart::new(NullRenderer::default(), config, dataset).expect("chart");

    chart.render(ColorScheme::Dark).expect("render");
    let renderer = chart.into_renderer();
    assert_eq!(renderer.last_line_count, 2);
}

#[test]
fn non_finite_samples_leave_gaps_instead_of_failing() {
    let dataset = ChartDataset::new(vec![Series::new(
        vec![1.0, f64::NAN, 3.0, f64::INFINITY, 2.0, 4.0],
        GradientColor::orange(),
    )]);
    let config = MultiLineChartConfig::new("Gaps", 12.0);
    let mut chart = MultiLineChart::new(NullRenderer::default(), config, dataset).expect("chart");
    assert_eq!(chart.domain(), ValueDomain::new(1.0, 4.0));

    // 6 samples over a 90pt frame: x = 18 lands on the NaN sample.
    chart.drag_changed(Point::new(18.0, 100.0));
    assert!(chart.selection().indicator_visible());
    let frame = chart.build_render_frame(ColorScheme::Light).expect("frame");
    frame.validate().expect("valid frame");
    assert_eq!(frame.lines.len(), 1, "only the 2.0 -> 4.0 segment is drawn");
    assert!(frame.overlays.is_empty());

    chart.render(ColorScheme::Light).expect("render");
}

#[test]
fn nan_in_the_middle_renders() {
    let dataset = ChartDataset::new(vec![Series::new(
        vec![1.0, f64::NAN, 3.0],
        GradientColor::orange(),
    )]);
    let config = MultiLineChartConfig::new("Nan", 12.0);
    let mut chart = MultiLineChart::new(NullRenderer::default(), config, dataset).expect("chart");

    chart.render(ColorScheme::Light).expect("render");
    let renderer = chart.into_renderer();
    assert_eq!(renderer.last_line_count, 0);
}
