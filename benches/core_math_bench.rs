use criterion::{Criterion, criterion_group, criterion_main};
use multiline_chart::api::{MultiLineChart, MultiLineChartConfig};
use multiline_chart::core::{
    ChartDataset, LineGeometry, MultiSeriesScaler, Rect, Series, compute_domain,
};
use multiline_chart::render::NullRenderer;
use multiline_chart::style::{ColorScheme, GradientColor};
use std::hint::black_box;

fn generated_dataset(series_count: usize, points_per_series: usize) -> ChartDataset {
    (0..series_count)
        .map(|series| {
            let points = (0..points_per_series)
                .map(|i| {
                    let t = i as f64 * 0.01 + series as f64;
                    100.0 + t.sin() * 25.0 + (t * 0.37).cos() * 5.0
                })
                .collect();
            Series::new(points, GradientColor::orange())
        })
        .collect()
}

fn bench_domain_scan_100k(c: &mut Criterion) {
    let dataset = generated_dataset(10, 10_000);

    c.bench_function("domain_scan_100k", |b| {
        b.iter(|| {
            let _ = compute_domain(black_box(&dataset));
        })
    });
}

fn bench_series_projection_10k(c: &mut Criterion) {
    let dataset = generated_dataset(1, 10_000);
    let domain = compute_domain(&dataset);
    let scaler = MultiSeriesScaler::new(12.0).expect("valid step size");
    let container = Rect::from_xywh(0.0, 0.0, 1920.0, 1080.0);
    let Some(series) = dataset.get(0) else {
        return;
    };

    c.bench_function("series_projection_10k", |b| {
        b.iter(|| {
            let frame = scaler.display_frame(black_box(container), series.len());
            let _ = LineGeometry::new(frame, domain, series.len())
                .project_segments(black_box(series.points()));
        })
    });
}

fn bench_render_frame_build(c: &mut Criterion) {
    let config = MultiLineChartConfig::new("bench", 12.0);
    let chart = MultiLineChart::new(NullRenderer::default(), config, generated_dataset(4, 2_000))
        .expect("chart init");

    c.bench_function("render_frame_build_4x2k", |b| {
        b.iter(|| {
            let _ = chart
                .build_render_frame(black_box(ColorScheme::Light))
                .expect("frame build should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_domain_scan_100k,
    bench_series_projection_10k,
    bench_render_frame_build
);
criterion_main!(benches);
