use bar_chart_rs::api::{ChartConfig, RenderStyle, build_render_frame};
use bar_chart_rs::core::{ChartLayout, DataPoint, Margins, Viewport};
use bar_chart_rs::render::{ContainerRef, SvgDocument};
use bar_chart_rs::render_bar_chart;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn hourly_points(count: i64) -> Vec<DataPoint> {
    (0..count)
        .map(|hour| DataPoint::new(hour, ((hour * 37) % 101) as f64 * 1.5))
        .collect()
}

fn bench_layout_1k(c: &mut Criterion) {
    let points = hourly_points(1_000);
    let viewport = Viewport::new(1920, 600);

    c.bench_function("layout_1k_bins", |b| {
        b.iter(|| {
            let _ = ChartLayout::build(black_box(&points), viewport, Margins::FIXED)
                .expect("layout should build");
        })
    });
}

fn bench_frame_build_24(c: &mut Criterion) {
    let points = hourly_points(24);
    let config = ChartConfig::new(800, 300, "Transferred data", "Time", "Data [kB]");
    let layout = ChartLayout::build(&points, config.viewport, config.margins).expect("layout");

    c.bench_function("frame_build_24_bins", |b| {
        b.iter(|| {
            let _ = build_render_frame(black_box(&layout), &config, RenderStyle::default());
        })
    });
}

fn bench_svg_render_24(c: &mut Criterion) {
    let points = hourly_points(24);
    let config = ChartConfig::new(800, 300, "Transferred data", "Time", "Data [kB]");
    let container = ContainerRef::new("#plot_data_today");
    let mut document = SvgDocument::new().with_container(container.clone());

    c.bench_function("svg_render_24_bins", |b| {
        b.iter(|| {
            let _ = render_bar_chart(&mut document, black_box(&points), &container, &config)
                .expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_layout_1k,
    bench_frame_build_24,
    bench_svg_render_24
);
criterion_main!(benches);
