use fngraph::config::PlotterConfig;
use fngraph::render::RecordingSurface;
use fngraph::{GraphTrace, Plotter};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_sample_graph_fine_step(c: &mut Criterion) {
    let mut surface = RecordingSurface::new(1920, 1080);
    let plotter = Plotter::new(
        &mut surface,
        PlotterConfig::default().with_smoothness_scale(0.5),
    );

    c.bench_function("sample_graph_fine_step", |b| {
        b.iter(|| {
            let points = plotter.sample_graph(&|x: f64| (x * 1.7).sin() * x.cos());
            black_box(points);
        })
    });
}

fn bench_draw_axes_and_traces(c: &mut Criterion) {
    let square = |x: f64| x * x;
    let wave = |x: f64| (3.0 * x).sin();

    let mut surface = RecordingSurface::new(1600, 900);
    c.bench_function("draw_axes_and_three_traces", |b| {
        b.iter(|| {
            surface.clear();
            let mut plotter = Plotter::new(&mut surface, PlotterConfig::default());
            plotter.draw_axes().expect("axes");
            plotter
                .draw_graphs(black_box(&[
                    GraphTrace::new(&square),
                    GraphTrace::new(&wave),
                    GraphTrace::new(&f64::tanh),
                ]))
                .expect("graphs");
            black_box(surface.commands().len());
        })
    });
}

criterion_group!(
    benches,
    bench_sample_graph_fine_step,
    bench_draw_axes_and_traces
);
criterion_main!(benches);
