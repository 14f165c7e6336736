//! # Rabi Model Benchmarks
//!
//! Pointwise closed forms are O(1); the heatmap grid is O(T·D).
//!
//! Run: `cargo bench --bench rabi_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qubit_rabi::{HeatmapView, RabiDrive, heatmap_grid, rabi_bloch, rabi_p1};

/// Benchmark single evaluations
fn bench_pointwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("rabi_pointwise");

    group.bench_function("p1", |b| {
        b.iter(|| black_box(rabi_p1(black_box(1.3), 2.0, 0.5, 8.0)))
    });

    group.bench_function("bloch", |b| {
        b.iter(|| black_box(rabi_bloch(black_box(1.3), 2.0, 0.5, 8.0)))
    });

    let drive = RabiDrive::new(2.0, 0.5, 8.0);
    group.bench_function("drive_bloch", |b| {
        b.iter(|| black_box(drive.bloch(black_box(1.3))))
    });

    group.finish();
}

/// Benchmark full heatmap grids
fn bench_heatmap(c: &mut Criterion) {
    let mut group = c.benchmark_group("rabi_heatmap");

    for size in [32usize, 128].iter() {
        let times: Vec<f64> = (0..*size).map(|i| i as f64 * 0.1).collect();
        let detunings: Vec<f64> = (0..*size)
            .map(|i| -3.0 + 6.0 * i as f64 / *size as f64)
            .collect();

        for view in [HeatmapView::P1, HeatmapView::X, HeatmapView::Phase] {
            group.bench_with_input(
                BenchmarkId::new(view.name(), size),
                &(&times, &detunings),
                |b, (t, d)| {
                    b.iter(|| black_box(heatmap_grid(view, t, d, 2.0, 8.0)))
                }
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_pointwise, bench_heatmap);

criterion_main!(benches);
