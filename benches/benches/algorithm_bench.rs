//! # Algorithm Benchmarks
//!
//! Grover search with the optimal iteration count, O(√N · N), and the
//! prepared-state constructors.
//!
//! Run: `cargo bench --bench algorithm_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qubit_algorithms::{
    bell_state, ghz_state, grover_search, grover_step, optimal_grover_iterations,
    uniform_superposition, w_state,
};

/// Benchmark a single Grover iteration
fn bench_grover_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("grover_step");

    for n in [2usize, 4, 6, 8, 10].iter() {
        let state = uniform_superposition(*n).unwrap();
        group.bench_with_input(BenchmarkId::new("step", n), &state, |b, s| {
            b.iter(|| black_box(grover_step(s, 1).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark a full Grover search
fn bench_grover_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("grover_search");

    for n in [2usize, 4, 6, 8].iter() {
        let iterations = optimal_grover_iterations(*n);
        group.bench_with_input(BenchmarkId::new("optimal", n), n, |b, &n| {
            b.iter(|| black_box(grover_search(n, 1, iterations).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark state preparation
fn bench_prepared_states(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepared_states");

    group.bench_function("bell_psi_minus", |b| {
        b.iter(|| black_box(bell_state(3).unwrap()))
    });

    for n in [3usize, 6, 10].iter() {
        group.bench_with_input(BenchmarkId::new("ghz", n), n, |b, &n| {
            b.iter(|| black_box(ghz_state(n).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("w", n), n, |b, &n| {
            b.iter(|| black_box(w_state(n).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_grover_step,
    bench_grover_search,
    bench_prepared_states,
);

criterion_main!(benches);
