//! # Entanglement Benchmarks
//!
//! Density matrix construction is O(4ⁿ) and dominates; the direct
//! single-qubit reduction stays O(2ⁿ).
//!
//! Run: `cargo bench --bench entanglement_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qubit_core::{Gate, StateVector};
use qubit_entanglement::{DensityMatrix, concurrence, entanglement_entropy, reduced_density_matrix};

/// Estado emaranhado de n qubits (Ry em cada qubit + escada de CNOT)
fn entangled(n: usize) -> StateVector {
    let mut state = (0..n).fold(StateVector::zero(n).unwrap(), |s, q| {
        s.apply_gate(&Gate::ry(0.4 + q as f64), q).unwrap()
    });
    for q in 1..n {
        state = state.apply_cnot(q - 1, q).unwrap();
    }
    state
}

/// Benchmark ρ = |ψ⟩⟨ψ| and partial trace
fn bench_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("density");

    for n in [2usize, 4, 6].iter() {
        let state = entangled(*n);
        let rho = DensityMatrix::from_state(&state);

        group.bench_with_input(BenchmarkId::new("from_state", n), &state, |b, s| {
            b.iter(|| black_box(DensityMatrix::from_state(s)))
        });

        group.bench_with_input(BenchmarkId::new("partial_trace_q0", n), &rho, |b, r| {
            b.iter(|| black_box(r.partial_trace(0).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark single-qubit reduction vs repeated partial trace
fn bench_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduction");

    for n in [2usize, 4, 6, 8].iter() {
        let state = entangled(*n);

        group.bench_with_input(BenchmarkId::new("reduced_density_matrix", n), &state, |b, s| {
            b.iter(|| black_box(reduced_density_matrix(s, 0).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("entanglement_entropy", n), &state, |b, s| {
            b.iter(|| black_box(entanglement_entropy(s, 0).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark concurrence (2 qubits only)
fn bench_concurrence(c: &mut Criterion) {
    let state = entangled(2);
    c.bench_function("concurrence", |b| {
        b.iter(|| black_box(concurrence(&state).unwrap()))
    });
}

criterion_group!(benches, bench_density, bench_reduction, bench_concurrence);

criterion_main!(benches);
