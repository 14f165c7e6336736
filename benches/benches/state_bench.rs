//! # StateVector Benchmarks
//!
//! Measures the state-vector engine hot paths: construction, single-qubit
//! gates, CNOT and sampling. Every operation is O(2ⁿ).
//!
//! Run: `cargo bench --bench state_bench`
//! Engine logs: `RUST_LOG=qubit_core=debug cargo bench --bench state_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qubit_core::{Circuit, Gate, StandardGate, StateVector};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SIZES: [usize; 5] = [2, 4, 6, 8, 10];

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qubit_core=error".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Estado de n qubits com todas as amplitudes não nulas
fn spread(n: usize) -> StateVector {
    (0..n).fold(StateVector::zero(n).unwrap(), |s, q| {
        s.apply_gate(&Gate::ry(0.3 + q as f64), q).unwrap()
    })
}

/// Benchmark StateVector creation
fn bench_state_creation(c: &mut Criterion) {
    init_tracing();
    let mut group = c.benchmark_group("state_creation");

    for n in SIZES.iter() {
        group.bench_with_input(BenchmarkId::new("zero", n), n, |b, &n| {
            b.iter(|| black_box(StateVector::zero(n).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark single-qubit gate application
fn bench_single_qubit_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit_gates");

    for n in SIZES.iter() {
        let state = spread(*n);

        group.bench_with_input(BenchmarkId::new("hadamard_q0", n), &state, |b, s| {
            b.iter(|| black_box(s.apply_gate(&Gate::H, 0).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("rz_top", n), &state, |b, s| {
            let gate = Gate::rz(0.7);
            b.iter(|| black_box(s.apply_gate(&gate, s.num_qubits() - 1).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark two-qubit gates
fn bench_two_qubit_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_qubit_gates");

    for n in SIZES.iter() {
        let state = spread(*n);

        group.bench_with_input(BenchmarkId::new("cnot", n), &state, |b, s| {
            b.iter(|| black_box(s.apply_cnot(0, 1).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("swap", n), &state, |b, s| {
            b.iter(|| black_box(s.apply_swap(0, s.num_qubits() - 1).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark full circuit runs (H layer + CNOT ladder)
fn bench_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit");

    for n in SIZES.iter() {
        let mut circuit = Circuit::new();
        for q in 0..*n {
            circuit.gate(StandardGate::H, q);
        }
        for q in 1..*n {
            circuit.cnot(q - 1, q);
        }
        let zero = StateVector::zero(*n).unwrap();

        group.bench_with_input(BenchmarkId::new("h_layer_cnot_ladder", n), &zero, |b, s| {
            b.iter(|| black_box(circuit.run(s).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark sampling
fn bench_measurement(c: &mut Criterion) {
    let mut group = c.benchmark_group("measurement");

    for n in SIZES.iter() {
        let state = spread(*n);

        group.bench_with_input(BenchmarkId::new("measure", n), &state, |b, s| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(s.measure(&mut rng)))
        });

        group.bench_with_input(BenchmarkId::new("probabilities", n), &state, |b, s| {
            b.iter(|| black_box(s.probabilities()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_state_creation,
    bench_single_qubit_gates,
    bench_two_qubit_gates,
    bench_circuit,
    bench_measurement,
);

criterion_main!(benches);
