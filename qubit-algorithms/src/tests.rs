//! Testes integrados para qubit-algorithms

use crate::*;
use qubit_core::{Complex, QuantumError, StateVector};
use qubit_entanglement::concurrence;

const EPS: f64 = 1e-9;

fn assert_probs(state: &StateVector, expected: &[f64]) {
    let probs = state.probabilities();
    assert_eq!(probs.len(), expected.len());
    for (i, (p, e)) in probs.iter().zip(expected).enumerate() {
        assert!((p - e).abs() < EPS, "index {i}: {p} != {e}");
    }
}

// =============================================================================
// Estados preparados
// =============================================================================

#[test]
fn test_uniform_superposition() {
    for n in 1..=5 {
        let state = uniform_superposition(n).unwrap();
        let expected = 1.0 / ((1usize << n) as f64).sqrt();
        for amp in state.amplitudes() {
            assert!((amp.re - expected).abs() < EPS);
            assert_eq!(amp.im, 0.0);
        }
        assert!(state.is_normalized());
    }
    assert_eq!(
        uniform_superposition(0),
        Err(AlgorithmError::Core(QuantumError::NoQubits))
    );
}

#[test]
fn test_bell_states_are_maximally_entangled() {
    for variant in 0..4 {
        let state = bell_state(variant).unwrap();
        assert!(state.is_normalized());
        let c = concurrence(&state).unwrap();
        assert!((c - 1.0).abs() < EPS, "variant {variant}: C = {c}");
    }
}

#[test]
fn test_bell_state_probabilities() {
    assert_probs(&bell_state(0).unwrap(), &[0.5, 0.0, 0.0, 0.5]);
    assert_probs(&bell_state(1).unwrap(), &[0.5, 0.0, 0.0, 0.5]);
    assert_probs(&bell_state(2).unwrap(), &[0.0, 0.5, 0.5, 0.0]);
    assert_probs(&bell_state(3).unwrap(), &[0.0, 0.5, 0.5, 0.0]);
}

#[test]
fn test_bell_state_relative_signs() {
    let phi_minus = bell_state(1).unwrap();
    let a = phi_minus.amplitudes();
    assert!((a[0].re * a[3].re + 0.5).abs() < EPS);

    let psi_minus = bell_state(3).unwrap();
    let a = psi_minus.amplitudes();
    assert!((a[1].re * a[2].re + 0.5).abs() < EPS);

    let psi_plus = bell_state(2).unwrap();
    let a = psi_plus.amplitudes();
    assert!((a[1].re * a[2].re - 0.5).abs() < EPS);
}

#[test]
fn test_bell_variants_are_orthogonal() {
    let states: Vec<_> = BellState::ALL.iter().map(|b| b.prepare().unwrap()).collect();
    for (i, a) in states.iter().enumerate() {
        for (j, b) in states.iter().enumerate() {
            let f = a.fidelity(b).unwrap();
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!((f - expected).abs() < EPS, "⟨{i}|{j}⟩ = {f}");
        }
    }
}

#[test]
fn test_invalid_bell_variant() {
    assert_eq!(bell_state(4), Err(AlgorithmError::InvalidBellVariant(4)));
}

#[test]
fn test_ghz_state() {
    let ghz = ghz_state(3).unwrap();
    let mut expected = [0.0; 8];
    expected[0] = 0.5;
    expected[7] = 0.5;
    assert_probs(&ghz, &expected);

    // n = 2 coincide com |Φ+⟩
    let ghz2 = ghz_state(2).unwrap();
    assert!((ghz2.fidelity(&bell_state(0).unwrap()).unwrap() - 1.0).abs() < EPS);
}

#[test]
fn test_w_state() {
    let w = w_state(3).unwrap();
    let third = 1.0 / 3.0;
    assert_probs(&w, &[0.0, third, third, 0.0, third, 0.0, 0.0, 0.0]);

    let w4 = w_state(4).unwrap();
    for (i, p) in w4.probabilities().iter().enumerate() {
        let expected = if i.is_power_of_two() { 0.25 } else { 0.0 };
        assert!((p - expected).abs() < EPS);
    }
}

// =============================================================================
// Grover
// =============================================================================

#[test]
fn test_oracle_flips_only_marked_index() {
    let state = uniform_superposition(3).unwrap();
    let marked = grover_oracle(&state, 5).unwrap();
    for (i, (before, after)) in state.amplitudes().iter().zip(marked.amplitudes()).enumerate() {
        if i == 5 {
            assert!((after + before).norm() < EPS);
        } else {
            assert!((after - before).norm() < EPS);
        }
    }
}

#[test]
fn test_oracle_rejects_out_of_range_target() {
    let state = uniform_superposition(2).unwrap();
    assert_eq!(
        grover_oracle(&state, 4),
        Err(AlgorithmError::MarkedIndexOutOfRange { index: 4, dimension: 4 })
    );
    assert_eq!(
        grover_search(2, 9, 1),
        Err(AlgorithmError::MarkedIndexOutOfRange { index: 9, dimension: 4 })
    );
}

#[test]
fn test_diffusion_fixes_uniform_state() {
    let state = uniform_superposition(3).unwrap();
    let diffused = grover_diffusion(&state);
    assert!((diffused.fidelity(&state).unwrap() - 1.0).abs() < EPS);
}

#[test]
fn test_diffusion_reflects_about_mean() {
    let amps = vec![
        Complex::new(0.5, 0.0),
        Complex::new(0.0, 0.5),
        Complex::new(-0.5, 0.0),
        Complex::new(0.0, -0.5),
    ];
    let state = StateVector::from_amplitudes(amps.clone()).unwrap();
    // Média zero: newᵢ = −oldᵢ
    let diffused = grover_diffusion(&state);
    for (new, old) in diffused.amplitudes().iter().zip(&amps) {
        assert!((new + old).norm() < EPS);
    }
}

#[test]
fn test_single_grover_step_amplifies_target() {
    let start = uniform_superposition(2).unwrap();
    let after = grover_step(&start, 2).unwrap();

    assert!(after.probabilities()[2] > 0.5);
    assert!((after.probabilities()[2] - 1.0).abs() < EPS);
    assert!(after.is_normalized());

    // A entrada permanece inalterada
    assert_probs(&start, &[0.25, 0.25, 0.25, 0.25]);
}

#[test]
fn test_grover_step_order_matters() {
    // D·O ≠ O·D sobre a superposição uniforme
    let start = uniform_superposition(3).unwrap();
    let d_after_o = grover_step(&start, 1).unwrap();
    let o_after_d = grover_oracle(&grover_diffusion(&start), 1).unwrap();
    assert!(d_after_o.fidelity(&o_after_d).unwrap() < 1.0 - 1e-6);
}

#[test]
fn test_optimal_iterations() {
    assert_eq!(optimal_grover_iterations(3), 2);
    assert_eq!(optimal_grover_iterations(4), 3);
    assert_eq!(optimal_grover_iterations(6), 6);
}

#[test]
fn test_optimal_iterations_overshoots_for_two_qubits() {
    // A fórmula devolve 2 para N = 4, mas uma iteração já é exata
    assert_eq!(optimal_grover_iterations(2), 2);
    assert!((grover_success_probability(2, 1) - 1.0).abs() < EPS);
    assert!((grover_success_probability(2, 2) - 0.25).abs() < EPS);

    let one = grover_search(2, 3, 1).unwrap();
    let two = grover_search(2, 3, 2).unwrap();
    assert!((one.probabilities()[3] - 1.0).abs() < EPS);
    assert!((two.probabilities()[3] - 0.25).abs() < EPS);
}

#[test]
fn test_grover_search_matches_closed_form() {
    for n in 2..=5 {
        let target = (1usize << n) - 2;
        for k in 0..=4 {
            let state = grover_search(n, target, k).unwrap();
            let p = state.probabilities()[target];
            let expected = grover_success_probability(n, k);
            assert!((p - expected).abs() < 1e-9, "n={n} k={k}: {p} != {expected}");
            assert!(state.is_normalized());
        }
    }
}

#[test]
fn test_optimal_iterations_reach_high_probability() {
    for n in 3..=6 {
        let k = optimal_grover_iterations(n);
        assert!(grover_success_probability(n, k) > 0.9, "n={n} k={k}");
    }
}

#[test]
fn test_bell_state_serde_names() {
    let json = serde_json::to_string(&BellState::PsiMinus).unwrap();
    assert_eq!(json, "\"PsiMinus\"");
    let back: BellState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, BellState::PsiMinus);
}
