//! # Grover — oráculo, difusão e iteração G = D·O
//!
//! O oráculo inverte o sinal do índice marcado; a difusão reflete cada
//! amplitude em torno da média (reflexão sobre a superposição uniforme).
//!
//! ## Número ótimo de iterações
//!
//! `optimal_grover_iterations(n) = round(π/4 · √2ⁿ)`, a fórmula usual da
//! literatura. Para n = 2 (N = 4) ela devolve 2, embora uma única iteração
//! já leve a probabilidade de sucesso a 1 (θ = π/6, 3θ = π/2) e a segunda
//! a derrube para 1/4. A fórmula é mantida como está;
//! [`grover_success_probability`] dá o valor exato para qualquer k.

use qubit_core::{Complex, StateVector};
use std::f64::consts::FRAC_PI_4;

use crate::error::{AlgorithmError, AlgorithmResult};
use crate::states::uniform_superposition;

fn check_marked(state: &StateVector, target: usize) -> AlgorithmResult<()> {
    let dimension = state.dimension();
    if target >= dimension {
        return Err(AlgorithmError::MarkedIndexOutOfRange {
            index: target,
            dimension,
        });
    }
    Ok(())
}

/// Oráculo de fase: nega exatamente a amplitude do índice marcado
pub fn grover_oracle(state: &StateVector, target: usize) -> AlgorithmResult<StateVector> {
    check_marked(state, target)?;
    Ok(state.map_amplitudes(|i, amp| if i == target { -amp } else { amp }))
}

/// Inversão em torno da média: newᵢ = 2·média − oldᵢ
pub fn grover_diffusion(state: &StateVector) -> StateVector {
    let sum: Complex = state.amplitudes().iter().sum();
    let mean = sum / state.dimension() as f64;
    state.map_amplitudes(|_, amp| mean * 2.0 - amp)
}

/// Uma iteração de Grover: difusão após o oráculo
pub fn grover_step(state: &StateVector, target: usize) -> AlgorithmResult<StateVector> {
    Ok(grover_diffusion(&grover_oracle(state, target)?))
}

/// round(π/4 · √2ⁿ)
pub fn optimal_grover_iterations(num_qubits: usize) -> usize {
    let size = 2f64.powi(num_qubits as i32);
    (FRAC_PI_4 * size.sqrt()).round() as usize
}

/// Superposição uniforme seguida de `iterations` passos de Grover
pub fn grover_search(
    num_qubits: usize,
    target: usize,
    iterations: usize,
) -> AlgorithmResult<StateVector> {
    let mut state = uniform_superposition(num_qubits)?;
    check_marked(&state, target)?;

    for _ in 0..iterations {
        state = grover_step(&state, target)?;
    }

    tracing::debug!(
        qubits = num_qubits,
        target,
        iterations,
        success = state.amplitudes()[target].norm_sqr(),
        "grover search finished"
    );
    Ok(state)
}

/// Probabilidade de sucesso após k iterações: sin²((2k+1)θ), θ = asin(1/√N)
pub fn grover_success_probability(num_qubits: usize, iterations: usize) -> f64 {
    let size = 2f64.powi(num_qubits as i32);
    let theta = (1.0 / size.sqrt()).asin();
    ((2 * iterations + 1) as f64 * theta).sin().powi(2)
}
