//! Medidas de emaranhamento sobre estados puros

use qubit_core::{BlochVector, Complex, StateVector};

use crate::density::{DensityMatrix, insert_bit};
use crate::error::{EntanglementError, EntanglementResult};

/// Concorrência de um estado puro de 2 qubits: C = 2·|a₀a₃ − a₁a₂|
///
/// Qualquer comprimento diferente de 4 é erro de domínio.
pub fn concurrence(state: &StateVector) -> EntanglementResult<f64> {
    let amps = state.amplitudes();
    if amps.len() != 4 {
        return Err(EntanglementError::ConcurrenceDomain(amps.len()));
    }
    Ok(2.0 * (amps[0] * amps[3] - amps[1] * amps[2]).norm())
}

/// ρ reduzida (2×2) do qubit `keep`, descartando todos os outros
///
/// Soma direta sobre as amplitudes, O(2ⁿ), sem montar a ρ completa.
pub fn reduced_density_matrix(
    state: &StateVector,
    keep: usize,
) -> EntanglementResult<DensityMatrix> {
    state.check_qubit(keep)?;

    let amps = state.amplitudes();
    let rest = state.dimension() / 2;
    let mut elements = [Complex::new(0.0, 0.0); 4];

    for r in 0..rest {
        let i0 = insert_bit(r, keep, 0);
        let i1 = insert_bit(r, keep, 1);
        let (a, b) = (amps[i0], amps[i1]);
        elements[0] += a * a.conj();
        elements[1] += a * b.conj();
        elements[2] += b * a.conj();
        elements[3] += b * b.conj();
    }

    DensityMatrix::from_elements(2, elements.to_vec())
}

/// Entropia de emaranhamento do qubit `qubit` com o resto do registrador
pub fn entanglement_entropy(state: &StateVector, qubit: usize) -> EntanglementResult<f64> {
    reduced_density_matrix(state, qubit)?.von_neumann_entropy_2x2()
}

/// Vetor de Bloch do qubit `qubit` (encolhe quando emaranhado)
pub fn reduced_bloch(state: &StateVector, qubit: usize) -> EntanglementResult<BlochVector> {
    reduced_density_matrix(state, qubit)?.bloch_vector()
}
