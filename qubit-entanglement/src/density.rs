//! Matriz densidade ρ = |ψ⟩⟨ψ|
//!
//! Sempre derivada de um `StateVector` (ou de uma redução de outra ρ),
//! armazenada em ordem row-major. Hermitiana com traço 1.

use qubit_core::{BlochVector, Complex, QuantumError, StateVector, num_qubits_for_dimension};
use serde::{Deserialize, Serialize};

use crate::error::{EntanglementError, EntanglementResult};

/// Insere `bit` na posição `position` de `value`, deslocando os bits altos
///
/// Inversa da remoção de bit usada na redução de índices.
#[inline]
pub fn insert_bit(value: usize, position: usize, bit: usize) -> usize {
    let low = value & ((1usize << position) - 1);
    let high = (value >> position) << (position + 1);
    high | (bit << position) | low
}

/// Tolerância para hermiticidade e Tr(ρ) = 1 na validação
pub const VALIDATION_TOLERANCE: f64 = 1e-9;

/// Forma serializada; só vira `DensityMatrix` depois de validada
#[derive(Deserialize)]
struct RawDensity {
    dimension: usize,
    num_qubits: usize,
    data: Vec<Complex>,
}

impl TryFrom<RawDensity> for DensityMatrix {
    type Error = EntanglementError;

    fn try_from(raw: RawDensity) -> EntanglementResult<Self> {
        let rho = Self::from_elements(raw.dimension, raw.data)?;
        if rho.num_qubits != raw.num_qubits {
            return Err(EntanglementError::InvalidDensityMatrix(format!(
                "num_qubits {} does not match dimension {}",
                raw.num_qubits, raw.dimension
            )));
        }
        Ok(rho)
    }
}

/// Matriz densidade de n qubits (2ⁿ × 2ⁿ)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDensity")]
pub struct DensityMatrix {
    dimension: usize,
    num_qubits: usize,
    /// Elementos row-major: data[i * dimension + j] = ρᵢⱼ
    data: Vec<Complex>,
}

impl DensityMatrix {
    /// ρᵢⱼ = ampᵢ · conj(ampⱼ)
    pub fn from_state(state: &StateVector) -> Self {
        let amps = state.amplitudes();
        let data = amps
            .iter()
            .flat_map(|&a_i| amps.iter().map(move |a_j| a_i * a_j.conj()))
            .collect();

        Self {
            dimension: state.dimension(),
            num_qubits: state.num_qubits(),
            data,
        }
    }

    /// Cria a partir de elementos row-major
    ///
    /// Valida forma (2ⁿ × 2ⁿ, n ≥ 1), hermiticidade e Tr(ρ) = 1.
    pub fn from_elements(dimension: usize, data: Vec<Complex>) -> EntanglementResult<Self> {
        let num_qubits = num_qubits_for_dimension(dimension)?;
        if num_qubits == 0 {
            return Err(QuantumError::NoQubits.into());
        }
        if dimension.checked_mul(dimension) != Some(data.len()) {
            return Err(EntanglementError::InvalidDensityMatrix(format!(
                "expected {dimension}x{dimension} elements, got {}",
                data.len()
            )));
        }

        let rho = Self {
            dimension,
            num_qubits,
            data,
        };
        if !rho.is_hermitian(VALIDATION_TOLERANCE) {
            return Err(EntanglementError::InvalidDensityMatrix(
                "matrix is not Hermitian".to_string(),
            ));
        }
        let trace = rho.trace();
        if (trace - Complex::new(1.0, 0.0)).norm() > VALIDATION_TOLERANCE {
            return Err(EntanglementError::InvalidDensityMatrix(format!(
                "trace is {trace}, expected 1"
            )));
        }
        Ok(rho)
    }

    /// Dimensão 2ⁿ
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Número de qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// ρᵢⱼ
    ///
    /// # Panics
    ///
    /// Se `i` ou `j` ≥ `dimension()`. [`DensityMatrix::element`] é a
    /// versão verificada.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Complex {
        assert!(
            i < self.dimension && j < self.dimension,
            "index ({i}, {j}) out of range for dimension {}",
            self.dimension
        );
        self.data[i * self.dimension + j]
    }

    /// ρᵢⱼ, ou `None` fora da matriz
    pub fn element(&self, i: usize, j: usize) -> Option<Complex> {
        if i >= self.dimension || j >= self.dimension {
            return None;
        }
        Some(self.data[i * self.dimension + j])
    }

    /// Elementos row-major
    pub fn elements(&self) -> &[Complex] {
        &self.data
    }

    /// Diagonal = probabilidades da base
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.dimension).map(|i| self.get(i, i).re).collect()
    }

    /// Tr(ρ)
    pub fn trace(&self) -> Complex {
        (0..self.dimension).map(|i| self.get(i, i)).sum()
    }

    /// Pureza Tr(ρ²) = Σ|ρᵢⱼ|² (ρ hermitiana)
    pub fn purity(&self) -> f64 {
        self.data.iter().map(|z| z.norm_sqr()).sum()
    }

    /// Verifica ρ = ρ†
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        (0..self.dimension).all(|i| {
            (i..self.dimension)
                .all(|j| (self.get(i, j) - self.get(j, i).conj()).norm() <= tolerance)
        })
    }

    /// Traço parcial sobre `qubit`: n qubits → n−1 qubits
    ///
    /// ρ'[i'][j'] = Σ_b ρ[ins(i', b)][ins(j', b)], onde ins insere o bit
    /// b na posição do qubit descartado.
    pub fn partial_trace(&self, qubit: usize) -> EntanglementResult<Self> {
        if qubit >= self.num_qubits {
            return Err(QuantumError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            }
            .into());
        }
        if self.num_qubits == 1 {
            return Err(EntanglementError::CannotTraceLastQubit);
        }

        let reduced = self.dimension / 2;
        let mut data = Vec::with_capacity(reduced * reduced);
        for i in 0..reduced {
            for j in 0..reduced {
                let sum: Complex = (0..2)
                    .map(|b| self.get(insert_bit(i, qubit, b), insert_bit(j, qubit, b)))
                    .sum();
                data.push(sum);
            }
        }

        Ok(Self {
            dimension: reduced,
            num_qubits: self.num_qubits - 1,
            data,
        })
    }

    fn require_single_qubit(&self) -> EntanglementResult<()> {
        if self.dimension != 2 {
            return Err(EntanglementError::NotSingleQubitMatrix(self.dimension));
        }
        Ok(())
    }

    /// Autovalores (λ₊, λ₋) de uma ρ 2×2 via traço e determinante
    ///
    /// Ambos são truncados em ≥ 0.
    pub fn eigenvalues_2x2(&self) -> EntanglementResult<(f64, f64)> {
        self.require_single_qubit()?;

        let trace = self.get(0, 0).re + self.get(1, 1).re;
        let det = (self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0)).re;
        let disc = (trace * trace / 4.0 - det).max(0.0).sqrt();

        let (plus, minus) = (trace / 2.0 + disc, trace / 2.0 - disc);
        if minus < 0.0 {
            tracing::trace!(lambda = minus, "clamped negative eigenvalue");
        }
        Ok((plus.max(0.0), minus.max(0.0)))
    }

    /// Entropia de von Neumann S = −Σ λ log₂ λ de uma ρ 2×2, em bits
    ///
    /// 0·log₂0 := 0. Intervalo [0, 1].
    pub fn von_neumann_entropy_2x2(&self) -> EntanglementResult<f64> {
        let (plus, minus) = self.eigenvalues_2x2()?;
        Ok([plus, minus]
            .into_iter()
            .filter(|&lambda| lambda > 0.0)
            .map(|lambda| -lambda * lambda.log2())
            .sum())
    }

    /// Vetor de Bloch de uma ρ 2×2: (2 Re ρ₀₁, 2 Im ρ₁₀, ρ₀₀ − ρ₁₁)
    pub fn bloch_vector(&self) -> EntanglementResult<BlochVector> {
        self.require_single_qubit()?;
        Ok(BlochVector::new(
            2.0 * self.get(0, 1).re,
            2.0 * self.get(1, 0).im,
            self.get(0, 0).re - self.get(1, 1).re,
        ))
    }
}
