//! # Estados preparados — superposição uniforme, Bell, GHZ e W
//!
//! ```text
//! |Φ+⟩ = (|00⟩ + |11⟩) / √2
//! |Φ-⟩ = (|00⟩ - |11⟩) / √2
//! |Ψ+⟩ = (|01⟩ + |10⟩) / √2
//! |Ψ-⟩ = (|01⟩ - |10⟩) / √2
//!
//! |GHZₙ⟩ = (|0…0⟩ + |1…1⟩) / √2
//! |Wₙ⟩   = (|0…01⟩ + |0…10⟩ + … + |10…0⟩) / √n
//! ```

use qubit_core::{Complex, Gate, StateVector};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AlgorithmError, AlgorithmResult};

/// Estado de Bell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BellState {
    /// |Φ+⟩ = (|00⟩ + |11⟩) / √2
    #[default]
    PhiPlus,
    /// |Φ-⟩ = (|00⟩ - |11⟩) / √2
    PhiMinus,
    /// |Ψ+⟩ = (|01⟩ + |10⟩) / √2
    PsiPlus,
    /// |Ψ-⟩ = (|01⟩ - |10⟩) / √2
    PsiMinus,
}

impl BellState {
    /// Os quatro estados, na ordem das variantes 0..=3
    pub const ALL: [BellState; 4] = [Self::PhiPlus, Self::PhiMinus, Self::PsiPlus, Self::PsiMinus];

    /// Cria a partir do índice da variante (0..=3)
    pub fn from_index(variant: u8) -> AlgorithmResult<Self> {
        Self::ALL
            .get(variant as usize)
            .copied()
            .ok_or(AlgorithmError::InvalidBellVariant(variant))
    }

    /// Índice da variante
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Fase relativa (-1 ou +1)
    pub fn phase(&self) -> i8 {
        match self {
            Self::PhiPlus | Self::PsiPlus => 1,
            Self::PhiMinus | Self::PsiMinus => -1,
        }
    }

    /// Paridade (mesmo ou diferente)
    pub fn parity(&self) -> bool {
        match self {
            // Phi: mesma paridade (00 ou 11)
            Self::PhiPlus | Self::PhiMinus => true,
            // Psi: paridade diferente (01 ou 10)
            Self::PsiPlus | Self::PsiMinus => false,
        }
    }

    /// Nome em notação bra-ket
    pub fn name(&self) -> &'static str {
        match self {
            Self::PhiPlus => "|Φ+⟩",
            Self::PhiMinus => "|Φ-⟩",
            Self::PsiPlus => "|Ψ+⟩",
            Self::PsiMinus => "|Ψ-⟩",
        }
    }

    /// Prepara o estado: H(0), CNOT(0,1) e correções locais no qubit 0
    ///
    /// Φ- aplica Z, Ψ+ aplica X, Ψ- aplica X e depois Z.
    pub fn prepare(&self) -> AlgorithmResult<StateVector> {
        let phi_plus = StateVector::zero(2)?.apply_gate(&Gate::H, 0)?.apply_cnot(0, 1)?;

        let state = match self {
            Self::PhiPlus => phi_plus,
            Self::PhiMinus => phi_plus.apply_gate(&Gate::Z, 0)?,
            Self::PsiPlus => phi_plus.apply_gate(&Gate::X, 0)?,
            Self::PsiMinus => phi_plus.apply_gate(&Gate::X, 0)?.apply_gate(&Gate::Z, 0)?,
        };
        Ok(state)
    }
}

impl fmt::Display for BellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Estado de Bell pela variante numérica (0..=3)
pub fn bell_state(variant: u8) -> AlgorithmResult<StateVector> {
    BellState::from_index(variant)?.prepare()
}

/// Superposição uniforme: toda amplitude vale 1/√2ⁿ (real)
pub fn uniform_superposition(num_qubits: usize) -> AlgorithmResult<StateVector> {
    let zero = StateVector::zero(num_qubits)?;
    let amp = Complex::new(1.0 / (zero.dimension() as f64).sqrt(), 0.0);
    Ok(zero.map_amplitudes(|_, _| amp))
}

/// GHZ de n qubits: H(0) seguido de CNOT(0, i) para i = 1..n−1
pub fn ghz_state(num_qubits: usize) -> AlgorithmResult<StateVector> {
    let mut state = StateVector::zero(num_qubits)?.apply_gate(&Gate::H, 0)?;
    for target in 1..num_qubits {
        state = state.apply_cnot(0, target)?;
    }
    Ok(state)
}

/// W de n qubits: 1/√n em cada índice com uma única excitação (potências de 2)
pub fn w_state(num_qubits: usize) -> AlgorithmResult<StateVector> {
    let zero = StateVector::zero(num_qubits)?;
    let amp = Complex::new(1.0 / (num_qubits as f64).sqrt(), 0.0);
    Ok(zero.map_amplitudes(|i, _| if i.is_power_of_two() { amp } else { Complex::new(0.0, 0.0) }))
}
