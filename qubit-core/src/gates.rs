//! # Quantum Gates — Catálogo de portas de um qubit
//!
//! Matrizes unitárias 2×2 fixas e construtores de rotação.
//!
//! ## Gates Implementadas
//!
//! - **Fixas**: I, X, Y, Z (Pauli), H (Hadamard), S, T, S†, T†
//! - **Rotação**: Rx, Ry, Rz (meio-ângulo, geradores padrão)
//! - **Fase**: P(φ)
//!
//! Rx(2π) = −I: a fase global é preservada, não corrigida.

use crate::complex::{self, Complex, I, ONE, ZERO};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

const INV_SQRT2: Complex = complex::real(FRAC_1_SQRT_2);
const NEG_ONE: Complex = complex::real(-1.0);
const NEG_I: Complex = Complex::new(0.0, -1.0);

/// Matriz 2x2 complexa de uma porta de um qubit
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Elementos: [[a, b], [c, d]]
    pub elements: [[Complex; 2]; 2],
}

impl Gate {
    /// Identidade
    pub const I: Self = Self::new([[ONE, ZERO], [ZERO, ONE]]);

    /// Pauli-X (NOT quântico)
    pub const X: Self = Self::new([[ZERO, ONE], [ONE, ZERO]]);

    /// Pauli-Y
    pub const Y: Self = Self::new([[ZERO, NEG_I], [I, ZERO]]);

    /// Pauli-Z (phase flip)
    pub const Z: Self = Self::new([[ONE, ZERO], [ZERO, NEG_ONE]]);

    /// Hadamard: (1/√2)[[1, 1], [1, −1]]
    pub const H: Self = Self::new([
        [INV_SQRT2, INV_SQRT2],
        [INV_SQRT2, complex::real(-FRAC_1_SQRT_2)],
    ]);

    /// S (√Z)
    pub const S: Self = Self::new([[ONE, ZERO], [ZERO, I]]);

    /// T (π/8): diag(1, e^(iπ/4))
    pub const T: Self = Self::new([
        [ONE, ZERO],
        [ZERO, Complex::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)],
    ]);

    /// S†
    pub const SDG: Self = Self::new([[ONE, ZERO], [ZERO, NEG_I]]);

    /// T†: diag(1, e^(−iπ/4))
    pub const TDG: Self = Self::new([
        [ONE, ZERO],
        [ZERO, Complex::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2)],
    ]);

    /// Cria porta a partir dos elementos
    pub const fn new(elements: [[Complex; 2]; 2]) -> Self {
        Self { elements }
    }

    /// Rotação em X: [[cos θ/2, −i sin θ/2], [−i sin θ/2, cos θ/2]]
    pub fn rx(theta: f64) -> Self {
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        Self::new([
            [complex::real(c), Complex::new(0.0, -s)],
            [Complex::new(0.0, -s), complex::real(c)],
        ])
    }

    /// Rotação em Y: [[cos θ/2, −sin θ/2], [sin θ/2, cos θ/2]]
    pub fn ry(theta: f64) -> Self {
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        Self::new([
            [complex::real(c), complex::real(-s)],
            [complex::real(s), complex::real(c)],
        ])
    }

    /// Rotação em Z: diag(e^(−iθ/2), e^(iθ/2))
    pub fn rz(theta: f64) -> Self {
        let half = theta / 2.0;
        Self::new([[complex::cis(-half), ZERO], [ZERO, complex::cis(half)]])
    }

    /// Porta de fase genérica: diag(1, e^(iφ))
    pub fn phase(phi: f64) -> Self {
        Self::new([[ONE, ZERO], [ZERO, complex::cis(phi)]])
    }

    /// Aplica a um estado [alpha, beta]
    pub fn apply(&self, state: [Complex; 2]) -> [Complex; 2] {
        let [alpha, beta] = state;
        let [[a, b], [c, d]] = self.elements;

        [a * alpha + b * beta, c * alpha + d * beta]
    }

    /// Produto matricial `self · other` (aplica `other` primeiro)
    pub fn mul(&self, other: &Gate) -> Gate {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;

        Gate::new([
            [a * e + b * g, a * f + b * h],
            [c * e + d * g, c * f + d * h],
        ])
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Gate {
        let [[a, b], [c, d]] = self.elements;
        Gate::new([[a.conj(), c.conj()], [b.conj(), d.conj()]])
    }

    /// Compara elemento a elemento
    pub fn approx_eq(&self, other: &Gate, tolerance: f64) -> bool {
        self.elements
            .iter()
            .flatten()
            .zip(other.elements.iter().flatten())
            .all(|(&a, &b)| complex::approx_eq(a, b, tolerance))
    }

    /// Verifica U†U = I
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        self.dagger().mul(self).approx_eq(&Gate::I, tolerance)
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::I
    }
}

/// Portas nomeadas do catálogo
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    I,
    X,
    Y,
    Z,
    H,
    S,
    T,
    Sdg,
    Tdg,
    Rx(f64),
    Ry(f64),
    Rz(f64),
    Phase(f64),
}

impl StandardGate {
    /// Portas fixas, na ordem do catálogo
    pub const FIXED: [StandardGate; 9] = [
        Self::I,
        Self::X,
        Self::Y,
        Self::Z,
        Self::H,
        Self::S,
        Self::T,
        Self::Sdg,
        Self::Tdg,
    ];

    /// Matriz da porta
    pub fn matrix(&self) -> Gate {
        match *self {
            Self::I => Gate::I,
            Self::X => Gate::X,
            Self::Y => Gate::Y,
            Self::Z => Gate::Z,
            Self::H => Gate::H,
            Self::S => Gate::S,
            Self::T => Gate::T,
            Self::Sdg => Gate::SDG,
            Self::Tdg => Gate::TDG,
            Self::Rx(theta) => Gate::rx(theta),
            Self::Ry(theta) => Gate::ry(theta),
            Self::Rz(theta) => Gate::rz(theta),
            Self::Phase(phi) => Gate::phase(phi),
        }
    }

    /// Nome da porta
    pub fn name(&self) -> &'static str {
        match self {
            Self::I => "I",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::H => "H",
            Self::S => "S",
            Self::T => "T",
            Self::Sdg => "S†",
            Self::Tdg => "T†",
            Self::Rx(_) => "Rx",
            Self::Ry(_) => "Ry",
            Self::Rz(_) => "Rz",
            Self::Phase(_) => "P",
        }
    }

    /// Ângulo da porta parametrizada
    pub fn angle(&self) -> Option<f64> {
        match *self {
            Self::Rx(a) | Self::Ry(a) | Self::Rz(a) | Self::Phase(a) => Some(a),
            _ => None,
        }
    }

    /// Verifica se a porta é sua própria inversa
    pub fn is_self_inverse(&self) -> bool {
        matches!(self, Self::I | Self::X | Self::Y | Self::Z | Self::H)
    }
}

impl From<StandardGate> for Gate {
    fn from(gate: StandardGate) -> Self {
        gate.matrix()
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.angle() {
            Some(angle) => write!(f, "{}({:.4})", self.name(), angle),
            None => write!(f, "{}", self.name()),
        }
    }
}

// =============================================================================
// Testes
// =============================================================================
