//! # ⚛️ qubit-core — State-Vector Engine
//!
//! Simulação de registradores de qubits em estado puro: aritmética
//! complexa, catálogo de portas, aplicação de portas, CNOT e amostragem.
//!
//! ## Computational Complexity
//!
//! **Gate application — O(2ⁿ):**
//! - Pairwise butterfly update over the 2ⁿ⁻¹ index pairs of the target qubit
//! - One new vector of 2ⁿ amplitudes per call (inputs are never mutated)
//!
//! **CNOT / CZ / SWAP — O(2ⁿ):**
//! - Each control = 1 pair visited exactly once
//!
//! **Measurement — O(2ⁿ):**
//! - Inverse-CDF walk over the probability vector
//!
//! **Scalability:**
//! - n ≤ 6: ✓ Interactive (reference scenes)
//! - 6 < n ≤ 10: △ Usable, logged as outside the interactive range
//! - n > `QUBIT_MAX_QUBITS` (default 10): rejected
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          StateVector                            │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  2ⁿ Complex amplitudes (qubit 0 = LSB)    │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Gate catalog (I X Y Z H S T S† T† R*)    │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Sampling (injected rand::Rng)            │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qubit_core::{Gate, StateVector};
//!
//! let zero = StateVector::zero(2)?;
//! let bell = zero.apply_gate(&Gate::H, 0)?.apply_cnot(0, 1)?;
//!
//! let probs = bell.probabilities();
//! assert!((probs[0] - 0.5).abs() < 1e-12);
//! assert!((probs[3] - 0.5).abs() < 1e-12);
//! # Ok::<(), qubit_core::QuantumError>(())
//! ```

pub mod circuit;
pub mod complex;
pub mod config;
pub mod error;
pub mod gates;
pub mod state;

pub use circuit::{Circuit, Operation};
pub use complex::Complex;
pub use config::SimulatorConfig;
pub use error::{QuantumError, QuantumResult};
pub use gates::{Gate, StandardGate};
pub use state::{AmplitudeInfo, BlochVector, StateVector, basis_label, num_qubits_for_dimension};
