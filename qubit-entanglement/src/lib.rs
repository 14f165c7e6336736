//! # 🔗 qubit-entanglement — Density Matrices & Entanglement
//!
//! Deriva matrizes densidade de estados puros e mede emaranhamento.
//!
//! ## Computational Complexity
//!
//! **Density matrix — O(4ⁿ):**
//! - ρ = |ψ⟩⟨ψ| materialized in full, row-major
//!
//! **Partial trace — O(4ⁿ⁻¹):**
//! - Two terms per reduced element, indices rebuilt by bit insertion
//!
//! **Single-qubit reduction — O(2ⁿ):**
//! - `reduced_density_matrix` sums directly over amplitudes
//!
//! **Entropy / concurrence — O(1):**
//! - Closed-form 2×2 eigenvalues from trace and determinant
//! - Wootters formula specialized to pure 2-qubit states
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │         DensityMatrix                           │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  ρ = |ψ⟩⟨ψ|  (Hermitian, Tr = 1)          │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Partial trace (bit insertion)            │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Entropy · Concurrence · Bloch            │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qubit_core::{Gate, StateVector};
//! use qubit_entanglement::{DensityMatrix, concurrence};
//!
//! let bell = StateVector::zero(2)?.apply_gate(&Gate::H, 0)?.apply_cnot(0, 1)?;
//! assert!((concurrence(&bell)? - 1.0).abs() < 1e-12);
//!
//! let rho = DensityMatrix::from_state(&bell).partial_trace(1)?;
//! assert!((rho.von_neumann_entropy_2x2()? - 1.0).abs() < 1e-9);
//! # Ok::<(), qubit_entanglement::EntanglementError>(())
//! ```

pub mod density;
pub mod error;
pub mod measures;

pub use density::DensityMatrix;
pub use error::{EntanglementError, EntanglementResult};
pub use measures::{concurrence, entanglement_entropy, reduced_bloch, reduced_density_matrix};
