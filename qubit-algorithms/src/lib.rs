//! # 🔍 qubit-algorithms — Algorithm Primitives
//!
//! Estados preparados e primitivas de Grover sobre o motor de `qubit-core`.
//!
//! ## Computational Complexity
//!
//! **State preparation — O(n·2ⁿ):**
//! - Bell / GHZ built from H + CNOT, each O(2ⁿ)
//! - Uniform superposition and W written directly, O(2ⁿ)
//!
//! **Grover step — O(2ⁿ):**
//! - Oracle: one sign flip; diffusion: one mean plus one pass
//! - `grover_search` with the optimal count: O(√N · N)
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │         qubit-algorithms                        │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  states: uniform · Bell · GHZ · W         │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  grover: oracle → diffusion (G = D·O)     │  │
//! │  └───────────────────────────────────────────┘  │
//! │                      ↓                          │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  qubit-core::StateVector                  │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qubit_algorithms::{grover_step, uniform_superposition};
//!
//! let start = uniform_superposition(2)?;
//! let after = grover_step(&start, 2)?;
//! assert!(after.probabilities()[2] > 0.99);
//! # Ok::<(), qubit_algorithms::AlgorithmError>(())
//! ```

pub mod error;
pub mod grover;
pub mod states;

pub use error::{AlgorithmError, AlgorithmResult};
pub use grover::{
    grover_diffusion, grover_oracle, grover_search, grover_step, grover_success_probability,
    optimal_grover_iterations,
};
pub use states::{BellState, bell_state, ghz_state, uniform_superposition, w_state};

#[cfg(test)]
mod tests;
