//! Tipos de erro para qubit-entanglement

use qubit_core::QuantumError;
use thiserror::Error;

/// Resultado customizado para operações de entanglement
pub type EntanglementResult<T> = Result<T, EntanglementError>;

/// Erros que podem ocorrer em operações de entanglement
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntanglementError {
    #[error("Core state error: {0}")]
    Core(#[from] QuantumError),

    #[error("Concurrence is defined only for 2-qubit pure states (length 4), got length {0}")]
    ConcurrenceDomain(usize),

    #[error("Expected a 2x2 density matrix, got {0}x{0}")]
    NotSingleQubitMatrix(usize),

    #[error("Cannot trace out the only qubit of a register")]
    CannotTraceLastQubit,

    #[error("Invalid density matrix: {0}")]
    InvalidDensityMatrix(String),
}
