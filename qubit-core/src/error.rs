//! Tipos de erro para qubit-core

use thiserror::Error;

/// Resultado customizado para operações do motor de estados
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Erros de pré-condição do motor de estados
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantumError {
    #[error("A register needs at least one qubit")]
    NoQubits,

    #[error("Requested {requested} qubits, configured ceiling is {max}")]
    TooManyQubits { requested: usize, max: usize },

    #[error("Qubit {qubit} out of range for a {num_qubits}-qubit register")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    #[error("Control and target must differ, both are qubit {0}")]
    SameQubit(usize),

    #[error("State length {0} is not a non-zero power of two")]
    InvalidDimension(usize),

    #[error("Basis index {index} out of range for dimension {dimension}")]
    BasisIndexOutOfRange { index: usize, dimension: usize },

    #[error("Expected a single-qubit state (length 2), got length {0}")]
    NotSingleQubit(usize),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
