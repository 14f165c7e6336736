//! Tipos de erro para qubit-algorithms

use qubit_core::QuantumError;
use thiserror::Error;

/// Resultado customizado para primitivas de algoritmos
pub type AlgorithmResult<T> = Result<T, AlgorithmError>;

/// Erros que podem ocorrer na preparação de estados e no Grover
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    #[error("Core state error: {0}")]
    Core(#[from] QuantumError),

    #[error("Invalid Bell variant {0}, expected 0..=3")]
    InvalidBellVariant(u8),

    #[error("Marked index {index} out of range for dimension {dimension}")]
    MarkedIndexOutOfRange { index: usize, dimension: usize },
}
