//! Tipos de erro para qubit-rabi

use thiserror::Error;

/// Resultado customizado para o modelo de Rabi
pub type RabiResult<T> = Result<T, RabiError>;

/// Erros do modelo de Rabi
///
/// As guardas numéricas (Ω_eff ≈ 0) devolvem valores sentinela, não erros.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RabiError {
    #[error("Unknown heatmap view '{0}', expected one of p1, z, x, y, omega-eff, phase")]
    UnknownView(String),
}
