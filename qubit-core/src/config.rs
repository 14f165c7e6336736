//! Environment configuration loading from .env files
//!
//! Loads simulator limits from .env or environment variables.
//! The state-vector cost is O(2ⁿ) in time and memory, so every register
//! constructor checks the qubit count against `QUBIT_MAX_QUBITS`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

// Automatically load .env when config module is accessed
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Ensure environment is loaded
#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

/// Default ceiling: 2¹⁰ amplitudes stays interactive
pub const DEFAULT_MAX_QUBITS: usize = 10;

/// Default normalization tolerance
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Registers above this size are logged as outside the interactive range
pub const INTERACTIVE_QUBITS: usize = 6;

/// Hard limit regardless of configuration (2³⁰ amplitudes = 16 GiB)
pub const HARD_MAX_QUBITS: usize = 30;

/// Limites do simulador
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Número máximo de qubits aceito pelos construtores
    pub max_qubits: usize,
    /// Tolerância para Σ|amp|² = 1 e U†U = I
    pub norm_tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
            norm_tolerance: DEFAULT_NORM_TOLERANCE,
        }
    }
}

impl SimulatorConfig {
    /// Load from process environment (and .env)
    pub fn from_env() -> Self {
        ensure_loaded();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary key lookup
    ///
    /// Unparseable or out-of-range values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_qubits = lookup("QUBIT_MAX_QUBITS")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&n| n >= 1)
            .map(|n| n.min(HARD_MAX_QUBITS))
            .unwrap_or(DEFAULT_MAX_QUBITS);

        let norm_tolerance = lookup("QUBIT_NORM_TOLERANCE")
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|t| t.is_finite() && *t > 0.0)
            .unwrap_or(DEFAULT_NORM_TOLERANCE);

        Self {
            max_qubits,
            norm_tolerance,
        }
    }

    /// Teto efetivo: `max_qubits` limitado a `HARD_MAX_QUBITS`
    ///
    /// Vale também para configs montadas à mão ou desserializadas.
    pub fn qubit_ceiling(&self) -> usize {
        self.max_qubits.min(HARD_MAX_QUBITS)
    }

    /// Maximum state-vector length under this configuration
    pub fn max_dimension(&self) -> usize {
        1usize << self.qubit_ceiling()
    }
}

/// Cached values
pub static SIMULATOR: Lazy<SimulatorConfig> = Lazy::new(SimulatorConfig::from_env);

/// Configured qubit ceiling
/// Default: 10
pub fn max_qubits() -> usize {
    SIMULATOR.max_qubits
}

/// Configured normalization tolerance
/// Default: 1e-9
pub fn norm_tolerance() -> f64 {
    SIMULATOR.norm_tolerance
}
