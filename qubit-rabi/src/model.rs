//! # Modelo de Rabi — sistema de dois níveis dirigido
//!
//! Aproximação de onda girante com uma única constante de decaimento T2:
//!
//! ```text
//! Ω_eff = √(Ω² + Δ²)
//! P1(t) = (Ω/Ω_eff)² · sin²(Ω_eff·t/2) · e^(−t/T2)
//! σz    = 1 − 2·P1
//! σx    = (ΩΔ/Ω_eff²) · (1 − cos(Ω_eff·t)) · e^(−t/T2)
//! σy    = −(Ω/Ω_eff) · sin(Ω_eff·t) · e^(−t/T2)
//! ```
//!
//! O vetor de Bloch precessiona em torno do eixo (Ω, 0, Δ)/Ω_eff.
//! T2 ≤ 0 desliga o decaimento.

use serde::{Deserialize, Serialize};

/// Abaixo disso Ω_eff é tratado como zero
pub const OMEGA_EFF_EPSILON: f64 = 1e-12;

/// Frequência de Rabi generalizada √(Ω² + Δ²)
#[inline]
pub fn omega_eff(omega: f64, detuning: f64) -> f64 {
    omega.hypot(detuning)
}

/// Envelope e^(−t/T2), ou 1 quando T2 ≤ 0
#[inline]
pub fn decay(t: f64, t2: f64) -> f64 {
    if t2 > 0.0 { (-t / t2).exp() } else { 1.0 }
}

/// População do estado excitado P1(t)
///
/// Devolve 0 quando Ω_eff ≈ 0.
pub fn rabi_p1(t: f64, omega: f64, detuning: f64, t2: f64) -> f64 {
    let w = omega_eff(omega, detuning);
    if w < OMEGA_EFF_EPSILON {
        return 0.0;
    }
    let amplitude = (omega / w).powi(2);
    amplitude * (w * t / 2.0).sin().powi(2) * decay(t, t2)
}

/// Inversão de população σz = 1 − 2·P1
pub fn rabi_sigma_z(t: f64, omega: f64, detuning: f64, t2: f64) -> f64 {
    1.0 - 2.0 * rabi_p1(t, omega, detuning, t2)
}

/// Componentes de coerência (σx, σy)
///
/// Devolve (0, 0) quando Ω_eff ≈ 0.
pub fn rabi_bloch_xy(t: f64, omega: f64, detuning: f64, t2: f64) -> (f64, f64) {
    let w = omega_eff(omega, detuning);
    if w < OMEGA_EFF_EPSILON {
        return (0.0, 0.0);
    }
    let envelope = decay(t, t2);
    let phase = w * t;
    let x = (omega * detuning / (w * w)) * (1.0 - phase.cos()) * envelope;
    let y = -(omega / w) * phase.sin() * envelope;
    (x, y)
}

/// Vetor de Bloch completo (σx, σy, σz)
pub fn rabi_bloch(t: f64, omega: f64, detuning: f64, t2: f64) -> (f64, f64, f64) {
    let (x, y) = rabi_bloch_xy(t, omega, detuning, t2);
    (x, y, rabi_sigma_z(t, omega, detuning, t2))
}

/// Parâmetros de um pulso: amplitude Ω, dessintonia Δ e T2
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RabiDrive {
    pub omega: f64,
    pub detuning: f64,
    /// ≤ 0 desliga o decaimento
    pub t2: f64,
}

impl RabiDrive {
    /// Cria um pulso
    pub const fn new(omega: f64, detuning: f64, t2: f64) -> Self {
        Self { omega, detuning, t2 }
    }

    /// Pulso ressonante (Δ = 0) sem decaimento
    pub const fn resonant(omega: f64) -> Self {
        Self::new(omega, 0.0, 0.0)
    }

    /// Mesmo pulso com outro T2
    pub const fn with_t2(self, t2: f64) -> Self {
        Self { t2, ..self }
    }

    pub fn omega_eff(&self) -> f64 {
        omega_eff(self.omega, self.detuning)
    }

    /// Período de uma oscilação completa, 2π/Ω_eff
    ///
    /// `None` quando Ω_eff ≈ 0.
    pub fn period(&self) -> Option<f64> {
        let w = self.omega_eff();
        (w >= OMEGA_EFF_EPSILON).then(|| std::f64::consts::TAU / w)
    }

    pub fn p1(&self, t: f64) -> f64 {
        rabi_p1(t, self.omega, self.detuning, self.t2)
    }

    pub fn sigma_z(&self, t: f64) -> f64 {
        rabi_sigma_z(t, self.omega, self.detuning, self.t2)
    }

    pub fn bloch_xy(&self, t: f64) -> (f64, f64) {
        rabi_bloch_xy(t, self.omega, self.detuning, self.t2)
    }

    pub fn bloch(&self, t: f64) -> (f64, f64, f64) {
        rabi_bloch(t, self.omega, self.detuning, self.t2)
    }
}
