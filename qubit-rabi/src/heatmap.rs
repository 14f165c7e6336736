//! Seletor de observáveis para o mapa de calor (t × Δ)

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use crate::error::{RabiError, RabiResult};
use crate::model::{omega_eff, rabi_bloch_xy, rabi_p1, rabi_sigma_z};

/// Observável exibido no mapa de calor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeatmapView {
    /// População excitada P1
    P1,
    /// Inversão σz
    Z,
    /// Coerência σx
    X,
    /// Coerência σy
    Y,
    /// Frequência generalizada Ω_eff
    OmegaEff,
    /// Fase acumulada (Ω_eff·t) mod 2π
    Phase,
}

impl HeatmapView {
    pub const ALL: [HeatmapView; 6] = [
        Self::P1,
        Self::Z,
        Self::X,
        Self::Y,
        Self::OmegaEff,
        Self::Phase,
    ];

    /// Nome usado na interface
    pub fn name(&self) -> &'static str {
        match self {
            Self::P1 => "p1",
            Self::Z => "z",
            Self::X => "x",
            Self::Y => "y",
            Self::OmegaEff => "omega-eff",
            Self::Phase => "phase",
        }
    }
}

impl fmt::Display for HeatmapView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for HeatmapView {
    type Err = RabiError;

    fn from_str(s: &str) -> RabiResult<Self> {
        Self::ALL
            .into_iter()
            .find(|view| view.name() == s)
            .ok_or_else(|| RabiError::UnknownView(s.to_string()))
    }
}

/// Valor do observável `view` no ponto (t, Δ)
pub fn compute_heatmap_value(
    view: HeatmapView,
    t: f64,
    omega: f64,
    detuning: f64,
    t2: f64,
) -> f64 {
    match view {
        HeatmapView::P1 => rabi_p1(t, omega, detuning, t2),
        HeatmapView::Z => rabi_sigma_z(t, omega, detuning, t2),
        HeatmapView::X => rabi_bloch_xy(t, omega, detuning, t2).0,
        HeatmapView::Y => rabi_bloch_xy(t, omega, detuning, t2).1,
        HeatmapView::OmegaEff => omega_eff(omega, detuning),
        HeatmapView::Phase => (omega_eff(omega, detuning) * t).rem_euclid(TAU),
    }
}

/// Grade completa: uma linha por tempo, uma coluna por dessintonia
///
/// `grid[i][j]` = valor em (times[i], detunings[j]).
pub fn heatmap_grid(
    view: HeatmapView,
    times: &[f64],
    detunings: &[f64],
    omega: f64,
    t2: f64,
) -> Vec<Vec<f64>> {
    tracing::debug!(
        view = view.name(),
        rows = times.len(),
        cols = detunings.len(),
        "computing heatmap grid"
    );

    times
        .iter()
        .map(|&t| {
            detunings
                .iter()
                .map(|&detuning| compute_heatmap_value(view, t, omega, detuning, t2))
                .collect()
        })
        .collect()
}
