//! # 〰️ qubit-rabi — Driven Two-Level Model
//!
//! Modelo analítico de um qubit dirigido (Rabi) com decaimento
//! fenomenológico. Sem estado e sem dependência do motor de vetores.
//!
//! ## Computational Complexity
//!
//! **Pointwise evaluation — O(1):**
//! - Closed-form trigonometric expressions, no integration
//!
//! **Heatmap grid — O(T·D):**
//! - One evaluation per (time, detuning) cell
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │         qubit-rabi                              │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  model: Ω_eff · P1 · σx σy σz · decay     │  │
//! │  └───────────────────────────────────────────┘  │
//! │                      ↓                          │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  heatmap: view dispatch · t × Δ grid      │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qubit_rabi::{HeatmapView, compute_heatmap_value, rabi_p1};
//! use std::f64::consts::PI;
//!
//! // Pulso π ressonante: inversão completa
//! assert!((rabi_p1(1.0, PI, 0.0, 0.0) - 1.0).abs() < 1e-12);
//!
//! let view: HeatmapView = "omega-eff".parse()?;
//! assert!((compute_heatmap_value(view, 0.0, 3.0, 4.0, 0.0) - 5.0).abs() < 1e-12);
//! # Ok::<(), qubit_rabi::RabiError>(())
//! ```

pub mod error;
pub mod heatmap;
pub mod model;

pub use error::{RabiError, RabiResult};
pub use heatmap::{HeatmapView, compute_heatmap_value, heatmap_grid};
pub use model::{
    RabiDrive, decay, omega_eff, rabi_bloch, rabi_bloch_xy, rabi_p1, rabi_sigma_z,
};
