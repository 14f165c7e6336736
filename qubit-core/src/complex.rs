//! Aritmética complexa
//!
//! Amplitudes são `num_complex::Complex64`: valor `Copy` imutável com
//! `+`, `-`, `*`, `scale`, `conj`, `norm`, `norm_sqr` e `arg` (atan2).
//! Este módulo só acrescenta as constantes e construtores usados pelo
//! catálogo de portas.

pub use num_complex::Complex64 as Complex;

/// Zero complexo
pub const ZERO: Complex = Complex::new(0.0, 0.0);

/// Um complexo
pub const ONE: Complex = Complex::new(1.0, 0.0);

/// Unidade imaginária
pub const I: Complex = Complex::new(0.0, 1.0);

/// Número real como complexo
#[inline]
pub const fn real(re: f64) -> Complex {
    Complex::new(re, 0.0)
}

/// Exponencial complexa: e^(iθ)
#[inline]
pub fn cis(theta: f64) -> Complex {
    Complex::new(theta.cos(), theta.sin())
}

/// Compara dois complexos componente a componente
#[inline]
pub fn approx_eq(a: Complex, b: Complex, tolerance: f64) -> bool {
    (a.re - b.re).abs() <= tolerance && (a.im - b.im).abs() <= tolerance
}
