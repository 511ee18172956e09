//! Helpers for workspace test suites.
//!
//! Reference components in fluorescence lifetime imaging are usually pure
//! single-exponential species. Their phasor coordinates at harmonic `n` of a
//! modulation frequency `f` follow the semicircle
//! `g = 1 / (1 + (ωτ)²)`, `s = ωτ / (1 + (ωτ)²)` with `ω = 2π·f·n`.

use crate::{phasor_point, Pt2, Real};
use ndarray::ArrayViewD;
use std::f64::consts::PI;

/// Phasor of a single-exponential decay.
///
/// `frequency_mhz` is the fundamental modulation frequency in MHz,
/// `lifetime_ns` the lifetime in nanoseconds, `harmonic` is 1-based.
pub fn single_lifetime_phasor(frequency_mhz: Real, lifetime_ns: Real, harmonic: usize) -> Pt2 {
    let omega_tau = 2.0 * PI * frequency_mhz * 1e-3 * harmonic as Real * lifetime_ns;
    let denom = 1.0 + omega_tau * omega_tau;
    phasor_point(1.0 / denom, omega_tau / denom)
}

/// Real and imaginary coordinates of several single-exponential components.
pub fn lifetime_components(
    frequency_mhz: Real,
    lifetimes_ns: &[Real],
    harmonic: usize,
) -> (Vec<Real>, Vec<Real>) {
    lifetimes_ns
        .iter()
        .map(|&tau| {
            let p = single_lifetime_phasor(frequency_mhz, tau, harmonic);
            (p.x, p.y)
        })
        .unzip()
}

/// Assert that `actual`, read in logical order, matches `expected` elementwise.
pub fn assert_all_close(actual: ArrayViewD<'_, Real>, expected: &[Real], tol: Real) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {:?} vs {:?}",
        actual.shape(),
        expected.len()
    );
    for (idx, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "element {idx}: {a} differs from {e} by more than {tol}"
        );
    }
}
