//! Forward model: measured phasor as a fraction-weighted sum of components.
//!
//! Phasor coordinates are linear in the fractional intensity contributions,
//! so a mixture of `K` species at fractions `f_k` lies at
//! `Σ f_k · (g_k, s_k)` for every harmonic.

use crate::{ensure_same_shape, PhasorCoordinates, Real, ShapeError};
use ndarray::{stack, ArrayD, ArrayView2, Axis};

/// Mix single-harmonic components.
///
/// `fractions[k]` holds the fraction of component `k` at every sample; all
/// fraction arrays must share one shape, which is also the output shape.
pub fn mix_components(
    fractions: &[ArrayD<Real>],
    real_components: &[Real],
    imag_components: &[Real],
) -> Result<PhasorCoordinates, ShapeError> {
    let shape = fraction_grid(fractions, real_components.len())?;
    ensure_same_shape(
        "real_components/imag_components",
        &[real_components.len()],
        &[imag_components.len()],
    )?;

    let mut real = ArrayD::<Real>::zeros(shape.clone());
    let mut imag = ArrayD::<Real>::zeros(shape);
    for ((f, &g), &s) in fractions
        .iter()
        .zip(real_components)
        .zip(imag_components)
    {
        real.scaled_add(g, f);
        imag.scaled_add(s, f);
    }
    PhasorCoordinates::new(real, imag)
}

/// Mix components known at several harmonics.
///
/// Component arrays have shape `(H, K)`: row `h` holds the coordinates of all
/// `K` components at harmonic `h`. The output carries a leading harmonic axis,
/// i.e. shape `(H, ...)` where `...` is the fraction grid.
pub fn mix_components_harmonics(
    fractions: &[ArrayD<Real>],
    real_components: ArrayView2<'_, Real>,
    imag_components: ArrayView2<'_, Real>,
) -> Result<PhasorCoordinates, ShapeError> {
    ensure_same_shape(
        "real_components/imag_components",
        real_components.shape(),
        imag_components.shape(),
    )?;

    let mut real_rows = Vec::with_capacity(real_components.nrows());
    let mut imag_rows = Vec::with_capacity(real_components.nrows());
    for (g_row, s_row) in real_components.rows().into_iter().zip(imag_components.rows()) {
        let g: Vec<Real> = g_row.to_vec();
        let s: Vec<Real> = s_row.to_vec();
        let (real, imag) = mix_components(fractions, &g, &s)?.into_parts();
        real_rows.push(real);
        imag_rows.push(imag);
    }

    let real_views: Vec<_> = real_rows.iter().map(|a| a.view()).collect();
    let imag_views: Vec<_> = imag_rows.iter().map(|a| a.view()).collect();
    let real = stack(Axis(0), &real_views).map_err(|_| ShapeError::Mismatch {
        what: "harmonic rows",
        left: vec![real_views.len()],
        right: vec![],
    })?;
    let imag = stack(Axis(0), &imag_views).map_err(|_| ShapeError::Mismatch {
        what: "harmonic rows",
        left: vec![imag_views.len()],
        right: vec![],
    })?;
    PhasorCoordinates::new(real, imag)
}

fn fraction_grid(fractions: &[ArrayD<Real>], components: usize) -> Result<Vec<usize>, ShapeError> {
    ensure_same_shape("fractions/components", &[fractions.len()], &[components])?;
    let first = fractions.first().ok_or(ShapeError::Mismatch {
        what: "fractions",
        left: vec![0],
        right: vec![components],
    })?;
    for f in &fractions[1..] {
        ensure_same_shape("fractions", first.shape(), f.shape())?;
    }
    Ok(first.shape().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn pure_component_lands_on_component() {
        let fractions = [
            arr1(&[1.0, 0.0]).into_dyn(),
            arr1(&[0.0, 0.0]).into_dyn(),
            arr1(&[0.0, 1.0]).into_dyn(),
        ];
        let phasor = mix_components(&fractions, &[0.1, 0.5, 0.9], &[0.3, 0.5, 0.2]).unwrap();
        assert!((phasor.real()[[0]] - 0.1).abs() < 1e-12);
        assert!((phasor.imag()[[0]] - 0.3).abs() < 1e-12);
        assert!((phasor.real()[[1]] - 0.9).abs() < 1e-12);
        assert!((phasor.imag()[[1]] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn component_count_must_match_fractions() {
        let fractions = [arr1(&[0.5]).into_dyn(), arr1(&[0.5]).into_dyn()];
        assert!(mix_components(&fractions, &[0.1, 0.2, 0.3], &[0.1, 0.2, 0.3]).is_err());
    }

    #[test]
    fn harmonics_stack_on_leading_axis() {
        let fractions = [
            arr2(&[[0.5, 0.5, 0.5]]).into_dyn(),
            arr2(&[[0.5, 0.5, 0.5]]).into_dyn(),
        ];
        let real = arr2(&[[0.2, 0.8], [0.1, 0.5]]);
        let imag = arr2(&[[0.4, 0.4], [0.3, 0.3]]);
        let phasor = mix_components_harmonics(&fractions, real.view(), imag.view()).unwrap();
        assert_eq!(phasor.shape(), &[2, 1, 3]);
        assert!((phasor.real()[[0, 0, 2]] - 0.5).abs() < 1e-12);
        assert!((phasor.real()[[1, 0, 0]] - 0.3).abs() < 1e-12);
        assert!((phasor.imag()[[1, 0, 1]] - 0.3).abs() < 1e-12);
    }
}
