//! Forward mixing of lifetime components stays inside the universal semicircle.

use ndarray::{Array2, ArrayD, IxDyn};
use phasor_core::{
    synthetic::{
        mixture::{mix_components, mix_components_harmonics},
        noise::UniformPhasorNoise,
    },
    test_utils::lifetime_components,
    PhasorCoordinates, Real,
};

fn fraction_grid(values: &[[Real; 3]]) -> Vec<ArrayD<Real>> {
    (0..3)
        .map(|k| {
            ArrayD::from_shape_vec(IxDyn(&[values.len()]), values.iter().map(|f| f[k]).collect())
                .unwrap()
        })
        .collect()
}

#[test]
fn mixtures_are_inside_semicircle() {
    let (g, s) = lifetime_components(80.0, &[8.0, 0.5, 2.0], 1);
    let fractions = fraction_grid(&[[0.2, 0.3, 0.5], [0.6, 0.1, 0.3], [0.0, 1.0, 0.0]]);
    let phasor = mix_components(&fractions, &g, &s).unwrap();

    for p in phasor.iter_points() {
        let r2 = (p.x - 0.5).powi(2) + p.y.powi(2);
        assert!(r2 <= 0.25 + 1e-12, "mixture outside semicircle: {p:?}");
    }
}

#[test]
fn harmonic_stack_matches_single_harmonic_mix() {
    let lifetimes = [8.0, 0.5, 2.0];
    let (g1, s1) = lifetime_components(80.0, &lifetimes, 1);
    let (g2, s2) = lifetime_components(80.0, &lifetimes, 2);
    let fractions = fraction_grid(&[[0.2, 0.3, 0.5], [0.6, 0.1, 0.3]]);

    let real = Array2::from_shape_vec((2, 3), [g1, g2.clone()].concat()).unwrap();
    let imag = Array2::from_shape_vec((2, 3), [s1, s2.clone()].concat()).unwrap();
    let stacked = mix_components_harmonics(&fractions, real.view(), imag.view()).unwrap();
    assert_eq!(stacked.shape(), &[2, 2]);

    let second = mix_components(&fractions, &g2, &s2).unwrap();
    for j in 0..2 {
        assert!((stacked.real()[[1, j]] - second.real()[[j]]).abs() < 1e-12);
        assert!((stacked.imag()[[1, j]] - second.imag()[[j]]).abs() < 1e-12);
    }
}

#[test]
fn noise_keeps_shape() {
    let phasor = PhasorCoordinates::new(
        ArrayD::from_elem(IxDyn(&[4, 5]), 0.5),
        ArrayD::from_elem(IxDyn(&[4, 5]), 0.25),
    )
    .unwrap();
    let noisy = UniformPhasorNoise {
        seed: 7,
        max_abs: 1e-3,
    }
    .apply(&phasor, 0);
    assert_eq!(noisy.shape(), phasor.shape());
    assert_ne!(noisy, phasor);
    for (a, b) in noisy.iter_points().zip(phasor.iter_points()) {
        assert!((a - b).norm() <= 2.0_f64.sqrt() * 1e-3);
    }
}
