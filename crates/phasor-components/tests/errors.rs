//! Error taxonomy of the public entry points.

use ndarray::{arr1, arr2};
use phasor_components::{fractions_from_phasor, two_fractions_from_phasor, ComponentsError};

#[test]
fn coincident_two_components_are_degenerate() {
    let err = two_fractions_from_phasor(
        &arr1(&[0.6, 0.5, 0.4]),
        &arr1(&[0.4, 0.3, 0.2]),
        &arr1(&[0.5, 0.5]),
        &arr1(&[0.3, 0.3]),
    )
    .unwrap_err();
    assert!(matches!(err, ComponentsError::DegenerateComponents { .. }));
    assert!(err.to_string().contains("different coordinates"));
}

#[test]
fn nearly_coincident_components_within_tolerance_are_degenerate() {
    let err = two_fractions_from_phasor(
        &arr1(&[0.6]),
        &arr1(&[0.4]),
        &arr1(&[0.5, 0.5 + 5e-7]),
        &arr1(&[0.3, 0.3]),
    )
    .unwrap_err();
    assert!(matches!(err, ComponentsError::DegenerateComponents { .. }));
}

#[test]
fn mismatched_measured_shapes_fail_for_every_component_count() {
    let cases = [
        (arr1(&[0.2, 0.9]), arr1(&[0.4, 0.3])),
        (arr1(&[0.1, 0.5, 0.9]), arr1(&[0.3, 0.5, 0.2])),
    ];
    for (rc, ic) in &cases {
        let err = fractions_from_phasor(
            &arr2(&[[0.5, 0.4], [0.3, 0.2]]),
            &arr1(&[0.3, 0.2]),
            rc,
            ic,
            0,
        )
        .unwrap_err();
        assert!(err.is_shape_mismatch(), "{err}");
    }

    let rc = arr2(&[[0.1, 0.2, 0.3, 0.4], [0.05, 0.1, 0.2, 0.3]]);
    let ic = arr2(&[[0.3, 0.4, 0.45, 0.4], [0.2, 0.3, 0.4, 0.45]]);
    let err = fractions_from_phasor(&arr1(&[0.5, 0.4]), &arr1(&[0.3]), &rc, &ic, 0).unwrap_err();
    assert!(err.is_shape_mismatch());
}

#[test]
fn collinear_three_components_are_singular() {
    let err = fractions_from_phasor(
        &arr1(&[0.5, 0.3]),
        &arr1(&[0.375, 0.2]),
        &arr1(&[0.25, 0.5, 0.75]),
        &arr1(&[0.25, 0.375, 0.5]),
        0,
    )
    .unwrap_err();
    assert_eq!(err, ComponentsError::SingularSystem { components: 3 });
}

#[test]
fn inexact_collinear_three_components_are_singular() {
    // imaginary parts on an affine line of the real parts, neither exactly representable
    let rc = arr1(&[0.1 / 3.0, 0.31, 0.86]);
    let ic = rc.mapv(|g| 0.37 + 1.1 * g);
    let err = fractions_from_phasor(&arr1(&[0.5, 0.3]), &arr1(&[0.9, 0.7]), &rc, &ic, 0)
        .unwrap_err();
    assert_eq!(err, ComponentsError::SingularSystem { components: 3 });
}

#[test]
fn repeated_four_components_are_singular() {
    // the third and fourth components coincide at both harmonics
    let rc = arr2(&[[0.1, 0.5, 0.9, 0.9], [0.05, 0.25, 0.8, 0.8]]);
    let ic = arr2(&[[0.3, 0.5, 0.2, 0.2], [0.2, 0.4, 0.3, 0.3]]);
    let err =
        fractions_from_phasor(&arr1(&[0.5, 0.4]), &arr1(&[0.3, 0.3]), &rc, &ic, 0).unwrap_err();
    assert_eq!(err, ComponentsError::SingularSystem { components: 4 });
}

#[test]
fn four_components_at_one_harmonic_are_underdetermined() {
    let err = fractions_from_phasor(
        &arr1(&[0.5]),
        &arr1(&[0.3]),
        &arr1(&[0.1, 0.4, 0.7, 0.9]),
        &arr1(&[0.3, 0.5, 0.4, 0.1]),
        0,
    )
    .unwrap_err();
    assert_eq!(err, ComponentsError::NonSquareSystem { rows: 3, cols: 4 });
}

#[test]
fn one_component_is_rejected() {
    let err = fractions_from_phasor(&arr1(&[0.5]), &arr1(&[0.3]), &arr1(&[0.1]), &arr1(&[0.3]), 0)
        .unwrap_err();
    assert_eq!(err, ComponentsError::InvalidComponentCount(1));
}
