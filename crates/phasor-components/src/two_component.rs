//! Fractions of two components by projection onto the line joining them.
//!
//! Every measured phasor is projected orthogonally onto the line through the
//! two reference components. The fraction of the second component is the
//! distance of the projection from the first component divided by the
//! distance between the components; the first component takes the rest.
//!
//! One pair of components is shared by all samples. Per-channel or
//! per-harmonic component pairs are not supported.

use crate::{project_phasor_to_line, ComponentsError};
use log::{debug, trace};
use ndarray::{ArrayBase, ArrayD, ArrayViewD, Data, Dimension, Zip};
use phasor_core::{ensure_same_shape, phasor_distance, phasor_point, Real};

/// Components closer than this (absolute, in phasor units) are treated as
/// coincident.
pub const COMPONENT_DISTANCE_TOLERANCE: Real = 1e-6;

/// Two-component resolution by line projection.
#[derive(Debug, Clone, Copy)]
pub struct LineProjectionSolver;

/// Return the fractions of the first and second component at every sample.
///
/// `real_components` and `imag_components` must have shape `(2,)`. The output
/// arrays have the shape of `real`. Fractions are not clamped: samples that
/// project beyond the second component give a negative first fraction.
/// The distance from the first component is unsigned, so a sample projecting
/// behind the first component folds back into `[0, 1]`: the point at
/// `first - 0.5 * (second - first)` resolves to `(0.5, 0.5)` like the midpoint.
///
/// ```
/// use ndarray::arr1;
/// use phasor_components::two_fractions_from_phasor;
///
/// let (first, second) = two_fractions_from_phasor(
///     &arr1(&[0.6, 0.5, 0.4]),
///     &arr1(&[0.4, 0.3, 0.2]),
///     &arr1(&[0.2, 0.9]),
///     &arr1(&[0.4, 0.3]),
/// )
/// .unwrap();
/// assert!((first[[0]] - 0.44).abs() < 1e-2);
/// assert!((second[[2]] - 0.32).abs() < 1e-2);
/// ```
pub fn two_fractions_from_phasor<S1, S2, S3, S4, D1, D2, D3, D4>(
    real: &ArrayBase<S1, D1>,
    imag: &ArrayBase<S2, D2>,
    real_components: &ArrayBase<S3, D3>,
    imag_components: &ArrayBase<S4, D4>,
) -> Result<(ArrayD<Real>, ArrayD<Real>), ComponentsError>
where
    S1: Data<Elem = Real>,
    S2: Data<Elem = Real>,
    S3: Data<Elem = Real>,
    S4: Data<Elem = Real>,
    D1: Dimension,
    D2: Dimension,
    D3: Dimension,
    D4: Dimension,
{
    LineProjectionSolver::solve(
        real.view().into_dyn(),
        imag.view().into_dyn(),
        real_components.view().into_dyn(),
        imag_components.view().into_dyn(),
    )
}

impl LineProjectionSolver {
    /// Resolve two-component fractions from dynamic-rank views.
    pub fn solve(
        real: ArrayViewD<'_, Real>,
        imag: ArrayViewD<'_, Real>,
        real_components: ArrayViewD<'_, Real>,
        imag_components: ArrayViewD<'_, Real>,
    ) -> Result<(ArrayD<Real>, ArrayD<Real>), ComponentsError> {
        ensure_same_shape("real/imag", real.shape(), imag.shape())?;
        for (what, shape) in [
            ("real_components", real_components.shape()),
            ("imag_components", imag_components.shape()),
        ] {
            if shape != [2] {
                return Err(ComponentsError::ComponentShape {
                    what,
                    expected: "(2,)",
                    got: shape.to_vec(),
                });
            }
        }

        let first = phasor_point(real_components[[0]], imag_components[[0]]);
        let second = phasor_point(real_components[[1]], imag_components[[1]]);
        let total_distance = phasor_distance(&first, &second);
        if total_distance.abs() <= COMPONENT_DISTANCE_TOLERANCE {
            return Err(ComponentsError::DegenerateComponents {
                distance: total_distance,
            });
        }
        debug!(
            "two-component projection: first={first:?} second={second:?} distance={total_distance:.6} samples={}",
            real.len()
        );

        let (projected_real, projected_imag) =
            project_phasor_to_line(real, imag, &first, &second)?;

        let second_fraction = Zip::from(&projected_real)
            .and(&projected_imag)
            .map_collect(|&r, &i| phasor_distance(&first, &phasor_point(r, i)) / total_distance);
        let first_fraction = second_fraction.mapv(|f| 1.0 - f);
        trace!("second-component fractions: {second_fraction:?}");

        Ok((first_fraction, second_fraction))
    }
}
