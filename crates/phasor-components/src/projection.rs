//! Orthogonal projection of phasor coordinates onto the line through two
//! reference points.
//!
//! The projection is unbounded: points beyond either reference land on the
//! extension of the segment, not on its end points.

use crate::ComponentsError;
use ndarray::{ArrayD, ArrayViewD, Zip};
use phasor_core::{ensure_same_shape, phasor_point, Pt2, Real, Vec2};

/// Unit direction from `first` to `second` and the distance between them.
fn unit_direction(first: &Pt2, second: &Pt2) -> Result<(Vec2, Real), ComponentsError> {
    let delta = second - first;
    let distance = delta.norm();
    // also rejects NaN
    if !(distance > 0.0) {
        return Err(ComponentsError::DegenerateComponents { distance });
    }
    Ok((delta / distance, distance))
}

/// Project a single point onto the line through `first` and `second`.
pub fn project_point_to_line(
    point: &Pt2,
    first: &Pt2,
    second: &Pt2,
) -> Result<Pt2, ComponentsError> {
    let (unit, _) = unit_direction(first, second)?;
    let t = (point - first).dot(&unit);
    Ok(first + unit * t)
}

/// Project every `(real, imag)` sample onto the line through `first` and `second`.
///
/// Returns the projected real and imaginary arrays, with the shape of `real`.
pub fn project_phasor_to_line(
    real: ArrayViewD<'_, Real>,
    imag: ArrayViewD<'_, Real>,
    first: &Pt2,
    second: &Pt2,
) -> Result<(ArrayD<Real>, ArrayD<Real>), ComponentsError> {
    ensure_same_shape("real/imag", real.shape(), imag.shape())?;
    let (unit, _) = unit_direction(first, second)?;

    // signed distance along the line, measured from `first`
    let along = Zip::from(&real)
        .and(&imag)
        .map_collect(|&r, &i| (phasor_point(r, i) - first).dot(&unit));

    let projected_real = along.mapv(|t| first.x + t * unit.x);
    let projected_imag = along.mapv(|t| first.y + t * unit.y);
    Ok((projected_real, projected_imag))
}
