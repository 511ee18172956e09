use crate::Real;
use ndarray::{ArrayViewD, Axis};
use thiserror::Error;

/// Errors raised when array shapes do not fit together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Two arrays that must share a shape do not.
    #[error("{what}: shape {left:?} != {right:?}")]
    Mismatch {
        what: &'static str,
        left: Vec<usize>,
        right: Vec<usize>,
    },
    /// An axis index is not valid for the array rank.
    #[error("axis {axis} is out of bounds for array of dimension {ndim}")]
    AxisOutOfBounds { axis: usize, ndim: usize },
    /// Flat data does not contain the number of elements the shape implies.
    #[error("data length {got} does not match shape (expected {expected} elements)")]
    DataLength { expected: usize, got: usize },
}

/// Fail with [`ShapeError::Mismatch`] unless `left == right`.
pub fn ensure_same_shape(
    what: &'static str,
    left: &[usize],
    right: &[usize],
) -> Result<(), ShapeError> {
    if left != right {
        return Err(ShapeError::Mismatch {
            what,
            left: left.to_vec(),
            right: right.to_vec(),
        });
    }
    Ok(())
}

/// Fail with [`ShapeError::AxisOutOfBounds`] unless `axis < ndim`.
pub fn ensure_axis(axis: usize, ndim: usize) -> Result<Axis, ShapeError> {
    if axis >= ndim {
        return Err(ShapeError::AxisOutOfBounds { axis, ndim });
    }
    Ok(Axis(axis))
}

/// Promote a 0-dimensional view to shape `(1,)`; higher ranks pass through.
pub fn atleast_1d(a: ArrayViewD<'_, Real>) -> ArrayViewD<'_, Real> {
    if a.ndim() == 0 {
        a.insert_axis(Axis(0))
    } else {
        a
    }
}
