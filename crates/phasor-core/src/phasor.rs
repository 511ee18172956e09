use crate::{ensure_same_shape, phasor_point, Pt2, Real, ShapeError};
use ndarray::{ArrayBase, ArrayD, ArrayViewD, Data, Dimension};

/// Real and imaginary phasor coordinates sampled over a common grid.
///
/// Both arrays always have identical shape; this is checked on construction.
/// The grid may carry a harmonic axis, but this type does not interpret it.
#[derive(Debug, Clone, PartialEq)]
pub struct PhasorCoordinates {
    real: ArrayD<Real>,
    imag: ArrayD<Real>,
}

impl PhasorCoordinates {
    /// Pair `real` and `imag`, failing if their shapes differ.
    pub fn new<S, T, D, E>(
        real: ArrayBase<S, D>,
        imag: ArrayBase<T, E>,
    ) -> Result<Self, ShapeError>
    where
        S: Data<Elem = Real>,
        T: Data<Elem = Real>,
        D: Dimension,
        E: Dimension,
    {
        ensure_same_shape("real/imag", real.shape(), imag.shape())?;
        Ok(Self {
            real: real.into_owned().into_dyn(),
            imag: imag.into_owned().into_dyn(),
        })
    }

    /// Pair arrays already known to share a shape.
    pub(crate) fn from_matching(real: ArrayD<Real>, imag: ArrayD<Real>) -> Self {
        debug_assert_eq!(real.shape(), imag.shape());
        Self { real, imag }
    }

    /// Collect individual points into 1-D coordinate arrays.
    pub fn from_points(points: &[Pt2]) -> Self {
        Self {
            real: ArrayD::from_shape_fn(vec![points.len()], |idx| points[idx[0]].x),
            imag: ArrayD::from_shape_fn(vec![points.len()], |idx| points[idx[0]].y),
        }
    }

    pub fn real(&self) -> ArrayViewD<'_, Real> {
        self.real.view()
    }

    pub fn imag(&self) -> ArrayViewD<'_, Real> {
        self.imag.view()
    }

    /// Shared shape of the real and imaginary arrays.
    pub fn shape(&self) -> &[usize] {
        self.real.shape()
    }

    /// Number of samples (product of the shape).
    pub fn len(&self) -> usize {
        self.real.len()
    }

    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }

    /// Coordinate at a multi-dimensional index, if it is in bounds.
    pub fn point(&self, index: &[usize]) -> Option<Pt2> {
        let r = self.real.get(index)?;
        let i = self.imag.get(index)?;
        Some(phasor_point(*r, *i))
    }

    /// Iterate over all coordinates in logical (row-major) order.
    pub fn iter_points(&self) -> impl Iterator<Item = Pt2> + '_ {
        self.real
            .iter()
            .zip(self.imag.iter())
            .map(|(&r, &i)| phasor_point(r, i))
    }

    pub fn into_parts(self) -> (ArrayD<Real>, ArrayD<Real>) {
        (self.real, self.imag)
    }
}
