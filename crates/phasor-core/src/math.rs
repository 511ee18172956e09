use nalgebra::{DMatrix, Point2, Vector2};

/// Scalar type used throughout the workspace (currently `f64`).
pub type Real = f64;

/// 2D vector with [`Real`] components.
pub type Vec2 = Vector2<Real>;
/// 2D point with [`Real`] coordinates, `x` = real part, `y` = imaginary part.
pub type Pt2 = Point2<Real>;
/// Dynamically sized matrix with [`Real`] entries.
pub type Mat = DMatrix<Real>;

/// Build a phasor point from its real and imaginary parts.
#[inline]
pub fn phasor_point(real: Real, imag: Real) -> Pt2 {
    Pt2::new(real, imag)
}

/// Euclidean distance between two phasor points.
#[inline]
pub fn phasor_distance(a: &Pt2, b: &Pt2) -> Real {
    (b - a).norm()
}
