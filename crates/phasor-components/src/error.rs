use phasor_core::{Real, ShapeError};
use thiserror::Error;

/// Errors that can occur while resolving component fractions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComponentsError {
    /// Measured or component real/imag arrays disagree in shape.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// Component coordinates do not have the shape a solver requires.
    #[error("{what} must have shape {expected}, got {got:?}")]
    ComponentShape {
        what: &'static str,
        expected: &'static str,
        got: Vec<usize>,
    },
    /// The two reference components coincide, so the fraction axis is undefined.
    #[error("components must have different coordinates (distance {distance:e})")]
    DegenerateComponents { distance: Real },
    /// Only two, three or four components can be resolved.
    #[error("expected 2, 3 or 4 components, got {0}")]
    InvalidComponentCount(usize),
    /// Measured coordinates do not carry the harmonics the components require.
    #[error("expected {expected} harmonic(s) along the sample harmonic axis, got {got}")]
    HarmonicMismatch { expected: usize, got: usize },
    /// The coefficient matrix cannot be made square for this configuration.
    #[error("coefficient matrix is {rows}x{cols}; components and harmonics do not form a square system")]
    NonSquareSystem { rows: usize, cols: usize },
    /// The components are affinely dependent and the linear system is singular.
    #[error("singular matrix: {components} components are affinely dependent")]
    SingularSystem { components: usize },
}

impl ComponentsError {
    /// True for the shape-mismatch category (measured or component shapes disagree).
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, ComponentsError::Shape(ShapeError::Mismatch { .. }))
    }
}
