//! Component tables and the component-count variant they resolve to.
//!
//! Component coordinates are normalised once into an `(H, K)` table, `H`
//! harmonics by `K` components. The table decides which solver applies:
//!
//! | K | H | system                                   |
//! |---|---|------------------------------------------|
//! | 2 | 1 | line projection                          |
//! | 3 | 1 | 3x3: real, imag, ones                    |
//! | 4 | 2 | 4x4: real h0, real h1, imag h0, imag h1  |

use crate::ComponentsError;
use ndarray::{Array2, ArrayView1, ArrayViewD, Axis, Ix2};
use phasor_core::{atleast_1d, ensure_axis, ensure_same_shape, phasor_point, Pt2, Real};
use serde::{Deserialize, Serialize};

/// Axis roles for harmonic-resolved inputs.
///
/// The two axes refer to different arrays and are set independently:
/// `sample_harmonic_axis` indexes harmonics of the measured coordinates and is
/// removed from the output grid; `component_harmonic_axis` indexes harmonics
/// of 2-D component arrays and is the axis the coefficient rows are stacked
/// along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FractionsOptions {
    /// Harmonic axis of the measured `real`/`imag` arrays.
    ///
    /// Only consulted when the components carry more than one harmonic.
    pub sample_harmonic_axis: usize,
    /// Harmonic axis of 2-D component arrays: 0 for `(H, K)`, 1 for `(K, H)`.
    pub component_harmonic_axis: usize,
}

impl FractionsOptions {
    /// Use the same axis index for both roles.
    pub fn with_axis(axis: usize) -> Self {
        Self {
            sample_harmonic_axis: axis,
            component_harmonic_axis: axis,
        }
    }
}

/// Solver variant resolved from the component table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComponentLayout {
    /// Two components at one harmonic, resolved by line projection.
    Two,
    /// Three or four components resolved by an exact `K x K` solve.
    Linear {
        components: usize,
        harmonics: usize,
        /// A row of ones (fractions sum to one) completes the system.
        augmented: bool,
    },
}

impl ComponentLayout {
    pub fn components(&self) -> usize {
        match self {
            ComponentLayout::Two => 2,
            ComponentLayout::Linear { components, .. } => *components,
        }
    }

    pub fn harmonics(&self) -> usize {
        match self {
            ComponentLayout::Two => 1,
            ComponentLayout::Linear { harmonics, .. } => *harmonics,
        }
    }
}

/// Component coordinates arranged as `(H, K)` tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentTable {
    real: Array2<Real>,
    imag: Array2<Real>,
}

impl ComponentTable {
    /// Normalise component arrays into `(H, K)` tables.
    ///
    /// 1-D arrays are a single harmonic; a unit axis is inserted at
    /// `component_harmonic_axis`. 2-D arrays are transposed when the harmonic
    /// axis is 1.
    pub fn from_arrays(
        real_components: ArrayViewD<'_, Real>,
        imag_components: ArrayViewD<'_, Real>,
        component_harmonic_axis: usize,
    ) -> Result<Self, ComponentsError> {
        ensure_same_shape(
            "real_components/imag_components",
            real_components.shape(),
            imag_components.shape(),
        )?;
        let real = to_table(atleast_1d(real_components), component_harmonic_axis)?;
        let imag = to_table(atleast_1d(imag_components), component_harmonic_axis)?;
        Ok(Self { real, imag })
    }

    pub fn harmonics(&self) -> usize {
        self.real.nrows()
    }

    pub fn components(&self) -> usize {
        self.real.ncols()
    }

    /// Real coordinates at harmonic row `h`.
    pub fn real_row(&self, h: usize) -> ArrayView1<'_, Real> {
        self.real.row(h)
    }

    /// Imaginary coordinates at harmonic row `h`.
    pub fn imag_row(&self, h: usize) -> ArrayView1<'_, Real> {
        self.imag.row(h)
    }

    /// Coordinate of component `k` at harmonic row `h`.
    pub fn point(&self, h: usize, k: usize) -> Pt2 {
        phasor_point(self.real[[h, k]], self.imag[[h, k]])
    }

    /// Decide which solver this table needs.
    pub fn layout(&self) -> Result<ComponentLayout, ComponentsError> {
        let k = self.components();
        let h = self.harmonics();
        match k {
            2 if h == 1 => Ok(ComponentLayout::Two),
            2 => Err(ComponentsError::HarmonicMismatch {
                expected: 1,
                got: h,
            }),
            3 | 4 => {
                let rows = 2 * h;
                if rows == k {
                    Ok(ComponentLayout::Linear {
                        components: k,
                        harmonics: h,
                        augmented: false,
                    })
                } else if rows + 1 == k {
                    Ok(ComponentLayout::Linear {
                        components: k,
                        harmonics: h,
                        augmented: true,
                    })
                } else {
                    Err(ComponentsError::NonSquareSystem {
                        rows: rows + 1,
                        cols: k,
                    })
                }
            }
            other => Err(ComponentsError::InvalidComponentCount(other)),
        }
    }
}

fn to_table(
    components: ArrayViewD<'_, Real>,
    harmonic_axis: usize,
) -> Result<Array2<Real>, ComponentsError> {
    let shape = components.shape().to_vec();
    let shape_error = || ComponentsError::ComponentShape {
        what: "component coordinates",
        expected: "(K,) or two-dimensional with a harmonic axis",
        got: shape.clone(),
    };
    ensure_axis(harmonic_axis, 2)?;
    let components = match components.ndim() {
        1 => components.insert_axis(Axis(harmonic_axis)),
        2 => components,
        _ => return Err(shape_error()),
    };
    let table = components
        .into_dimensionality::<Ix2>()
        .map_err(|_| shape_error())?;
    let table = if harmonic_axis == 1 {
        table.reversed_axes()
    } else {
        table
    };
    Ok(table.to_owned())
}
