//! Fractions of three or four components by an exact linear solve.
//!
//! Each harmonic contributes two equations, `Σ f_k g_k = g` and
//! `Σ f_k s_k = s`. When those are one short of the number of unknowns, the
//! constraint `Σ f_k = 1` is appended as a row of ones:
//!
//! ```text
//! | g_0 g_1 g_2 |   | f_0 |   | g |
//! | s_0 s_1 s_2 | * | f_1 | = | s |
//! |  1   1   1  |   | f_2 |   | 1 |
//! ```
//!
//! With two harmonics and four components the real and imaginary rows of
//! both harmonics already form a square system and no ones row is added.
//!
//! The coefficient matrix is the same for every sample, so it is factorised
//! once and all samples are solved together as the columns of one right-hand
//! side.

use crate::{
    ComponentFractions, ComponentLayout, ComponentTable, ComponentsError, FractionsOptions,
};
use log::{debug, trace};
use nalgebra::{Dyn, LU};
use ndarray::{ArrayBase, ArrayD, ArrayViewD, Axis, Data, Dimension, IxDyn};
use phasor_core::{atleast_1d, ensure_axis, ensure_same_shape, Mat, Real, ShapeError};

/// Exact K x K solver for three or four components.
#[derive(Debug, Clone, Copy)]
pub struct LinearSystemSolver;

/// Resolve three or four component fractions.
///
/// Component arrays are `(K,)` for a single harmonic or two-dimensional with
/// a harmonic axis (see [`FractionsOptions`]). With more than one harmonic the
/// measured arrays carry the harmonics along
/// [`FractionsOptions::sample_harmonic_axis`], and that axis is removed from
/// the output grid.
pub fn linear_fractions_from_phasor<S1, S2, S3, S4, D1, D2, D3, D4>(
    real: &ArrayBase<S1, D1>,
    imag: &ArrayBase<S2, D2>,
    real_components: &ArrayBase<S3, D3>,
    imag_components: &ArrayBase<S4, D4>,
    options: &FractionsOptions,
) -> Result<ComponentFractions, ComponentsError>
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
    LinearSystemSolver::solve(
        real.view().into_dyn(),
        imag.view().into_dyn(),
        real_components.view().into_dyn(),
        imag_components.view().into_dyn(),
        options,
    )
}

impl LinearSystemSolver {
    /// Resolve fractions from dynamic-rank views.
    pub fn solve(
        real: ArrayViewD<'_, Real>,
        imag: ArrayViewD<'_, Real>,
        real_components: ArrayViewD<'_, Real>,
        imag_components: ArrayViewD<'_, Real>,
        options: &FractionsOptions,
    ) -> Result<ComponentFractions, ComponentsError> {
        ensure_same_shape("real/imag", real.shape(), imag.shape())?;
        let table = ComponentTable::from_arrays(
            real_components,
            imag_components,
            options.component_harmonic_axis,
        )?;
        Self::solve_table(real, imag, &table, options)
    }

    /// Resolve fractions against an already normalised component table.
    pub fn solve_table(
        real: ArrayViewD<'_, Real>,
        imag: ArrayViewD<'_, Real>,
        table: &ComponentTable,
        options: &FractionsOptions,
    ) -> Result<ComponentFractions, ComponentsError> {
        ensure_same_shape("real/imag", real.shape(), imag.shape())?;
        let (components, harmonics, augmented) = match table.layout()? {
            ComponentLayout::Linear {
                components,
                harmonics,
                augmented,
            } => (components, harmonics, augmented),
            ComponentLayout::Two => return Err(ComponentsError::InvalidComponentCount(2)),
        };

        let real = atleast_1d(real.reborrow());
        let imag = atleast_1d(imag.reborrow());
        let samples = SampleRows::new(real, imag, harmonics, options.sample_harmonic_axis)?;
        debug!(
            "linear system: {components} components, {harmonics} harmonic(s), augmented={augmented}, grid={:?}",
            samples.grid
        );

        let a = coefficient_matrix(table, augmented);
        trace!("coefficient matrix: {a}");
        let b = samples.right_hand_side(components, augmented);

        let x = solve_exact(a, &b)?;
        let n = samples.grid.iter().product::<usize>();
        let fractions = (0..components)
            .map(|k| {
                let row: Vec<Real> = x.row(k).iter().copied().collect();
                debug_assert_eq!(row.len(), n);
                ArrayD::from_shape_vec(IxDyn(&samples.grid), row).map_err(|_| {
                    ComponentsError::Shape(ShapeError::DataLength {
                        expected: n,
                        got: x.ncols(),
                    })
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ComponentFractions::new(fractions))
    }
}

/// Rows `[real_h..., imag_h..., (ones)]`, each row holding `K` components.
fn coefficient_matrix(table: &ComponentTable, augmented: bool) -> Mat {
    let k = table.components();
    let h = table.harmonics();
    let mut a = Mat::zeros(k, k);
    for row in 0..h {
        for (col, &g) in table.real_row(row).iter().enumerate() {
            a[(row, col)] = g;
        }
        for (col, &s) in table.imag_row(row).iter().enumerate() {
            a[(h + row, col)] = s;
        }
    }
    if augmented {
        a.row_mut(k - 1).fill(1.0);
    }
    a
}

/// LU-factorise `a` once and solve for every column of `b`.
fn solve_exact(a: Mat, b: &Mat) -> Result<Mat, ComponentsError> {
    let k = a.nrows();
    let scale = a.amax();
    let tol = k as Real * Real::EPSILON * scale;
    let lu: LU<Real, Dyn, Dyn> = a.lu();
    let u = lu.u();
    if (0..k).any(|i| u[(i, i)].abs() <= tol) {
        return Err(ComponentsError::SingularSystem { components: k });
    }
    lu.solve(b)
        .ok_or(ComponentsError::SingularSystem { components: k })
}

fn split_axis<'a>(
    array: &ArrayViewD<'a, Real>,
    axis: Axis,
    len: usize,
) -> Vec<ArrayViewD<'a, Real>> {
    (0..len)
        .map(|h| array.clone().index_axis_move(axis, h))
        .collect()
}

/// Measured coordinates split into per-harmonic views over the sample grid.
struct SampleRows<'a> {
    real: Vec<ArrayViewD<'a, Real>>,
    imag: Vec<ArrayViewD<'a, Real>>,
    grid: Vec<usize>,
}

impl<'a> SampleRows<'a> {
    fn new(
        real: ArrayViewD<'a, Real>,
        imag: ArrayViewD<'a, Real>,
        harmonics: usize,
        harmonic_axis: usize,
    ) -> Result<Self, ComponentsError> {
        if harmonics == 1 {
            let grid = real.shape().to_vec();
            return Ok(Self {
                real: vec![real],
                imag: vec![imag],
                grid,
            });
        }

        let axis = ensure_axis(harmonic_axis, real.ndim())?;
        let got = real.len_of(axis);
        if got != harmonics {
            return Err(ComponentsError::HarmonicMismatch {
                expected: harmonics,
                got,
            });
        }
        let mut grid = real.shape().to_vec();
        grid.remove(harmonic_axis);
        Ok(Self {
            real: split_axis(&real, axis, harmonics),
            imag: split_axis(&imag, axis, harmonics),
            grid,
        })
    }

    /// One column per sample, rows in coefficient-matrix order.
    fn right_hand_side(&self, components: usize, augmented: bool) -> Mat {
        let n = self.grid.iter().product::<usize>();
        let h = self.real.len();
        let mut b = Mat::zeros(components, n);
        for (row, (r, i)) in self.real.iter().zip(&self.imag).enumerate() {
            for (col, &v) in r.iter().enumerate() {
                b[(row, col)] = v;
            }
            for (col, &v) in i.iter().enumerate() {
                b[(h + row, col)] = v;
            }
        }
        if augmented {
            b.row_mut(components - 1).fill(1.0);
        }
        b
    }
}
