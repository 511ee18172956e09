//! Single entry point that routes to the two-component or linear solver.

use crate::{
    ComponentFractions, ComponentLayout, ComponentTable, ComponentsError, FractionsOptions,
    LineProjectionSolver, LinearSystemSolver,
};
use log::debug;
use ndarray::{ArrayBase, ArrayViewD, Data, Dimension};
use phasor_core::{atleast_1d, ensure_same_shape, Real};

/// Resolves fractions for 2, 3 or 4 components.
///
/// Inputs are validated and promoted to at least one dimension, the component
/// table is resolved to a [`ComponentLayout`] once, and the matching solver
/// is run. Two components give a two-element [`ComponentFractions`].
#[derive(Debug, Clone, Copy)]
pub struct FractionsSolver;

/// Return the fraction of every component at every sample.
///
/// `axis` is used for both harmonic roles, see [`FractionsOptions::with_axis`];
/// use [`fractions_from_phasor_with`] to set them independently.
///
/// ```
/// use ndarray::arr1;
/// use phasor_components::fractions_from_phasor;
///
/// let fractions = fractions_from_phasor(
///     &arr1(&[0.5]),
///     &arr1(&[0.35]),
///     &arr1(&[0.1, 0.5, 0.9]),
///     &arr1(&[0.3, 0.5, 0.2]),
///     0,
/// )
/// .unwrap();
/// assert_eq!(fractions.len(), 3);
/// let total = fractions.total().unwrap();
/// assert!((total[[0]] - 1.0).abs() < 1e-12);
/// ```
pub fn fractions_from_phasor<S1, S2, S3, S4, D1, D2, D3, D4>(
    real: &ArrayBase<S1, D1>,
    imag: &ArrayBase<S2, D2>,
    real_components: &ArrayBase<S3, D3>,
    imag_components: &ArrayBase<S4, D4>,
    axis: usize,
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
    fractions_from_phasor_with(
        real,
        imag,
        real_components,
        imag_components,
        &FractionsOptions::with_axis(axis),
    )
}

/// Like [`fractions_from_phasor`] with explicit axis roles.
pub fn fractions_from_phasor_with<S1, S2, S3, S4, D1, D2, D3, D4>(
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
    FractionsSolver::solve(
        real.view().into_dyn(),
        imag.view().into_dyn(),
        real_components.view().into_dyn(),
        imag_components.view().into_dyn(),
        options,
    )
}

impl FractionsSolver {
    /// Resolve the solver variant for a set of components.
    pub fn layout(
        real_components: ArrayViewD<'_, Real>,
        imag_components: ArrayViewD<'_, Real>,
        options: &FractionsOptions,
    ) -> Result<ComponentLayout, ComponentsError> {
        ComponentTable::from_arrays(
            real_components,
            imag_components,
            options.component_harmonic_axis,
        )?
        .layout()
    }

    /// Validate, dispatch and solve.
    pub fn solve(
        real: ArrayViewD<'_, Real>,
        imag: ArrayViewD<'_, Real>,
        real_components: ArrayViewD<'_, Real>,
        imag_components: ArrayViewD<'_, Real>,
        options: &FractionsOptions,
    ) -> Result<ComponentFractions, ComponentsError> {
        Self::solve_with_layout(real, imag, real_components, imag_components, options)
            .map(|(_, fractions)| fractions)
    }

    /// Like [`FractionsSolver::solve`], also returning the layout that was used.
    pub fn solve_with_layout(
        real: ArrayViewD<'_, Real>,
        imag: ArrayViewD<'_, Real>,
        real_components: ArrayViewD<'_, Real>,
        imag_components: ArrayViewD<'_, Real>,
        options: &FractionsOptions,
    ) -> Result<(ComponentLayout, ComponentFractions), ComponentsError> {
        ensure_same_shape("real/imag", real.shape(), imag.shape())?;
        ensure_same_shape(
            "real_components/imag_components",
            real_components.shape(),
            imag_components.shape(),
        )?;
        let real = atleast_1d(real);
        let imag = atleast_1d(imag);

        let table = ComponentTable::from_arrays(
            real_components,
            imag_components,
            options.component_harmonic_axis,
        )?;
        let layout = table.layout()?;
        debug!("resolved component layout {layout:?} for samples of shape {:?}", real.shape());

        let fractions = match layout {
            ComponentLayout::Two => LineProjectionSolver::solve(
                real,
                imag,
                table.real_row(0).into_dyn(),
                table.imag_row(0).into_dyn(),
            )
            .map(ComponentFractions::from)?,
            ComponentLayout::Linear { .. } => {
                LinearSystemSolver::solve_table(real, imag, &table, options)?
            }
        };
        Ok((layout, fractions))
    }
}
