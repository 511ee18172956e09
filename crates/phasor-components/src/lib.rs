//! Resolve the fractions of known components from phasor coordinates.
//!
//! A measured phasor coordinate is a fraction-weighted sum of the coordinates
//! of the pure species (components) contributing to it. Given the component
//! coordinates, this crate recovers the fractions at every sample:
//!
//! - two components: orthogonal projection onto the line joining them
//!   ([`LineProjectionSolver`], [`two_fractions_from_phasor`]),
//! - three components at one harmonic, or four at two harmonics: an exact
//!   linear solve ([`LinearSystemSolver`], [`linear_fractions_from_phasor`]),
//! - any of the above through one entry point ([`FractionsSolver`],
//!   [`fractions_from_phasor`]).
//!
//! Returned fractions are not clamped or renormalised. Values outside
//! `[0, 1]` point at components that do not bracket the data and are left for
//! the caller to inspect (see [`summarize_fractions`]).
//!
//! # Example
//!
//! ```
//! use ndarray::{arr1, arr2};
//! use phasor_components::fractions_from_phasor;
//!
//! // 2x2 image, three components at one harmonic
//! let real = arr2(&[[0.30, 0.50], [0.40, 0.60]]);
//! let imag = arr2(&[[0.35, 0.40], [0.30, 0.30]]);
//! let fractions = fractions_from_phasor(
//!     &real,
//!     &imag,
//!     &arr1(&[0.1, 0.5, 0.9]),
//!     &arr1(&[0.3, 0.5, 0.2]),
//!     0,
//! )
//! .unwrap();
//! assert_eq!(fractions.len(), 3);
//! assert_eq!(fractions.shape(), &[2, 2]);
//! ```

mod dispatch;
mod error;
mod fractions;
mod layout;
mod linear_system;
/// JSON input, configuration and report types.
pub mod pipeline;
mod projection;
mod summary;
mod two_component;

pub use dispatch::*;
pub use error::*;
pub use fractions::*;
pub use layout::*;
pub use linear_system::*;
pub use pipeline::{run_fractions, FractionsConfig, FractionsInput, FractionsReport};
pub use projection::*;
pub use summary::*;
pub use two_component::*;

/// Convenience re-exports of the solver entry points.
pub mod prelude {
    pub use crate::{
        fractions_from_phasor, fractions_from_phasor_with, linear_fractions_from_phasor,
        two_fractions_from_phasor, ComponentFractions, ComponentLayout, ComponentsError,
        FractionsOptions, FractionsSolver,
    };
}
