//! Core types and array utilities for `phasor-components`.
//!
//! This crate provides the foundational building blocks used by the solver
//! and CLI crates in the workspace:
//!
//! - scalar and small linear algebra type aliases (`Real`, `Pt2`, `Vec2`, ...),
//! - [`PhasorCoordinates`], a real/imaginary array pair with matching shapes,
//! - shape helpers ([`ShapeError`], [`ensure_same_shape`], [`atleast_1d`]),
//! - [`NdArrayData`], a JSON-friendly transport for n-dimensional arrays.
//!
//! A phasor coordinate `(g, s)` is the real and imaginary part of the
//! normalized Fourier transform of a fluorescence decay at one harmonic.
//!
//! # Example
//!
//! ```
//! use ndarray::arr1;
//! use phasor_core::PhasorCoordinates;
//!
//! let phasor = PhasorCoordinates::new(arr1(&[0.6, 0.5]), arr1(&[0.4, 0.3])).unwrap();
//! assert_eq!(phasor.shape(), &[2]);
//! assert_eq!(phasor.point(&[1]).unwrap().x, 0.5);
//! ```

/// JSON transport type for n-dimensional arrays.
mod array_data;
/// Scalar and linear algebra type aliases.
mod math;
/// Real/imaginary coordinate pairs.
mod phasor;
/// Shape validation and rank promotion.
mod shape;
/// Deterministic synthetic data generation helpers.
///
/// Used by workspace tests and the CLI smoke tests to build measured phasor
/// coordinates from known fractions.
pub mod synthetic;
/// Test utilities shared across the workspace test suites.
///
/// Public so integration tests in other crates can use it, but not intended
/// for production use.
pub mod test_utils;

pub use array_data::*;
pub use math::*;
pub use phasor::*;
pub use shape::*;
