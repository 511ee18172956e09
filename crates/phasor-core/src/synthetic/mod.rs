//! Deterministic synthetic phasor data.
//!
//! This module provides small building blocks for constructing measured
//! phasor coordinates with known ground-truth fractions:
//! - forward mixing of component coordinates ([`mixture`]),
//! - deterministic pseudo-random jitter ([`noise`]).
//!
//! # Example
//!
//! ```
//! use ndarray::arr1;
//! use phasor_core::synthetic::mixture::mix_components;
//!
//! let fractions = [arr1(&[0.25, 1.0]).into_dyn(), arr1(&[0.75, 0.0]).into_dyn()];
//! let phasor = mix_components(&fractions, &[0.2, 0.9], &[0.4, 0.3]).unwrap();
//! assert!((phasor.real()[[0]] - 0.725).abs() < 1e-12);
//! assert!((phasor.imag()[[1]] - 0.4).abs() < 1e-12);
//! ```

pub mod mixture;
pub mod noise;
