//! Deterministic jitter for synthetic phasor coordinates.
//!
//! The sequence is derived from a SplitMix64 hash of `(seed, sample, harmonic)`
//! and does not use a thread RNG, so datasets are stable across platforms.

use crate::{PhasorCoordinates, Real, Vec2};
use ndarray::Zip;

/// Deterministic uniform jitter in `[-max_abs, +max_abs]` per coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UniformPhasorNoise {
    /// Base seed controlling the pseudo-random sequence.
    pub seed: u64,
    /// Maximum absolute jitter applied to each of `real` and `imag`.
    pub max_abs: Real,
}

impl UniformPhasorNoise {
    /// Jitter vector for a given `(sample_idx, stream)` key.
    #[inline]
    pub fn sample(&self, sample_idx: usize, stream: usize) -> Vec2 {
        let max_abs = self.max_abs.abs();
        if max_abs == 0.0 {
            return Vec2::zeros();
        }

        let key = mix_key(self.seed, sample_idx, stream);
        let u = unit_interval(splitmix64(key));
        let v = unit_interval(splitmix64(key ^ 0x94D0_49BB_1331_11EB));
        Vec2::new((u - 0.5) * 2.0 * max_abs, (v - 0.5) * 2.0 * max_abs)
    }

    /// Return a jittered copy of `phasor`; samples are keyed in row-major order.
    pub fn apply(&self, phasor: &PhasorCoordinates, stream: usize) -> PhasorCoordinates {
        let (mut real, mut imag) = phasor.clone().into_parts();
        let mut idx = 0usize;
        Zip::from(&mut real).and(&mut imag).for_each(|r, i| {
            let d = self.sample(idx, stream);
            *r += d.x;
            *i += d.y;
            idx += 1;
        });
        PhasorCoordinates::from_matching(real, imag)
    }
}

#[inline]
fn mix_key(seed: u64, sample_idx: usize, stream: usize) -> u64 {
    seed ^ (sample_idx as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (stream as u64).wrapping_mul(0xBF58_476D_1CE4_E5B9)
}

#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Top 53 bits mapped to `[0, 1)`.
#[inline]
fn unit_interval(x: u64) -> Real {
    ((x >> 11) as Real) * (1.0 / ((1u64 << 53) as Real))
}
