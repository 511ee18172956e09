//! Per-component statistics and histograms of resolved fractions.
//!
//! Fractions outside `[0, 1]` are counted and reported, never corrected.

use crate::ComponentFractions;
use log::warn;
use ndarray::ArrayViewD;
use phasor_core::Real;
use serde::{Deserialize, Serialize};

/// Fixed-width histogram over a closed range.
///
/// Bins are half-open `[lo, hi)` except the last, which includes the upper
/// edge. Values outside the range and non-finite values are not counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub range: (Real, Real),
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn from_values<I>(values: I, bins: usize, range: (Real, Real)) -> Self
    where
        I: IntoIterator<Item = Real>,
    {
        let mut counts = vec![0usize; bins];
        let (lo, hi) = range;
        if bins == 0 || !(hi > lo) {
            return Self { range, counts };
        }

        let width = (hi - lo) / bins as Real;
        for v in values {
            if !v.is_finite() || v < lo || v > hi {
                continue;
            }
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
        Self { range, counts }
    }

    /// `bins + 1` bin edges from `lo` to `hi`.
    pub fn bin_edges(&self) -> Vec<Real> {
        let (lo, hi) = self.range;
        let bins = self.counts.len();
        (0..=bins)
            .map(|i| lo + (hi - lo) * i as Real / bins.max(1) as Real)
            .collect()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Summary of one component's fraction array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionSummary {
    /// Component index (0 is the first component).
    pub component: usize,
    /// Number of finite fractions.
    pub finite: usize,
    /// Number of NaN or infinite fractions (e.g. masked samples).
    pub non_finite: usize,
    pub mean: Option<Real>,
    pub min: Option<Real>,
    pub max: Option<Real>,
    /// Finite fractions below 0 or above 1.
    pub out_of_range: usize,
    pub histogram: Histogram,
}

impl FractionSummary {
    pub fn from_fractions(
        component: usize,
        fractions: ArrayViewD<'_, Real>,
        bins: usize,
        range: (Real, Real),
    ) -> Self {
        let mut finite = 0usize;
        let mut sum = 0.0;
        let mut min = Real::INFINITY;
        let mut max = Real::NEG_INFINITY;
        let mut out_of_range = 0usize;
        for &f in fractions.iter().filter(|f| f.is_finite()) {
            finite += 1;
            sum += f;
            min = min.min(f);
            max = max.max(f);
            if !(0.0..=1.0).contains(&f) {
                out_of_range += 1;
            }
        }

        let has_values = finite > 0;
        Self {
            component,
            finite,
            non_finite: fractions.len() - finite,
            mean: has_values.then(|| sum / finite as Real),
            min: has_values.then_some(min),
            max: has_values.then_some(max),
            out_of_range,
            histogram: Histogram::from_values(fractions.iter().copied(), bins, range),
        }
    }
}

/// Summarise every component, warning when fractions leave `[0, 1]`.
pub fn summarize_fractions(
    fractions: &ComponentFractions,
    bins: usize,
    range: (Real, Real),
) -> Vec<FractionSummary> {
    fractions
        .iter()
        .enumerate()
        .map(|(k, f)| {
            let summary = FractionSummary::from_fractions(k, f.view(), bins, range);
            if summary.out_of_range > 0 {
                warn!(
                    "component {k}: {} of {} fractions outside [0, 1]",
                    summary.out_of_range, summary.finite
                );
            }
            summary
        })
        .collect()
}
