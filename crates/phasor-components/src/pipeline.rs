//! JSON-driven fraction resolution: input, configuration and report types.

use crate::{
    summarize_fractions, ComponentLayout, FractionSummary, FractionsOptions, FractionsSolver,
};
use anyhow::{ensure, Context, Result};
use log::info;
use phasor_core::{NdArrayData, Real};
use serde::{Deserialize, Serialize};

/// Measured and reference phasor coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionsInput {
    pub real: NdArrayData,
    pub imag: NdArrayData,
    pub real_components: NdArrayData,
    pub imag_components: NdArrayData,
}

/// Solver axes and summary settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractionsConfig {
    #[serde(flatten)]
    pub options: FractionsOptions,
    /// Number of histogram bins per component.
    pub histogram_bins: usize,
    /// Histogram range, `(lo, hi)`.
    pub histogram_range: (Real, Real),
}

impl Default for FractionsConfig {
    fn default() -> Self {
        Self {
            options: FractionsOptions::default(),
            histogram_bins: 100,
            histogram_range: (0.0, 1.0),
        }
    }
}

/// Resolved fractions with per-component summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionsReport {
    pub layout: ComponentLayout,
    /// Shape of every fraction array.
    pub sample_shape: Vec<usize>,
    /// One array per component, in component order.
    pub fractions: Vec<NdArrayData>,
    pub summaries: Vec<FractionSummary>,
}

/// Resolve fractions for `input` and summarise them.
pub fn run_fractions(input: &FractionsInput, config: &FractionsConfig) -> Result<FractionsReport> {
    let (lo, hi) = config.histogram_range;
    ensure!(config.histogram_bins > 0, "histogram_bins must be positive");
    ensure!(hi > lo, "histogram_range must satisfy lo < hi, got ({lo}, {hi})");

    let real = input.real.to_array().context("invalid `real` array")?;
    let imag = input.imag.to_array().context("invalid `imag` array")?;
    let real_components = input
        .real_components
        .to_array()
        .context("invalid `real_components` array")?;
    let imag_components = input
        .imag_components
        .to_array()
        .context("invalid `imag_components` array")?;

    let (layout, fractions) = FractionsSolver::solve_with_layout(
        real.view(),
        imag.view(),
        real_components.view(),
        imag_components.view(),
        &config.options,
    )
    .context("failed to resolve component fractions")?;
    info!(
        "resolved {} component fractions over {:?} samples",
        fractions.len(),
        fractions.shape()
    );

    let summaries = summarize_fractions(&fractions, config.histogram_bins, config.histogram_range);
    Ok(FractionsReport {
        layout,
        sample_shape: fractions.shape().to_vec(),
        fractions: fractions.iter().map(NdArrayData::from_array).collect(),
        summaries,
    })
}
