//! Shared pipeline logic behind each subcommand.
//!
//! Each function returns computed data only; printing and exports stay in
//! `app`, so these are callable from tests and other front-ends.

use std::path::Path;

use tracing::info;

use crate::check::check_pairs;
use crate::data::generate_pairs;
use crate::domain::{CheckReport, DistanceRecord, RunConfig};
use crate::error::AppError;
use crate::math::checked_angle_distance;

/// Distance between two finite angles.
pub fn run_dist(a: f64, b: f64) -> Result<f64, AppError> {
    checked_angle_distance(a, b)
}

/// Read pairs from `input` (`-` for stdin) and compute their distances.
pub fn run_batch(input: &Path) -> Result<Vec<DistanceRecord>, AppError> {
    let pairs = crate::io::pairs::read_pairs(input)?;
    let records = crate::report::compute_records(&pairs)?;
    info!(records = records.len(), "batch complete");
    Ok(records)
}

/// Distances from `reference` to an evenly spaced grid.
pub fn run_sweep(
    reference: f64,
    start: f64,
    end: f64,
    steps: usize,
) -> Result<Vec<DistanceRecord>, AppError> {
    let records = crate::math::sweep(reference, start, end, steps)?;
    info!(reference, steps, "sweep complete");
    Ok(records)
}

/// Sample pairs per `config.sample` and evaluate every property.
pub fn run_check(config: &RunConfig) -> Result<CheckReport, AppError> {
    let pairs = generate_pairs(&config.sample)?;
    check_pairs(&pairs, config.tolerance, &config.sample)
}
