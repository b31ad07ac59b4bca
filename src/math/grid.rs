//! Evenly spaced angle grids.
//!
//! A sweep measures the distance from a fixed reference angle to every point of
//! a grid. Inputs are deliberately not normalized so a sweep can walk across
//! several turns and show the distance folding back at each multiple of 360.

use crate::domain::DistanceRecord;
use crate::error::AppError;

/// Largest grid a sweep will build.
pub const MAX_SWEEP_STEPS: usize = 1_000_000;

/// Generate `steps` evenly spaced points between `start` and `end` (inclusive).
pub fn linear_space(start: f64, end: f64, steps: usize) -> Result<Vec<f64>, AppError> {
    if !(start.is_finite() && end.is_finite() && end > start && (end - start).is_finite()) {
        return Err(AppError::input(format!(
            "Invalid sweep range: start={start}, end={end} \
             (must be finite, end>start and end-start finite)."
        )));
    }
    if !(2..=MAX_SWEEP_STEPS).contains(&steps) {
        return Err(AppError::input(format!(
            "Sweep steps must be within [2, {MAX_SWEEP_STEPS}], got {steps}."
        )));
    }

    let step = (end - start) / (steps as f64 - 1.0);
    let mut out = Vec::with_capacity(steps);
    for i in 0..steps - 1 {
        out.push(start + step * i as f64);
    }
    // Pin the last point so the endpoint is exact.
    out.push(end);
    Ok(out)
}

/// Distance from `reference` to each point of `linear_space(start, end, steps)`.
pub fn sweep(
    reference: f64,
    start: f64,
    end: f64,
    steps: usize,
) -> Result<Vec<DistanceRecord>, AppError> {
    crate::math::ensure_finite("reference", reference)?;
    let grid = linear_space(start, end, steps)?;
    Ok(grid
        .into_iter()
        .map(|a| DistanceRecord::compute(a, reference))
        .collect())
}
