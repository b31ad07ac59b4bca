//! Angle normalization and shortest angular distance, in degrees.
//!
//! The distance between two angles is measured around the circle, so `1°` and
//! `359°` are `2°` apart, not `358°`.
//!
//! Numerical notes:
//! - Rust's `%` is a truncating remainder (`-10.0 % 360.0 == -10.0`). We use
//!   `rem_euclid`, which yields the mathematical modulo for negative inputs.
//! - `rem_euclid` can round up to exactly `360.0` for tiny negative inputs
//!   (`-1e-20`); that result is folded back to `0.0`.

use crate::error::AppError;

/// One full turn in degrees.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Half a turn; the largest possible shortest distance.
pub const HALF_TURN_DEG: f64 = 180.0;

/// Reduce an angle into `[0, 360)`.
///
/// Non-finite inputs return NaN.
pub fn normalize_deg(x: f64) -> f64 {
    let r = x.rem_euclid(FULL_TURN_DEG);
    if r >= FULL_TURN_DEG { 0.0 } else { r }
}

/// Shortest angular distance between `a` and `b`, in `[0, 180]`.
///
/// Total over `f64`: NaN or infinite inputs produce NaN. Use
/// [`checked_angle_distance`] to reject them instead.
///
/// ```
/// use angdist::math::angle_distance;
///
/// assert_eq!(angle_distance(1.0, 359.0), 2.0);
/// assert_eq!(angle_distance(720.0, 270.0), 90.0);
/// ```
pub fn angle_distance(a: f64, b: f64) -> f64 {
    let d = (normalize_deg(a) - normalize_deg(b)).abs();
    (FULL_TURN_DEG - d).min(d)
}

/// Like [`angle_distance`], but errors on NaN or infinite inputs.
pub fn checked_angle_distance(a: f64, b: f64) -> Result<f64, AppError> {
    ensure_finite("a", a)?;
    ensure_finite("b", b)?;
    Ok(angle_distance(a, b))
}

/// Reject a non-finite angle, naming the argument in the error.
pub fn ensure_finite(name: &str, value: f64) -> Result<f64, AppError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::input(format!(
            "Angle '{name}' must be finite, got {value}."
        )))
    }
}
