//! Property evaluation over sampled angle pairs.
//!
//! Symmetry, range and the zero case are checked exactly. Periodicity and the
//! antipodal case shift an input by `360k` or `180`, which rounds away low bits
//! of large `f64` values, so they are compared within a tolerance scaled by
//! input magnitude.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::domain::{AnglePair, CheckReport, Property, SampleConfig, Violation};
use crate::error::AppError;
use crate::math::{FULL_TURN_DEG, HALF_TURN_DEG, angle_distance};

/// Tolerance used for the fixed reference scenarios.
const REFERENCE_TOL: f64 = 1e-12;

/// Fixed scenarios `(a, b, expected, property exercised)` checked on every run.
///
/// The first four are the worked examples; the rest pin down earlier bugs
/// (truncating remainder on negatives, the exact 360 seam, tiny negatives).
pub const REFERENCE_CASES: [(f64, f64, f64, Property); 9] = [
    (10.0, 90.0, 80.0, Property::Range),
    (0.0, 270.0, 90.0, Property::Range),
    (1.0, 359.0, 2.0, Property::Range),
    (720.0, 270.0, 90.0, Property::Periodicity),
    (-10.0, 10.0, 20.0, Property::Periodicity),
    (-90.0, 90.0, 180.0, Property::Antipodal),
    (0.0, 360.0, 0.0, Property::Zero),
    (-1e-20, 0.0, 0.0, Property::Zero),
    (359.5, -0.5, 0.0, Property::Zero),
];

/// Evaluate every property on every pair, plus the reference scenarios.
pub fn check_pairs(
    pairs: &[AnglePair],
    tolerance: f64,
    config: &SampleConfig,
) -> Result<CheckReport, AppError> {
    if !(tolerance.is_finite() && tolerance >= 0.0) {
        return Err(AppError::input(format!(
            "Invalid tolerance: {tolerance} (must be finite and >= 0)."
        )));
    }

    // Evaluate each pair independently (parallel).
    let mut violations: Vec<Violation> = pairs
        .par_iter()
        .enumerate()
        .flat_map_iter(|(idx, pair)| evaluate_pair(idx, *pair, tolerance))
        .collect();

    // Deterministic order regardless of scheduling.
    violations.sort_by(|x, y| x.sample.cmp(&y.sample).then(x.property.cmp(&y.property)));

    let reference = check_reference_cases();
    let n_reference = REFERENCE_CASES.len();
    debug!(
        sample_violations = violations.len(),
        reference_violations = reference.len(),
        "property evaluation finished"
    );

    // Reference failures are listed first.
    let mut all = reference;
    all.extend(violations);

    let report = CheckReport {
        samples: pairs.len(),
        seed: config.seed,
        tolerance,
        evaluations: pairs.len() * Property::ALL.len() + n_reference,
        reference_cases: n_reference,
        violations: all,
    };
    info!(
        samples = report.samples,
        violations = report.violations.len(),
        "property check complete"
    );
    Ok(report)
}

/// Check the fixed scenarios; returns any that fail.
pub fn check_reference_cases() -> Vec<Violation> {
    REFERENCE_CASES
        .iter()
        .filter_map(|&(a, b, expected, property)| {
            let d = angle_distance(a, b);
            if (d - expected).abs() <= REFERENCE_TOL {
                return None;
            }
            Some(Violation {
                sample: None,
                property,
                a,
                b,
                detail: format!("expected {expected}, got {d}"),
            })
        })
        .collect()
}

/// Evaluate all properties for one sample.
pub fn evaluate_pair(idx: usize, pair: AnglePair, tolerance: f64) -> Vec<Violation> {
    let AnglePair { a, b } = pair;
    let tol = tolerance * 1.0_f64.max(a.abs()).max(b.abs());
    let mut out = Vec::new();
    let mut fail = |property: Property, detail: String| {
        out.push(Violation {
            sample: Some(idx),
            property,
            a,
            b,
            detail,
        });
    };

    let d = angle_distance(a, b);
    if !(0.0..=HALF_TURN_DEG).contains(&d) {
        fail(Property::Range, format!("d={d} outside [0, 180]"));
    }

    let d_rev = angle_distance(b, a);
    if d != d_rev {
        fail(Property::Symmetry, format!("d(a,b)={d} but d(b,a)={d_rev}"));
    }

    let k = turns_for(idx);
    let shifted = a + FULL_TURN_DEG * k as f64;
    let d_shift = angle_distance(shifted, b);
    let shift_tol = tol.max(tolerance * shifted.abs());
    if !((d_shift - d).abs() <= shift_tol) {
        fail(
            Property::Periodicity,
            format!("k={k}: d(a+360k,b)={d_shift} but d(a,b)={d}"),
        );
    }

    let d_self = angle_distance(a, a);
    if d_self != 0.0 {
        fail(Property::Zero, format!("d(a,a)={d_self}"));
    }

    let d_anti = angle_distance(a, a + HALF_TURN_DEG);
    if !((d_anti - HALF_TURN_DEG).abs() <= tol.max(tolerance * (a + HALF_TURN_DEG).abs())) {
        fail(Property::Antipodal, format!("d(a,a+180)={d_anti}"));
    }

    out
}

/// Turn count `k` in `[-3, 3]` used for the periodicity shift of sample `idx`.
fn turns_for(idx: usize) -> i64 {
    (idx % 7) as i64 - 3
}
