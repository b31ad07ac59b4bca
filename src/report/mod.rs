//! Reporting utilities: distance records, summaries and terminal formatting.

pub mod format;

pub use format::*;

use crate::domain::{AnglePair, DistanceRecord};
use crate::error::AppError;
use crate::math::checked_angle_distance;

/// Summary statistics over a set of distances.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Compute a distance record for each pair, rejecting non-finite inputs.
pub fn compute_records(pairs: &[AnglePair]) -> Result<Vec<DistanceRecord>, AppError> {
    let mut out = Vec::with_capacity(pairs.len());
    for (i, p) in pairs.iter().enumerate() {
        checked_angle_distance(p.a, p.b)
            .map_err(|e| AppError::input(format!("Pair {}: {}", i + 1, e.message())))?;
        out.push(DistanceRecord::from(*p));
    }
    Ok(out)
}

/// Summarize distances; `None` when there are no records.
pub fn summarize(records: &[DistanceRecord]) -> Option<DistanceSummary> {
    if records.is_empty() {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for r in records {
        min = min.min(r.distance);
        max = max.max(r.distance);
        sum += r.distance;
    }
    Some(DistanceSummary {
        count: records.len(),
        min,
        max,
        mean: sum / records.len() as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_records_basic() {
        let pairs = [AnglePair::new(10.0, 90.0), AnglePair::new(720.0, 270.0)];
        let records = compute_records(&pairs).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].distance, 80.0);
        assert_eq!(records[1].distance, 90.0);
        assert_eq!(records[1].a_norm, 0.0);
    }

    #[test]
    fn compute_records_names_bad_pair() {
        let pairs = [AnglePair::new(0.0, 0.0), AnglePair::new(f64::NAN, 0.0)];
        let err = compute_records(&pairs).unwrap_err();
        assert!(err.message().starts_with("Pair 2:"), "{}", err.message());
    }

    #[test]
    fn summarize_basic() {
        let pairs = [AnglePair::new(0.0, 90.0), AnglePair::new(1.0, 359.0)];
        let records = compute_records(&pairs).unwrap();
        let s = summarize(&records).unwrap();
        assert_eq!(s.count, 2);
        assert_eq!(s.min, 2.0);
        assert_eq!(s.max, 90.0);
        assert_eq!(s.mean, 46.0);
        assert!(summarize(&[]).is_none());
    }
}
