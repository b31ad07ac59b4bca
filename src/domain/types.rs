//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory by the batch, sweep and check pipelines
//! - exported to JSON/CSV
//! - reloaded by downstream scripts

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::math::{angle_distance, normalize_deg};

/// One input row: two angles in degrees, in any range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnglePair {
    pub a: f64,
    pub b: f64,
}

impl AnglePair {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

/// A computed row: inputs, their normalized values and the shortest distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceRecord {
    pub a: f64,
    pub b: f64,
    pub a_norm: f64,
    pub b_norm: f64,
    pub distance: f64,
}

impl DistanceRecord {
    pub fn compute(a: f64, b: f64) -> Self {
        Self {
            a,
            b,
            a_norm: normalize_deg(a),
            b_norm: normalize_deg(b),
            distance: angle_distance(a, b),
        }
    }
}

impl From<AnglePair> for DistanceRecord {
    fn from(pair: AnglePair) -> Self {
        Self::compute(pair.a, pair.b)
    }
}

/// Output format for result tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned, human-readable table.
    Text,
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

/// A property every distance must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    /// `0 <= d(a, b) <= 180`.
    Range,
    /// `d(a, b) == d(b, a)`.
    Symmetry,
    /// `d(a + 360k, b) == d(a, b)`.
    Periodicity,
    /// `d(a, a) == 0`.
    Zero,
    /// `d(a, a + 180) == 180`.
    Antipodal,
}

impl Property {
    pub const ALL: [Property; 5] = [
        Property::Range,
        Property::Symmetry,
        Property::Periodicity,
        Property::Zero,
        Property::Antipodal,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Property::Range => "range",
            Property::Symmetry => "symmetry",
            Property::Periodicity => "periodicity",
            Property::Zero => "zero",
            Property::Antipodal => "antipodal",
        }
    }
}

/// A single failed property evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Index of the sample that failed (`None` for reference scenarios).
    pub sample: Option<usize>,
    pub property: Property,
    pub a: f64,
    pub b: f64,
    pub detail: String,
}

/// Outcome of a property check run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub samples: usize,
    pub seed: u64,
    pub tolerance: f64,
    /// Total evaluations: every property per sample, plus reference scenarios.
    pub evaluations: usize,
    pub reference_cases: usize,
    pub violations: Vec<Violation>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn count_for(&self, property: Property) -> usize {
        self.violations.iter().filter(|v| v.property == property).count()
    }
}

/// Sampling parameters for the property check.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleConfig {
    pub sample_count: usize,
    pub seed: u64,
    /// Uniform draws cover `[-span, span]` degrees.
    pub span: f64,
    /// Fraction of pairs placed near a multiple of 360.
    pub boundary_fraction: f64,
    /// Std dev (degrees) of boundary pairs around their multiple of 360.
    pub boundary_sigma: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            sample_count: 10_000,
            seed: 42,
            span: 1080.0,
            boundary_fraction: 0.25,
            boundary_sigma: 2.0,
        }
    }
}

/// Resolved configuration for a single CLI run (args + environment).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub format: OutputFormat,
    /// Decimals in text output.
    pub precision: usize,
    pub export: Option<PathBuf>,
    pub sample: SampleConfig,
    /// Base absolute tolerance, scaled by input magnitude.
    pub tolerance: f64,
    /// Maximum violations printed in the text report.
    pub max_report: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: 6,
            export: None,
            sample: SampleConfig::default(),
            tolerance: 1e-9,
            max_report: 20,
        }
    }
}
