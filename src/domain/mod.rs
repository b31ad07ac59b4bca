//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - input/output rows (`AnglePair`, `DistanceRecord`)
//! - property-check results (`Property`, `Violation`, `CheckReport`)
//! - resolved run configuration (`RunConfig`, `SampleConfig`)

pub mod types;

pub use types::*;
