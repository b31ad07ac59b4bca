//! Randomized property checking for `angle_distance`.
//!
//! Responsibilities:
//!
//! - evaluate the distance properties over seeded samples (parallel)
//! - re-run the fixed reference scenarios on every check

pub mod properties;

pub use properties::*;
