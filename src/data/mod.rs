//! Input data for property checks: seeded random angle pairs.

pub mod sample;

pub use sample::*;
