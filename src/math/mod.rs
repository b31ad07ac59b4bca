//! Mathematical utilities: angle normalization/distance and sweep grids.

pub mod angle;
pub mod grid;

pub use angle::*;
pub use grid::*;
