//! `angdist` library crate.
//!
//! The binary (`angdist`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - `math::angle_distance` is reusable from other programs
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod check;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod report;
