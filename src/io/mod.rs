//! Input/output helpers.
//!
//! - angle-pair file ingest (`pairs`)
//! - CSV/JSON rendering and exports (`export`)

pub mod export;
pub mod pairs;

pub use export::*;
pub use pairs::*;
