//! Reports module for the deduction engine
//!
//! Reports combine an engine result with the detail behind it for display
//! and export.

pub mod deductible;

pub use deductible::{CategoryShare, DeductibleReport};
