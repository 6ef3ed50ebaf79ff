//! Configuration module for the deduction engine
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Settings persistence (ceilings, custom group name, tie-break)

pub mod paths;
pub mod settings;

pub use paths::EnginePaths;
pub use settings::Settings;
