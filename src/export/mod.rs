//! Structured output for engine results
//!
//! Results are written either as JSON, for the web layer and scripts, or as
//! YAML for people reading them. Terminal tables live in `display`.

pub mod json;
pub mod yaml;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use json::write_json;
pub use yaml::write_yaml;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML, human-readable
    Yaml,
    /// Terminal table
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }

    #[test]
    fn test_format_serde() {
        assert_eq!(serde_json::to_string(&OutputFormat::Table).unwrap(), "\"table\"");
        let format: OutputFormat = serde_json::from_str("\"yaml\"").unwrap();
        assert_eq!(format, OutputFormat::Yaml);
        assert_eq!(format.to_string(), "yaml");
    }
}
