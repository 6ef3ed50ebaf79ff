//! User settings for the deduction engine
//!
//! Holds the deduction ceilings, the name of the custom category group, the
//! section tie-break, and output preferences.

use serde::{Deserialize, Serialize};

use super::paths::EnginePaths;
use crate::error::EngineError;
use crate::export::OutputFormat;
use crate::services::{SectionMatcher, ThresholdCapper, TieBreak, DEFAULT_CUSTOM_GROUP_NAME};

/// User settings for the deduction engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Deduction ceilings by category name
    #[serde(default)]
    pub thresholds: ThresholdCapper,

    /// Name of the group that custom categories replace
    #[serde(default = "default_custom_group_name")]
    pub custom_group_name: String,

    /// Which section wins when several titles contain an answer
    #[serde(default)]
    pub section_tie_break: TieBreak,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format used when none is given on the command line
    #[serde(default)]
    pub default_format: OutputFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_custom_group_name() -> String {
    DEFAULT_CUSTOM_GROUP_NAME.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            thresholds: ThresholdCapper::default(),
            custom_group_name: default_custom_group_name(),
            section_tie_break: TieBreak::default(),
            log_level: default_log_level(),
            default_format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Section matcher configured with the settings' tie-break
    pub fn section_matcher(&self) -> SectionMatcher {
        SectionMatcher::new(self.section_tie_break)
    }

    /// Check the settings for values the engine cannot use
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.custom_group_name.trim().is_empty() {
            return Err(EngineError::Validation(
                "Custom group name cannot be empty".into(),
            ));
        }

        for (category, ceiling) in self.thresholds.iter() {
            if !ceiling.is_finite() || ceiling < 0.0 {
                return Err(EngineError::Validation(format!(
                    "Ceiling for '{}' must be a non-negative number, got {}",
                    category, ceiling
                )));
            }
        }

        Ok(())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &EnginePaths) -> Result<Self, EngineError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| EngineError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| EngineError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &EnginePaths) -> Result<(), EngineError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| EngineError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| EngineError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
