//! Path management for the deduction engine
//!
//! Only settings live on disk; inputs and outputs are passed explicitly.
//!
//! ## Path Resolution Order
//!
//! 1. `DEDUCTION_ENGINE_DIR` environment variable (if set)
//! 2. The platform configuration directory, as reported by `directories`

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::EngineError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "DEDUCTION_ENGINE_DIR";

const APP_NAME: &str = "deduction-engine";

/// Manages all paths used by the deduction engine
#[derive(Debug, Clone)]
pub struct EnginePaths {
    base_dir: PathBuf,
}

impl EnginePaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory can be
    /// determined.
    pub fn new() -> Result<Self, EngineError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create EnginePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), EngineError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EngineError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check whether settings have been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// The platform configuration directory for the engine
///
/// `$XDG_CONFIG_HOME/deduction-engine` (or `~/.config/deduction-engine`) on
/// Linux, `~/Library/Application Support/deduction-engine` on macOS and
/// `%APPDATA%\deduction-engine\config` on Windows.
fn resolve_default_path() -> Result<PathBuf, EngineError> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| EngineError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EnginePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DIR_ENV_VAR, custom_path);
        let paths = EnginePaths::new().unwrap();
        env::remove_var(DIR_ENV_VAR);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_default_path_is_app_config_dir() {
        if let Ok(path) = resolve_default_path() {
            assert!(path
                .components()
                .any(|c| c.as_os_str() == APP_NAME));
        }
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EnginePaths::with_base_dir(temp_dir.path().join("nested").join("engine"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
