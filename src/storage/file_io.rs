//! JSON documents read by the engine commands
//!
//! Inputs are read whole and typed by the caller. The merged questionnaire
//! is the only document written back, and it may replace its own input.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::export::write_json;

/// Open an input file, reporting a missing file as `NotFound`
pub(crate) fn open_input(path: &Path) -> EngineResult<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => EngineError::input_not_found(path.display().to_string()),
        _ => EngineError::Io(format!("{}: {}", path.display(), e)),
    })
}

/// Read a required JSON input document
pub fn read_input<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let reader = BufReader::new(open_input(path)?);
    serde_json::from_reader(reader)
        .map_err(|e| EngineError::Json(format!("{}: {}", path.display(), e)))
}

/// Read an optional JSON input document; a missing file reads as empty
pub fn read_input_or_default<T: DeserializeOwned + Default>(path: &Path) -> EngineResult<T> {
    match read_input(path) {
        Err(e) if e.is_not_found() => {
            debug!(path = %path.display(), "input absent; starting empty");
            Ok(T::default())
        }
        other => other,
    }
}

/// Write `value` as JSON over `path`
///
/// The document is staged beside the target and renamed into place, so the
/// target holds either the old or the new content.
pub fn replace_json<T: Serialize>(path: &Path, value: &T) -> EngineResult<()> {
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let staging = path.with_extension("json.tmp");
    let result = stage(&staging, value).and_then(|()| {
        fs::rename(&staging, path).map_err(|e| {
            EngineError::Storage(format!("Failed to replace {}: {}", path.display(), e))
        })
    });

    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result
}

fn stage<T: Serialize>(path: &Path, value: &T) -> EngineResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(&mut writer, value)?;

    let file = writer
        .into_inner()
        .map_err(|e| EngineError::Io(e.error().to_string()))?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, Questionnaire};
    use tempfile::TempDir;

    fn stored() -> Vec<Questionnaire> {
        vec![Questionnaire {
            question: "Loans".into(),
            answers: vec![Answer::from("Student"), Answer::keyed("Have a loan", "Car")],
        }]
    }

    #[test]
    fn test_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("answers.json");

        let err = read_input::<Vec<Questionnaire>>(&path).unwrap_err();
        assert!(err.is_not_found());

        let empty: Vec<Questionnaire> = read_input_or_default(&path).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_malformed_input_is_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("answers.json");
        fs::write(&path, "[{\"question\": ").unwrap();

        let err = read_input::<Vec<Questionnaire>>(&path).unwrap_err();
        assert!(matches!(err, EngineError::Json(ref msg) if msg.contains("answers.json")));

        // only absence falls back to empty
        assert!(read_input_or_default::<Vec<Questionnaire>>(&path).is_err());
    }

    #[test]
    fn test_replace_own_input() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stored.json");
        fs::write(&path, "[]").unwrap();

        replace_json(&path, &stored()).unwrap();

        let loaded: Vec<Questionnaire> = read_input(&path).unwrap();
        assert_eq!(loaded, stored());
        assert!(!temp_dir.path().join("stored.json.tmp").exists());
    }

    #[test]
    fn test_replace_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users").join("42").join("stored.json");

        replace_json(&path, &stored()).unwrap();
        assert!(fs::read_to_string(&path).unwrap().ends_with("]\n"));
    }
}
