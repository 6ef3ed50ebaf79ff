//! YAML output

use serde::Serialize;
use std::io::Write;

use crate::error::{EngineError, EngineResult};

/// Write a value as a YAML document
pub fn write_yaml<W: Write, T: Serialize>(writer: &mut W, value: &T) -> EngineResult<()> {
    serde_yaml::to_writer(writer, value)
        .map_err(|e| EngineError::Export(format!("Failed to write YAML: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Questionnaire;

    #[test]
    fn test_write_yaml() {
        let entries = vec![Questionnaire::new("Employment", vec!["Employee"])];
        let mut buffer = Vec::new();
        write_yaml(&mut buffer, &entries).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("question: Employment"));
        assert!(output.contains("- Employee"));

        let parsed: Vec<Questionnaire> = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed, entries);
    }
}
