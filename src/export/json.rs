//! JSON output

use serde::Serialize;
use std::io::Write;

use crate::error::{EngineError, EngineResult};

/// Write a value as pretty-printed JSON followed by a newline
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> EngineResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)
        .map_err(|e| EngineError::Export(format!("Failed to write JSON: {}", e)))?;
    writeln!(writer).map_err(|e| EngineError::Export(e.to_string()))?;
    Ok(())
}
