//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod filter;
pub mod questionnaire;

pub use category::{
    handle_aggregate_command, handle_analyze_command, handle_cap_command, AggregateArgs,
    AnalyzeArgs, CapArgs,
};
pub use filter::{handle_filter_command, FilterArgs};
pub use questionnaire::{handle_merge_command, handle_sections_command, MergeArgs, SectionsArgs};

use serde::Serialize;
use std::io::{self, Write};

use crate::error::EngineResult;
use crate::export::{write_json, write_yaml, OutputFormat};

/// Write a result to stdout in the requested format
///
/// `table` is only called for the table format.
pub(crate) fn emit<T, F>(format: OutputFormat, value: &T, table: F) -> EngineResult<()>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Json => write_json(&mut out, value),
        OutputFormat::Yaml => write_yaml(&mut out, value),
        OutputFormat::Table => {
            writeln!(out, "{}", table().trim_end())?;
            Ok(())
        }
    }
}
