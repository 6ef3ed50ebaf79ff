//! Questionnaire CLI commands
//!
//! Merging a questionnaire submission into stored answers, and mapping
//! answers onto accordion sections.

use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::emit;
use crate::config::Settings;
use crate::display::{format_questionnaire_tree, format_section_list};
use crate::error::EngineResult;
use crate::export::OutputFormat;
use crate::models::{AccordionSection, Questionnaire};
use crate::services::{questionnaire, SectionMatcher, TieBreak};
use crate::storage::{read_input, read_input_or_default, replace_json};

/// Arguments for `merge`
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Stored questionnaire set; a missing file counts as empty
    #[arg(short, long)]
    pub existing: PathBuf,

    /// Newly submitted questionnaire set
    #[arg(short, long)]
    pub incoming: PathBuf,

    /// Write the merged set here instead of stdout (may equal --existing)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `sections`
#[derive(Args, Debug)]
pub struct SectionsArgs {
    /// JSON file with the answer set
    #[arg(short, long)]
    pub answers: PathBuf,

    /// JSON file with the accordion section configuration
    #[arg(short, long)]
    pub sections: PathBuf,

    /// Override the configured tie-break
    #[arg(long, value_enum)]
    pub tie_break: Option<TieBreak>,
}

/// Handle the merge command
pub fn handle_merge_command(args: MergeArgs, format: OutputFormat) -> EngineResult<()> {
    let existing: Vec<Questionnaire> = read_input_or_default(&args.existing)?;
    let incoming: Vec<Questionnaire> = read_input(&args.incoming)?;

    let merged = questionnaire::merge(&existing, &incoming);

    match &args.output {
        Some(path) => {
            replace_json(path, &merged)?;
            info!(path = %path.display(), questions = merged.len(), "wrote merged questionnaire");
            Ok(())
        }
        None => emit(format, &merged, || format_questionnaire_tree(&merged)),
    }
}

/// Handle the sections command
pub fn handle_sections_command(
    settings: &Settings,
    args: SectionsArgs,
    format: OutputFormat,
) -> EngineResult<()> {
    let answers: serde_json::Value = read_input(&args.answers)?;
    let sections: Vec<AccordionSection> = read_input(&args.sections)?;

    let matcher = match args.tie_break {
        Some(tie_break) => SectionMatcher::new(tie_break),
        None => settings.section_matcher(),
    };
    let matched = matcher.match_value(&answers, &sections);

    emit(format, &matched, || format_section_list(&matched))
}
