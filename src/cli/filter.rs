//! Filter CLI command

use clap::Args;

use super::emit;
use crate::display::format_filter_query;
use crate::error::EngineResult;
use crate::export::OutputFormat;
use crate::services::filter;

/// Arguments for `filter`
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Filter expression, e.g. "category=travel,meals&status=open"
    pub expression: Option<String>,
}

/// Handle the filter command
pub fn handle_filter_command(args: FilterArgs, format: OutputFormat) -> EngineResult<()> {
    let query = filter::parse(args.expression.as_deref());
    emit(format, &query, || format_filter_query(&query))
}
