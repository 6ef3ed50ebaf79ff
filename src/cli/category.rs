//! Category CLI commands
//!
//! Aggregation of analytics into category groups, the deductible spending
//! analysis, and single-amount capping.

use clap::Args;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

use super::emit;
use crate::config::Settings;
use crate::display::category::format_group_table;
use crate::error::{EngineError, EngineResult};
use crate::export::OutputFormat;
use crate::models::{CategoryGroup, CustomCategory};
use crate::reports::DeductibleReport;
use crate::services::CategoryAggregator;
use crate::storage::{load_analytics, read_input};

/// Arguments for `aggregate`
#[derive(Args, Debug)]
pub struct AggregateArgs {
    /// JSON file with the predefined category groups
    #[arg(short, long)]
    pub groups: PathBuf,

    /// Analytics rows (JSON, or CSV with a .csv extension)
    #[arg(short, long)]
    pub analytics: PathBuf,

    /// JSON file with the user's custom categories
    #[arg(short, long)]
    pub custom: Option<PathBuf>,
}

/// Arguments for `analyze`
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Analytics rows (JSON, or CSV with a .csv extension)
    #[arg(short, long)]
    pub analytics: PathBuf,

    /// Also write the per-category breakdown to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Arguments for `cap`
#[derive(Args, Debug)]
pub struct CapArgs {
    /// Category whose ceiling applies
    pub category: String,

    /// Amount to cap
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,
}

#[derive(Debug, Serialize)]
struct CapResult<'a> {
    category: &'a str,
    amount: f64,
    capped_amount: f64,
    ceiling: Option<f64>,
}

/// Handle the aggregate command
pub fn handle_aggregate_command(
    settings: &Settings,
    args: AggregateArgs,
    format: OutputFormat,
) -> EngineResult<()> {
    let groups: Vec<CategoryGroup> = read_input(&args.groups)?;
    let analytics = load_analytics(&args.analytics)?;
    let custom: Vec<CustomCategory> = match &args.custom {
        Some(path) => read_input(path)?,
        None => Vec::new(),
    };

    let aggregator = CategoryAggregator::new(&settings.thresholds)
        .with_custom_group_name(&settings.custom_group_name);
    let result = aggregator.aggregate(&groups, &analytics, &custom);

    info!(groups = result.len(), rows = analytics.len(), "aggregated categories");
    emit(format, &result, || format_group_table(&result))
}

/// Handle the analyze command
pub fn handle_analyze_command(args: AnalyzeArgs, format: OutputFormat) -> EngineResult<()> {
    let analytics = load_analytics(&args.analytics)?;
    let report = DeductibleReport::generate(&analytics);

    if let Some(path) = &args.csv {
        let file = File::create(path).map_err(|e| {
            EngineError::Export(format!("Failed to create {}: {}", path.display(), e))
        })?;
        report.export_csv(BufWriter::new(file))?;
        info!(path = %path.display(), "wrote category breakdown");
    }

    match format {
        OutputFormat::Table => emit(format, &report, || report.format_terminal()),
        _ => emit(format, &report.summary, String::new),
    }
}

/// Handle the cap command
pub fn handle_cap_command(
    settings: &Settings,
    args: CapArgs,
    format: OutputFormat,
) -> EngineResult<()> {
    if !args.amount.is_finite() {
        return Err(EngineError::Validation(format!(
            "Amount must be a finite number, got {}",
            args.amount
        )));
    }

    let result = CapResult {
        category: &args.category,
        amount: args.amount,
        capped_amount: settings.thresholds.cap(&args.category, args.amount),
        ceiling: settings.thresholds.ceiling(&args.category),
    };

    emit(format, &result, || match result.ceiling {
        Some(ceiling) => format!(
            "{}: {:.2} (ceiling {:.2})",
            result.category, result.capped_amount, ceiling
        ),
        None => format!("{}: {:.2} (no ceiling)", result.category, result.capped_amount),
    })
}
