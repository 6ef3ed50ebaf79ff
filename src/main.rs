use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use deduction_engine::cli::{
    handle_aggregate_command, handle_analyze_command, handle_cap_command, handle_filter_command,
    handle_merge_command, handle_sections_command, AggregateArgs, AnalyzeArgs, CapArgs,
    FilterArgs, MergeArgs, SectionsArgs,
};
use deduction_engine::config::{EnginePaths, Settings};
use deduction_engine::display::format_threshold_table;
use deduction_engine::export::OutputFormat;
use deduction_engine::EngineError;

#[derive(Parser)]
#[command(
    name = "deduction",
    author = "Kaylee Beyene",
    version,
    about = "Expense categorization and questionnaire reconciliation engine",
    long_about = "Aggregates spending analytics into deduction category groups with \
                  per-category ceilings, summarizes deductible spending, merges \
                  questionnaire submissions, and builds filter queries."
)]
struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill category groups from analytics, applying ceilings
    Aggregate(AggregateArgs),

    /// Top category and residual share of total spending
    Analyze(AnalyzeArgs),

    /// Merge a questionnaire submission into stored answers
    Merge(MergeArgs),

    /// Map questionnaire answers onto accordion sections
    Sections(SectionsArgs),

    /// Build a filter query from a query-string expression
    Filter(FilterArgs),

    /// Cap a single amount at its category's ceiling
    Cap(CapArgs),

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

impl Commands {
    /// Whether the command reads ceilings, the tie-break or the settings file
    fn needs_settings(&self) -> bool {
        !matches!(
            self,
            Commands::Analyze(_) | Commands::Merge(_) | Commands::Filter(_)
        )
    }
}

fn load_settings() -> Result<(EnginePaths, Settings), EngineError> {
    let paths = EnginePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    Ok((paths, settings))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("deduction - expense categorization and questionnaire reconciliation");
        println!();
        println!("Run 'deduction --help' for usage information.");
        return Ok(());
    };

    // Commands that only transform their inputs run on defaults when
    // settings cannot be loaded
    let (paths, settings, load_error) = match load_settings() {
        Ok((paths, settings)) => (Some(paths), settings, None),
        Err(e) if !command.needs_settings() => (None, Settings::default(), Some(e)),
        Err(e) => return Err(e.into()),
    };

    init_tracing(&settings.log_level);
    if let Some(e) = load_error {
        warn!(error = %e, "settings unavailable; using defaults");
    }

    let format = cli.format.unwrap_or(settings.default_format);

    match command {
        Commands::Aggregate(args) => handle_aggregate_command(&settings, args, format)?,
        Commands::Analyze(args) => handle_analyze_command(args, format)?,
        Commands::Merge(args) => handle_merge_command(args, format)?,
        Commands::Sections(args) => handle_sections_command(&settings, args, format)?,
        Commands::Filter(args) => handle_filter_command(args, format)?,
        Commands::Cap(args) => handle_cap_command(&settings, args, format)?,
        Commands::Init => {
            let paths = paths.context("settings paths were not resolved")?;
            if paths.is_initialized() {
                println!("Settings already exist at: {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                println!("Wrote default settings to: {}", paths.settings_file().display());
            }
        }
        Commands::Config => {
            let paths = paths.context("settings paths were not resolved")?;
            println!("Deduction Engine Configuration");
            println!("==============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Custom group name: {}", settings.custom_group_name);
            println!("  Section tie-break: {:?}", settings.section_tie_break);
            println!("  Default format:    {}", settings.default_format);
            println!("  Log level:         {}", settings.log_level);
            println!();
            println!("{}", format_threshold_table(&settings.thresholds));
        }
    }

    Ok(())
}
