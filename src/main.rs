mod cache;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod trends;
mod views;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use crate::cache::{DEFAULT_TTL, ResultCache, dataset_key};
use crate::input::load_dataset;
use crate::model::record::RatedRecord;
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::run_pipeline;
use crate::report::{ReportInput, ReportMode, summarize, write_reports};
use crate::trends::{box_counts_by_quarter, headcount_by_quarter};
use crate::views::{StructuralFilter, filter_by_name, latest_quarter, snapshot};

#[derive(Debug, Parser)]
#[command(name = "ninebox", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify an evaluation export and write reports.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Evaluation export (.csv/.tsv, optionally .gz).
    #[arg(long)]
    input: PathBuf,

    /// Output directory for the report files.
    #[arg(long)]
    out: PathBuf,

    /// Restrict the working set to these business units (repeatable).
    #[arg(long = "business-unit")]
    business_units: Vec<String>,

    /// Restrict the working set to these departments (repeatable).
    #[arg(long = "department")]
    departments: Vec<String>,

    /// Restrict the working set to these sub-departments (repeatable).
    #[arg(long = "sub-department")]
    sub_departments: Vec<String>,

    /// Restrict the working set to these managers (repeatable).
    #[arg(long = "manager")]
    managers: Vec<String>,

    /// Quarters for the snapshot outputs (repeatable). Defaults to the
    /// latest quarter present; trend outputs always cover every quarter.
    #[arg(long = "quarter")]
    quarters: Vec<String>,

    /// Case-insensitive employee-name filter on the snapshot rows.
    #[arg(long)]
    search: Option<String>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Full)]
    format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    /// Summary, per-row table and CSV export.
    Full,
    /// Summary and trends only.
    Summary,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let Command::Run(args) = cli.command;
    if let Err(err) = run(&args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &RunArgs) -> Result<(), String> {
    let bundle = load_dataset(&args.input).map_err(|e| e.to_string())?;

    let filter = StructuralFilter {
        business_units: args.business_units.clone(),
        departments: args.departments.clone(),
        sub_departments: args.sub_departments.clone(),
        managers: args.managers.clone(),
    };
    let source_path = bundle.source_path.display().to_string();
    let n_rows_raw = bundle.n_rows_raw;
    let working = filter.apply(bundle.records);
    if working.is_empty() {
        warn!("no records in scope after structural filters; reports will be empty");
    }
    info!(
        "{} of {} source rows in scope after structural filters",
        working.len(),
        n_rows_raw
    );

    let profile = ScoringProfile::default_v1();
    let mut cache = ResultCache::new(DEFAULT_TTL);
    let key = dataset_key(&working);
    let rows = cache.get_or_compute(key, || run_pipeline(&working, &profile));

    let quarters = resolve_quarters(&args.quarters, rows);
    let mut snapshot_rows = snapshot(rows, &quarters);
    if let Some(term) = &args.search {
        snapshot_rows = filter_by_name(snapshot_rows, term);
    }

    info!(
        "snapshot: {} rows, quarters: {}",
        snapshot_rows.len(),
        if quarters.is_empty() {
            "all".to_string()
        } else {
            quarters.join(", ")
        }
    );

    let summary = summarize(&snapshot_rows, rows, &profile);
    let report_input = ReportInput {
        tool_name: "ninebox".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        source_path,
        quarters,
        snapshot: snapshot_rows,
        all_rows: rows,
        summary,
        headcount_trend: headcount_by_quarter(rows),
        box_trend: box_counts_by_quarter(rows),
    };

    let mode = match args.format {
        ReportFormat::Full => ReportMode::Full,
        ReportFormat::Summary => ReportMode::Summary,
    };
    write_reports(&report_input, &args.out, mode).map_err(|e| e.to_string())?;

    Ok(())
}

/// No explicit quarter selection means the latest quarter in scope, the
/// usual calibration view. An empty working set keeps the list empty.
fn resolve_quarters(selected: &[String], rows: &[RatedRecord]) -> Vec<String> {
    if !selected.is_empty() {
        return selected.to_vec();
    }
    latest_quarter(rows).into_iter().collect()
}
