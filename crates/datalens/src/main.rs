//! CLI entry point for the tabular data analysis tool.

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use datalens::{
    FillMethod, InsightConfig, InsightReport, ReportGenerator, add_column, drop_columns,
    fill_missing, load_table, one_hot_encode, rename_column, summarize, write_csv,
};
use polars::prelude::*;
use std::path::Path;
use tracing::info;

/// CLI-compatible fill method enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFillMethod {
    /// Use the mean of non-null values
    Mean,
    /// Use the median of non-null values
    Median,
    /// Use the most frequent value
    Mode,
}

impl From<CliFillMethod> for FillMethod {
    fn from(cli: CliFillMethod) -> Self {
        match cli {
            CliFillMethod::Mean => FillMethod::Mean,
            CliFillMethod::Median => FillMethod::Median,
            CliFillMethod::Mode => FillMethod::Mode,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Tabular data analysis and quality insights",
    long_about = "Load a CSV or Excel table, optionally clean it, and generate\n\
                  automated data-quality insights.\n\n\
                  EXAMPLES:\n  \
                  # Analyze a file and print insights\n  \
                  datalens -i data.csv\n\n  \
                  # Fill missing values, then analyze and export\n  \
                  datalens -i data.csv --fill Age --fill-method median --export cleaned.csv\n\n  \
                  # Machine-readable report\n  \
                  datalens -i data.csv --json | jq .insights"
)]
struct Args {
    /// Path to the CSV or Excel file to analyze
    #[arg(short, long)]
    input: String,

    /// Output directory for generated reports
    #[arg(short, long, default_value = "./outputs")]
    output: String,

    /// Correlation reporting threshold (0.0 - 1.0]
    ///
    /// Numeric column pairs with |r| above this value are reported
    #[arg(long, default_value = "0.7")]
    threshold: f64,

    /// Restrict outlier detection to these columns (comma-separated)
    ///
    /// Unknown and non-numeric names are skipped silently
    #[arg(long, value_delimiter = ',')]
    columns: Option<Vec<String>>,

    /// Drop these columns before analysis (comma-separated)
    #[arg(long, value_delimiter = ',')]
    drop: Option<Vec<String>>,

    /// Rename a column before analysis, as OLD:NEW
    #[arg(long)]
    rename: Option<String>,

    /// Fill missing values in this column before analysis
    #[arg(long)]
    fill: Option<String>,

    /// Fill strategy used with --fill
    #[arg(long, value_enum, default_value = "median")]
    fill_method: CliFillMethod,

    /// One-hot encode this column before analysis
    #[arg(long)]
    one_hot: Option<String>,

    /// Append a new column before analysis, as NAME=v1,v2,...
    ///
    /// The value count must match the table height
    #[arg(long)]
    add_column: Option<String>,

    /// Write the (possibly cleaned) table to this CSV path
    #[arg(long)]
    export: Option<String>,

    /// Print a per-column summary table
    #[arg(short, long)]
    summary: bool,

    /// Number of preview rows to print (0 disables the preview)
    #[arg(long, default_value = "5")]
    preview: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and final result)
    #[arg(short, long)]
    quiet: bool,

    /// Output the JSON report to stdout instead of human-readable text
    ///
    /// Disables all logging; only the report is written to stdout
    #[arg(long)]
    json: bool,

    /// Write a detailed JSON report to the output directory
    ///
    /// The report will be saved as <input_name>_report.json
    #[arg(short = 'r', long)]
    emit_report: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    if !Path::new(&args.input).exists() {
        return Err(anyhow!("Input file not found: {}", args.input));
    }

    let config = InsightConfig::builder().correlation_threshold(args.threshold);
    let config = match &args.columns {
        Some(columns) => config.outlier_columns(columns.clone()),
        None => config,
    }
    .build()?;

    info!("Loading table from: {}", args.input);
    let df = load_table(&args.input)?;

    let mut df = apply_transforms(df, &args)?;

    if let Some(ref export_path) = args.export {
        write_csv(&mut df, export_path)?;
    }

    let report = InsightReport::build(&df, &config, Some(args.input.as_str()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.emit_report {
        let input_stem = extract_file_stem(&args.input);
        let generator = ReportGenerator::new(std::path::PathBuf::from(&args.output));
        let report_path = generator.write_report_to_file(&report, &input_stem)?;
        info!("Report written to: {}", report_path.display());
    }

    print_human_readable_output(&df, &report, &args)?;

    Ok(())
}

/// Apply the requested cleaning transforms, in a fixed order:
/// drop, rename, fill, one-hot encode, add.
fn apply_transforms(df: DataFrame, args: &Args) -> Result<DataFrame> {
    let mut df = df;

    if let Some(ref columns) = args.drop {
        df = drop_columns(&df, columns)?;
    }

    if let Some(ref rename) = args.rename {
        let (old, new) = rename
            .split_once(':')
            .ok_or_else(|| anyhow!("--rename expects OLD:NEW, got '{}'", rename))?;
        df = rename_column(&df, old, new)?;
    }

    if let Some(ref column) = args.fill {
        df = fill_missing(&df, column, args.fill_method.into())?;
    }

    if let Some(ref column) = args.one_hot {
        df = one_hot_encode(&df, column)?;
    }

    if let Some(ref column_spec) = args.add_column {
        let (name, raw_values) = column_spec
            .split_once('=')
            .ok_or_else(|| anyhow!("--add-column expects NAME=v1,v2,..., got '{}'", column_spec))?;
        let values: Vec<String> = raw_values.split(',').map(|v| v.trim().to_string()).collect();
        df = add_column(&df, name, values)?;
    }

    Ok(df)
}

/// Extract the file stem (name without extension) from a path.
fn extract_file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string()
}

/// Truncate a string to max length with ellipsis
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

/// Print the default human-readable output.
///
/// Note: this uses `println!` intentionally for user-facing CLI output.
/// Unlike logging (`info!`, `debug!`), it should always be visible
/// regardless of log level settings.
fn print_human_readable_output(df: &DataFrame, report: &InsightReport, args: &Args) -> Result<()> {
    println!();
    println!("{}", "=".repeat(80));
    println!("DATASET OVERVIEW");
    println!("{}", "=".repeat(80));
    println!("  File: {}", args.input);
    println!("  Rows: {}", report.rows);
    println!("  Columns: {}", report.columns);
    println!();

    if args.preview > 0 {
        println!("PREVIEW");
        println!("{}", "-".repeat(40));
        println!("{}", df.head(Some(args.preview)));
        println!();
    }

    if args.summary {
        print_summary_table(df)?;
    }

    println!("INSIGHTS");
    println!("{}", "-".repeat(40));
    for insight in &report.insights {
        println!("  {}", insight);
    }
    println!();

    if !args.emit_report {
        println!("Use --json for machine-readable output");
        println!("Use --emit-report to save a detailed JSON report");
    }
    println!("{}", "=".repeat(80));

    Ok(())
}

fn print_summary_table(df: &DataFrame) -> Result<()> {
    let summary = summarize(df)?;

    println!("COLUMN SUMMARY");
    println!("{}", "-".repeat(40));
    println!(
        "{:<20} {:<12} {:<10} {:<10} {:<12}",
        "Column", "Type", "Nulls", "Unique", "Mean"
    );
    println!("{}", "-".repeat(70));

    for col in &summary.columns {
        let mean = col
            .numeric
            .as_ref()
            .map(|stats| format!("{:.2}", stats.mean))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<20} {:<12} {:<10} {:<10} {:<12}",
            truncate_str(&col.name, 19),
            col.dtype,
            col.null_count,
            col.unique_count,
            mean
        );
    }
    println!();

    Ok(())
}
