//! Integration tests for the data analysis library.
//!
//! These tests verify end-to-end behavior over CSV fixtures: load, clean,
//! summarize, and generate insights.

use datalens::{
    FillMethod, InsightConfig, InsightReport, MissingValueScanner, OutlierDetector,
    fill_missing, generate_insights, load_table, numeric_columns, summarize, write_csv,
};
use polars::prelude::*;
use std::path::PathBuf;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture(filename: &str) -> DataFrame {
    load_table(fixtures_path().join(filename)).expect("Failed to load fixture")
}

fn all_columns(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// ============================================================================
// End-to-End Insight Tests
// ============================================================================

#[test]
fn test_sales_fixture_all_three_findings() {
    let df = load_fixture("sales.csv");

    let insights = generate_insights(&df, &InsightConfig::default()).unwrap();

    // Nulls in units, an outlier in units, and price/revenue correlate.
    assert_eq!(insights.len(), 3);
    assert!(insights[0].contains("missing values"));
    assert!(insights[0].contains("units"));
    assert!(insights[1].contains("outlier"));
    assert!(insights[1].contains("units"));
    assert!(insights[2].contains("Strong correlations"));
    assert!(insights[2].contains("price & revenue"));
}

#[test]
fn test_clean_fixture_single_fallback_line() {
    let df = load_fixture("clean.csv");

    let insights = generate_insights(&df, &InsightConfig::default()).unwrap();

    assert_eq!(insights.len(), 1);
    assert!(insights[0].contains("No significant issues"));
}

#[test]
fn test_identical_columns_fixture_reports_one_pair() {
    let df = load_fixture("identical.csv");

    let report = InsightReport::build(&df, &InsightConfig::default(), None).unwrap();

    assert_eq!(report.correlations.len(), 1);
    assert_eq!(report.correlations[0].first, "x");
    assert_eq!(report.correlations[0].second, "y");
    assert!((report.correlations[0].coefficient - 1.0).abs() < 1e-12);
    assert!(report.missing.is_empty());
    assert!(report.outliers.is_empty());
}

#[test]
fn test_insights_deterministic_across_runs() {
    let df = load_fixture("sales.csv");
    let config = InsightConfig::default();

    let first = generate_insights(&df, &config).unwrap();
    let second = generate_insights(&df, &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_analyses_do_not_mutate_the_table() {
    let df = load_fixture("sales.csv");
    let before = df.clone();

    let _ = generate_insights(&df, &InsightConfig::default()).unwrap();
    let _ = summarize(&df).unwrap();
    let _ = OutlierDetector::detect(&df, &all_columns(&df)).unwrap();

    assert!(df.equals_missing(&before));
}

// ============================================================================
// Cleaning + Insight Pipeline Tests
// ============================================================================

#[test]
fn test_fill_then_scan_reports_nothing() {
    let df = load_fixture("sales.csv");
    assert!(!MissingValueScanner::scan(&df).is_empty());

    let filled = fill_missing(&df, "units", FillMethod::Median).unwrap();

    assert!(MissingValueScanner::scan(&filled).is_empty());
}

#[test]
fn test_raised_threshold_drops_correlation_finding() {
    let df = load_fixture("sales.csv");

    let config = InsightConfig::builder()
        .correlation_threshold(0.99)
        .build()
        .unwrap();
    let insights = generate_insights(&df, &config).unwrap();

    // price/revenue sit near r = 0.96, below the raised threshold.
    assert_eq!(insights.len(), 2);
    assert!(insights.iter().all(|i| !i.contains("correlations")));
}

#[test]
fn test_numeric_columns_listing() {
    let df = load_fixture("sales.csv");
    assert_eq!(numeric_columns(&df), vec!["units", "price", "revenue"]);
}

#[test]
fn test_summary_matches_fixture() {
    let df = load_fixture("sales.csv");
    let summary = summarize(&df).unwrap();

    assert_eq!(summary.rows, 8);
    let units = summary
        .columns
        .iter()
        .find(|c| c.name == "units")
        .unwrap();
    assert_eq!(units.null_count, 1);
    assert_eq!(units.count, 7);

    let region = summary
        .columns
        .iter()
        .find(|c| c.name == "region")
        .unwrap();
    assert!(region.numeric.is_none());
    assert_eq!(region.unique_count, 4);
}

// ============================================================================
// Export Tests
// ============================================================================

#[test]
fn test_cleaned_table_roundtrip() {
    let df = load_fixture("sales.csv");
    let mut cleaned = fill_missing(&df, "units", FillMethod::Mean).unwrap();

    let path = std::env::temp_dir().join("datalens_integration_export.csv");
    write_csv(&mut cleaned, &path).unwrap();

    let reloaded = load_table(&path).unwrap();
    assert_eq!(reloaded.shape(), df.shape());
    assert_eq!(reloaded.column("units").unwrap().null_count(), 0);

    std::fs::remove_file(&path).ok();
}

// ============================================================================
// Report Tests
// ============================================================================

#[test]
fn test_report_build_from_fixture() {
    let df = load_fixture("sales.csv");

    let report =
        InsightReport::build(&df, &InsightConfig::default(), Some("sales.csv")).unwrap();

    assert_eq!(report.rows, 8);
    assert_eq!(report.columns, 4);
    assert_eq!(report.missing.null_count("units"), Some(1));

    let outliers = report.outliers.outliers("units").unwrap();
    assert_eq!(outliers.len(), 1);
    assert_eq!(outliers[0].value, 500.0);
    // Row position in the table, after the null at row 2.
    assert_eq!(outliers[0].row, 7);

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("sales.csv"));
}
