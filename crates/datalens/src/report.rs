//! Insight report generation.
//!
//! Bundles the three structured analysis reports and the rendered insight
//! strings into a single JSON artifact for file output or stdout.

use crate::config::InsightConfig;
use crate::error::Result;
use crate::insights::{
    CorrelationScreener, MissingValueScanner, OutlierDetector, render_insights,
};
use crate::types::{CorrelationPair, MissingReport, OutlierReport};
use chrono::Local;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Full insight report over one table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReport {
    /// Timestamp when the report was generated.
    pub generated_at: String,
    /// Path of the analyzed input file, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_file: Option<String>,
    /// Table shape at analysis time.
    pub rows: usize,
    pub columns: usize,
    /// Columns with null values.
    pub missing: MissingReport,
    /// Columns with IQR outliers.
    pub outliers: OutlierReport,
    /// Strongly correlated column pairs.
    pub correlations: Vec<CorrelationPair>,
    /// Rendered observations, in fixed order.
    pub insights: Vec<String>,
}

impl InsightReport {
    /// Run all analyses over a table and assemble the report.
    pub fn build(
        df: &DataFrame,
        config: &InsightConfig,
        input_file: Option<&str>,
    ) -> Result<Self> {
        let missing = MissingValueScanner::scan(df);

        let candidates: Vec<String> = match &config.outlier_columns {
            Some(columns) => columns.clone(),
            None => df
                .get_column_names()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };
        let outliers = OutlierDetector::detect(df, &candidates)?;

        let correlations = CorrelationScreener::screen(df, config.correlation_threshold)?;
        let insights = render_insights(&missing, &outliers, &correlations);

        Ok(Self {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_file: input_file.map(String::from),
            rows: df.height(),
            columns: df.width(),
            missing,
            outliers,
            correlations,
            insights,
        })
    }
}

/// Writes insight reports to an output directory.
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./outputs"),
        }
    }
}

impl ReportGenerator {
    /// Create a generator writing into `output_dir`.
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Write a report as `{report_base_name}_report.json` in the output
    /// directory, creating it if needed. Returns the written path.
    pub fn write_report_to_file(
        &self,
        report: &InsightReport,
        report_base_name: &str,
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let report_path = self
            .output_dir
            .join(format!("{}_report.json", report_base_name));
        let mut file = File::create(&report_path)?;
        file.write_all(serde_json::to_string_pretty(report)?.as_bytes())?;

        info!("Report saved: {}", report_path.display());

        Ok(report_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_report_contents() {
        let df = df![
            "age" => [Some(20.0), None, Some(22.0), Some(23.0), Some(1000.0)],
            "city" => ["A", "B", "A", "B", "A"],
        ]
        .unwrap();

        let report =
            InsightReport::build(&df, &InsightConfig::default(), Some("data.csv")).unwrap();

        assert_eq!(report.rows, 5);
        assert_eq!(report.columns, 2);
        assert_eq!(report.input_file.as_deref(), Some("data.csv"));
        assert_eq!(report.missing.column_names(), vec!["age"]);
        assert_eq!(report.outliers.column_names(), vec!["age"]);
        assert!(report.correlations.is_empty());
        assert_eq!(report.insights.len(), 2);
    }

    #[test]
    fn test_report_json_contains_insights_verbatim() {
        let df = df![
            "x" => [1.0, 2.0, 3.0, 4.0],
            "y" => [2.0, 4.0, 6.0, 8.0],
        ]
        .unwrap();

        let report = InsightReport::build(&df, &InsightConfig::default(), None).unwrap();
        let json = serde_json::to_string_pretty(&report).unwrap();

        for insight in &report.insights {
            assert!(json.contains(insight.trim()));
        }
        assert!(json.contains("\"rows\": 4"));
    }

    #[test]
    fn test_write_report_to_file() {
        let df = df![
            "v" => [1.0, 2.0, 3.0],
        ]
        .unwrap();

        let report = InsightReport::build(&df, &InsightConfig::default(), None).unwrap();

        let dir = std::env::temp_dir().join("datalens_report_test");
        let generator = ReportGenerator::new(dir.clone());
        let path = generator.write_report_to_file(&report, "sample").unwrap();

        assert!(path.ends_with("sample_report.json"));
        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: InsightReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.rows, 3);

        std::fs::remove_dir_all(&dir).ok();
    }
}
