//! Automated insight engine.
//!
//! Three independent analyses over an immutable table snapshot:
//!
//! - [`MissingValueScanner`]: null counts per column
//! - [`OutlierDetector`]: Tukey IQR fence detection on numeric columns
//! - [`CorrelationScreener`]: pairwise Pearson correlation screening
//!
//! [`generate_insights`] composes the three into an ordered list of
//! human-readable observations. All analyses are pure functions of the
//! table; none mutates it or retains a reference across calls.

mod correlation;
mod missing;
mod outliers;

pub use correlation::CorrelationScreener;
pub use missing::MissingValueScanner;
pub use outliers::OutlierDetector;

use crate::config::InsightConfig;
use crate::types::{CorrelationPair, MissingReport, OutlierReport};
use polars::prelude::*;

/// Insight message prefix for data-quality warnings.
const WARN_MARKER: &str = "⚠️";
/// Insight message prefix for informational findings.
const INFO_MARKER: &str = "📈";
/// Insight message prefix for the all-clear fallback.
const OK_MARKER: &str = "✅";

/// Run the three analyses and render their findings as an ordered list of
/// human-readable strings.
///
/// At most one line per analysis, in fixed order: missing values, outliers,
/// correlations. When all three come back empty, exactly one "no issues"
/// line is returned instead. The lines name affected columns only, never
/// counts or coefficients.
pub fn generate_insights(df: &DataFrame, config: &InsightConfig) -> PolarsResult<Vec<String>> {
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

    Ok(render_insights(&missing, &outliers, &correlations))
}

/// Render already-computed analysis results into the fixed insight lines.
pub fn render_insights(
    missing: &MissingReport,
    outliers: &OutlierReport,
    correlations: &[CorrelationPair],
) -> Vec<String> {
    let mut insights = Vec::new();

    if !missing.is_empty() {
        insights.push(format!(
            "{} Columns with missing values: {}",
            WARN_MARKER,
            missing.column_names().join(", ")
        ));
    }

    if !outliers.is_empty() {
        insights.push(format!(
            "{} Columns with outlier values: {}",
            WARN_MARKER,
            outliers.column_names().join(", ")
        ));
    }

    if !correlations.is_empty() {
        let rendered: Vec<String> = correlations.iter().map(|p| p.label()).collect();
        insights.push(format!(
            "{} Strong correlations detected: {}",
            INFO_MARKER,
            rendered.join(", ")
        ));
    }

    if insights.is_empty() {
        insights.push(format!(
            "{} No significant issues or strong correlations found in your data.",
            OK_MARKER
        ));
    }

    insights
}
