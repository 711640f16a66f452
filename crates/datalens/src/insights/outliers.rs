//! Outlier detection using the Tukey IQR fence.

use crate::types::{ColumnOutliers, Outlier, OutlierReport};
use crate::utils::{collect_numeric_values, is_numeric_dtype};
use polars::prelude::*;
use tracing::debug;

/// Detects outlying values in numeric columns via the interquartile range.
pub struct OutlierDetector;

impl OutlierDetector {
    /// Detect outliers in the given candidate columns.
    ///
    /// Candidates that are absent from the table or not numeric are silently
    /// skipped; passing every column name of the table is the normal usage.
    /// A value is an outlier iff it lies strictly below `Q1 - 1.5*IQR` or
    /// strictly above `Q3 + 1.5*IQR`, with quartiles computed by linear
    /// interpolation over the sorted non-null values of the column. Columns
    /// yielding no outliers are omitted from the report.
    pub fn detect(df: &DataFrame, columns: &[String]) -> PolarsResult<OutlierReport> {
        let mut report = OutlierReport::default();

        for name in columns {
            let Ok(col) = df.column(name.as_str()) else {
                continue;
            };
            if !is_numeric_dtype(col.dtype()) {
                continue;
            }

            let series = col.as_materialized_series();
            let values = collect_numeric_values(series)?;
            if values.is_empty() {
                continue;
            }

            let mut sorted: Vec<f64> = values.iter().map(|(_, v)| *v).collect();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

            let q1 = interpolated_quantile(&sorted, 0.25);
            let q3 = interpolated_quantile(&sorted, 0.75);
            let iqr = q3 - q1;
            let lower_fence = q1 - 1.5 * iqr;
            let upper_fence = q3 + 1.5 * iqr;

            let outliers: Vec<Outlier> = values
                .into_iter()
                .filter(|(_, v)| *v < lower_fence || *v > upper_fence)
                .map(|(row, value)| Outlier { row, value })
                .collect();

            if !outliers.is_empty() {
                debug!(
                    "Column '{}': {} values outside [{}, {}]",
                    name,
                    outliers.len(),
                    lower_fence,
                    upper_fence
                );
                report.columns.push(ColumnOutliers {
                    name: name.clone(),
                    outliers,
                });
            }
        }

        Ok(report)
    }
}

/// Quantile of a sorted slice using linear interpolation between the two
/// nearest order statistics.
fn interpolated_quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let pos = (n - 1) as f64 * q;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }

    let weight = pos - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}
