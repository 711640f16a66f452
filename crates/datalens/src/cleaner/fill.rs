//! Missing-value fill transforms.

use crate::error::{AnalysisError, Result};
use crate::utils::{fill_numeric_nulls, fill_string_nulls, is_numeric_dtype, numeric_mode, string_mode};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Strategy for filling missing values in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FillMethod {
    /// Use the mean of non-null values (numeric columns only)
    Mean,
    /// Use the median of non-null values (numeric columns only)
    #[default]
    Median,
    /// Use the most frequent value
    Mode,
}

impl FillMethod {
    /// Lowercase name for log and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Mode => "mode",
        }
    }
}

/// Fill the nulls of one column with a statistic of its non-null values.
///
/// Returns a new table; the input is not modified. `mean` and `median`
/// require a numeric column; `mode` works for numeric and string columns
/// alike. A column with no non-null values is returned unchanged (there is
/// nothing to compute a fill value from).
pub fn fill_missing(df: &DataFrame, column: &str, method: FillMethod) -> Result<DataFrame> {
    let col = df
        .column(column)
        .map_err(|_| AnalysisError::ColumnNotFound(column.to_string()))?;
    let series = col.as_materialized_series();
    let numeric = is_numeric_dtype(series.dtype());

    if !numeric && matches!(method, FillMethod::Mean | FillMethod::Median) {
        return Err(AnalysisError::NonNumericColumn {
            column: column.to_string(),
            method: method.name().to_string(),
        });
    }

    let filled = match method {
        FillMethod::Mean => series.mean().map(|v| fill_numeric_nulls(series, v)),
        FillMethod::Median => series.median().map(|v| fill_numeric_nulls(series, v)),
        FillMethod::Mode => {
            if numeric {
                numeric_mode(series).map(|v| fill_numeric_nulls(series, v))
            } else {
                string_mode(series).map(|v| fill_string_nulls(series, &v))
            }
        }
    };

    let Some(filled) = filled else {
        debug!("Column '{}' has no non-null values, leaving unchanged", column);
        return Ok(df.clone());
    };

    let mut result = df.clone();
    result.replace(column, filled?)?;
    debug!("Filled nulls in '{}' with {}", column, method.name());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_mean() {
        let df = df![
            "value" => [Some(1.0), None, Some(3.0)],
        ]
        .unwrap();

        let filled = fill_missing(&df, "value", FillMethod::Mean).unwrap();
        let col = filled.column("value").unwrap();

        assert_eq!(col.null_count(), 0);
        assert_eq!(col.get(1).unwrap().try_extract::<f64>().unwrap(), 2.0);
        // Original table untouched.
        assert_eq!(df.column("value").unwrap().null_count(), 1);
    }

    #[test]
    fn test_fill_median() {
        let df = df![
            "value" => [Some(1.0), Some(2.0), None, Some(10.0)],
        ]
        .unwrap();

        let filled = fill_missing(&df, "value", FillMethod::Median).unwrap();
        let col = filled.column("value").unwrap();

        assert_eq!(col.null_count(), 0);
        assert_eq!(col.get(2).unwrap().try_extract::<f64>().unwrap(), 2.0);
    }

    #[test]
    fn test_fill_mode_numeric() {
        let df = df![
            "value" => [Some(5.0), Some(5.0), Some(7.0), None],
        ]
        .unwrap();

        let filled = fill_missing(&df, "value", FillMethod::Mode).unwrap();
        let col = filled.column("value").unwrap();

        assert_eq!(col.get(3).unwrap().try_extract::<f64>().unwrap(), 5.0);
    }

    #[test]
    fn test_fill_mode_string() {
        let df = df![
            "city" => [Some("A"), Some("A"), Some("B"), None],
        ]
        .unwrap();

        let filled = fill_missing(&df, "city", FillMethod::Mode).unwrap();
        let col = filled.column("city").unwrap();

        assert_eq!(col.null_count(), 0);
        assert_eq!(col.str().unwrap().get(3), Some("A"));
    }

    #[test]
    fn test_fill_mean_on_string_column_rejected() {
        let df = df![
            "city" => ["A", "B"],
        ]
        .unwrap();

        let result = fill_missing(&df, "city", FillMethod::Mean);
        assert!(matches!(
            result,
            Err(AnalysisError::NonNumericColumn { .. })
        ));
    }

    #[test]
    fn test_fill_unknown_column_rejected() {
        let df = df![
            "value" => [1.0, 2.0],
        ]
        .unwrap();

        let result = fill_missing(&df, "missing_col", FillMethod::Median);
        assert!(matches!(result, Err(AnalysisError::ColumnNotFound(_))));
    }

    #[test]
    fn test_fill_all_null_column_unchanged() {
        let df = df![
            "value" => [None::<f64>, None],
        ]
        .unwrap();

        let filled = fill_missing(&df, "value", FillMethod::Median).unwrap();
        assert_eq!(filled.column("value").unwrap().null_count(), 2);
    }
}
