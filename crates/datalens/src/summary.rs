//! Dataset summary statistics.
//!
//! Per-column descriptive statistics for table inspection: counts and
//! uniqueness for every column, moments and quartiles for numeric columns,
//! the most frequent value for everything else.

use crate::utils::{collect_numeric_values, is_numeric_dtype, string_mode};
use polars::prelude::*;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// Descriptive statistics for a numeric column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericStats {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Summary of a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: String,
    /// Number of non-null values.
    pub count: usize,
    pub null_count: usize,
    pub unique_count: usize,
    pub sample_values: Vec<String>,
    /// Present for numeric columns only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericStats>,
    /// Most frequent value, for non-numeric columns with data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_frequent: Option<String>,
}

/// Summary of a whole table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
}

/// Summarize every column of a table.
pub fn summarize(df: &DataFrame) -> PolarsResult<DatasetSummary> {
    let mut columns = Vec::with_capacity(df.width());

    for col in df.get_columns() {
        let series = col.as_materialized_series();
        columns.push(summarize_column(series)?);
    }

    Ok(DatasetSummary {
        rows: df.height(),
        columns,
    })
}

fn summarize_column(series: &Series) -> PolarsResult<ColumnSummary> {
    let null_count = series.null_count();
    let count = series.len() - null_count;
    let unique_count = series.n_unique()?;
    let numeric_dtype = is_numeric_dtype(series.dtype());

    let numeric = if numeric_dtype {
        numeric_stats(series)?
    } else {
        None
    };

    let most_frequent = if numeric_dtype {
        None
    } else {
        string_mode(series)
    };

    Ok(ColumnSummary {
        name: series.name().to_string(),
        dtype: format!("{:?}", series.dtype()),
        count,
        null_count,
        unique_count,
        sample_values: sample_values(series, 5),
        numeric,
        most_frequent,
    })
}

fn numeric_stats(series: &Series) -> PolarsResult<Option<NumericStats>> {
    let values: Vec<f64> = collect_numeric_values(series)?
        .into_iter()
        .map(|(_, v)| v)
        .collect();
    if values.is_empty() {
        return Ok(None);
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = if values.len() > 1 {
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        variance.sqrt()
    } else {
        0.0
    };

    let mut sorted = values;
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Ok(Some(NumericStats {
        mean,
        std,
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    }))
}

/// Linearly interpolated quantile of a sorted slice. Same rule as the
/// outlier detector's quartiles, so summary and detection agree.
fn quantile(sorted: &[f64], q: f64) -> f64 {
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

/// Collect up to `max_samples` non-null values, seeded for reproducibility.
fn sample_values(series: &Series, max_samples: usize) -> Vec<String> {
    let non_null = series.drop_nulls();
    if non_null.is_empty() {
        return Vec::new();
    }

    let sample_size = std::cmp::min(max_samples, non_null.len());
    let mut rng = StdRng::seed_from_u64(42);
    let indices: Vec<usize> = (0..non_null.len()).collect();
    let mut sampled: Vec<usize> = indices
        .choose_multiple(&mut rng, sample_size)
        .copied()
        .collect();
    sampled.sort_unstable();

    sampled
        .into_iter()
        .filter_map(|idx| non_null.get(idx).ok().map(|v| format!("{}", v)))
        .collect()
}
