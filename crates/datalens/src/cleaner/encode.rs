//! Categorical encoding transforms.

use crate::error::{AnalysisError, Result};
use polars::prelude::*;
use std::collections::BTreeSet;
use tracing::debug;

/// One-hot encode a column.
///
/// Replaces `column` with one boolean indicator column per distinct non-null
/// value, named `{column}_{value}` and appended after the existing columns
/// in sorted value order. Rows where the source is null are false in every
/// indicator. Returns a new table; the input is not modified.
pub fn one_hot_encode(df: &DataFrame, column: &str) -> Result<DataFrame> {
    let col = df
        .column(column)
        .map_err(|_| AnalysisError::ColumnNotFound(column.to_string()))?;
    let series = col.as_materialized_series();

    // Work over string representations so numeric categories encode too.
    let str_series = series.cast(&DataType::String)?;
    let str_chunked = str_series.str()?;

    let values: Vec<Option<String>> = str_chunked
        .into_iter()
        .map(|v| v.map(|s| s.to_string()))
        .collect();

    let categories: BTreeSet<&String> = values.iter().flatten().collect();

    let mut result = df.drop(column)?;
    for category in categories {
        let mask: Vec<bool> = values
            .iter()
            .map(|v| v.as_deref() == Some(category.as_str()))
            .collect();
        let dummy = Series::new(format!("{}_{}", column, category).into(), mask);
        result.with_column(dummy)?;
    }

    debug!("One-hot encoded '{}'", column);
    Ok(result)
}
