//! Shared utilities for table analysis.
//!
//! This module contains common helper functions used across multiple modules
//! to reduce code duplication and ensure consistency.

use polars::prelude::*;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Category of a column data type for analysis purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DtypeCategory {
    /// Integer or floating point numbers
    Numeric,
    /// Boolean type
    Boolean,
    /// String/text type
    String,
    /// Other/unknown types
    Other,
}

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Get the category of a DataType.
pub fn get_dtype_category(dtype: &DataType) -> DtypeCategory {
    if is_numeric_dtype(dtype) {
        DtypeCategory::Numeric
    } else if matches!(dtype, DataType::Boolean) {
        DtypeCategory::Boolean
    } else if matches!(dtype, DataType::String | DataType::Categorical(_, _)) {
        DtypeCategory::String
    } else {
        DtypeCategory::Other
    }
}

/// Names of the numeric columns of a table, in column order.
pub fn numeric_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| is_numeric_dtype(col.dtype()))
        .map(|col| col.name().to_string())
        .collect()
}

// =============================================================================
// Series Statistics Utilities
// =============================================================================

/// Calculate the mode (most frequent value) of a string Series.
pub fn string_mode(series: &Series) -> Option<String> {
    let non_null = series.drop_nulls();
    if non_null.is_empty() {
        return None;
    }

    let str_series = match non_null.cast(&DataType::String) {
        Ok(s) => s,
        Err(_) => return None,
    };

    let str_chunked = match str_series.str() {
        Ok(s) => s,
        Err(_) => return None,
    };

    let mut value_counts: std::collections::HashMap<String, usize> =
        std::collections::HashMap::new();
    for val in str_chunked.into_iter().flatten() {
        *value_counts.entry(val.to_string()).or_insert(0) += 1;
    }

    // Ties resolve to the smallest value for deterministic output.
    value_counts
        .into_iter()
        .max_by(|(va, ca), (vb, cb)| ca.cmp(cb).then_with(|| vb.cmp(va)))
        .map(|(val, _)| val)
}

/// Calculate the mode of a numeric Series.
///
/// Ties resolve to the smallest value.
pub fn numeric_mode(series: &Series) -> Option<f64> {
    let non_null = series.drop_nulls();
    if non_null.is_empty() {
        return None;
    }

    let float_series = non_null.cast(&DataType::Float64).ok()?;
    let values = float_series.f64().ok()?;

    let mut counts: std::collections::HashMap<u64, (f64, usize)> =
        std::collections::HashMap::new();
    for val in values.into_iter().flatten() {
        let entry = counts.entry(val.to_bits()).or_insert((val, 0));
        entry.1 += 1;
    }

    counts
        .into_values()
        .max_by(|(va, ca), (vb, cb)| {
            ca.cmp(cb).then_with(|| {
                vb.partial_cmp(va)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        })
        .map(|(val, _)| val)
}

// =============================================================================
// Series Transformation Utilities
// =============================================================================

/// Fill null values in a numeric Series with a specific value.
pub fn fill_numeric_nulls(series: &Series, fill_value: f64) -> PolarsResult<Series> {
    let mask = series.is_null();
    let len = series.len();
    let mut result_vec = Vec::with_capacity(len);

    for i in 0..len {
        if mask.get(i).unwrap_or(false) {
            result_vec.push(Some(fill_value));
        } else {
            let val = series.get(i)?;
            result_vec.push(Some(val.try_extract::<f64>()?));
        }
    }

    Ok(Series::new(series.name().clone(), result_vec))
}

/// Fill null values in a string Series with a specific value.
pub fn fill_string_nulls(series: &Series, fill_value: &str) -> PolarsResult<Series> {
    let mask = series.is_null();
    let len = series.len();
    let mut result_vec = Vec::with_capacity(len);

    for i in 0..len {
        if mask.get(i).unwrap_or(false) {
            result_vec.push(Some(fill_value.to_string()));
        } else {
            let val = series.get(i)?;
            result_vec.push(Some(format!("{}", val)));
        }
    }

    Ok(Series::new(series.name().clone(), result_vec))
}

/// Collect the non-null values of a numeric column as `(row, value)` pairs.
///
/// Row indices are positions in the series, so they survive the null filter.
pub fn collect_numeric_values(series: &Series) -> PolarsResult<Vec<(usize, f64)>> {
    let float_series = series.cast(&DataType::Float64)?;
    let values = float_series.f64()?;

    Ok(values
        .into_iter()
        .enumerate()
        .filter_map(|(row, val)| val.map(|v| (row, v)))
        .collect())
}

// =============================================================================
// Tests
// =============================================================================
