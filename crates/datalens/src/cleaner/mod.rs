//! Table cleaning transforms.
//!
//! Pure table -> table operations: every function takes the table by
//! reference and returns a new one, leaving the caller's copy untouched.
//! The surrounding shell owns the authoritative table between edits.

mod encode;
mod fill;

pub use encode::one_hot_encode;
pub use fill::{FillMethod, fill_missing};

use crate::error::{AnalysisError, Result};
use polars::prelude::*;
use tracing::debug;

/// Drop the given columns from the table.
///
/// Errors if any requested column does not exist, naming every missing one.
pub fn drop_columns(df: &DataFrame, columns: &[String]) -> Result<DataFrame> {
    let existing: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let missing: Vec<&String> = columns
        .iter()
        .filter(|c| !existing.contains(c))
        .collect();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|s| s.as_str()).collect();
        return Err(AnalysisError::ColumnNotFound(names.join(", ")));
    }

    let to_drop: Vec<PlSmallStr> = columns.iter().map(|s| s.as_str().into()).collect();
    let result = df.drop_many(to_drop);
    debug!("Dropped {} columns", columns.len());
    Ok(result)
}

/// Rename a column.
///
/// Errors if `old` does not exist or `new` is already taken by a different
/// column.
pub fn rename_column(df: &DataFrame, old: &str, new: &str) -> Result<DataFrame> {
    if df.column(old).is_err() {
        return Err(AnalysisError::ColumnNotFound(old.to_string()));
    }
    if new != old && df.column(new).is_ok() {
        return Err(AnalysisError::DuplicateColumn(new.to_string()));
    }

    let mut result = df.clone();
    result.rename(old, new.into())?;
    debug!("Renamed column '{}' to '{}'", old, new);
    Ok(result)
}

/// Append a new string column from raw values.
///
/// Errors if the name is taken or the value count does not match the table
/// height.
pub fn add_column(df: &DataFrame, name: &str, values: Vec<String>) -> Result<DataFrame> {
    if df.column(name).is_ok() {
        return Err(AnalysisError::DuplicateColumn(name.to_string()));
    }
    if values.len() != df.height() {
        return Err(AnalysisError::ColumnLengthMismatch {
            expected: df.height(),
            actual: values.len(),
        });
    }

    let mut result = df.clone();
    result.with_column(Series::new(name.into(), values))?;
    debug!("Added column '{}'", name);
    Ok(result)
}
