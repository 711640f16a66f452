//! Missing-value scan.

use crate::types::{MissingColumn, MissingReport};
use polars::prelude::*;

/// Scans a table for columns containing null values.
pub struct MissingValueScanner;

impl MissingValueScanner {
    /// Count nulls per column, keeping only columns with at least one.
    ///
    /// The report preserves the table's column order. An empty table yields
    /// an empty report.
    pub fn scan(df: &DataFrame) -> MissingReport {
        let columns = df
            .get_columns()
            .iter()
            .filter_map(|col| {
                let null_count = col.null_count();
                (null_count > 0).then(|| MissingColumn {
                    name: col.name().to_string(),
                    null_count,
                })
            })
            .collect();

        MissingReport { columns }
    }
}
