//! Custom error types for the analysis library.
//!
//! This module provides the error hierarchy using `thiserror`. The insight
//! analyses themselves are infallible on documented inputs; errors come from
//! file loading, cleaning transforms and report output.

use thiserror::Error;

/// The main error type for table loading, cleaning and reporting.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File extension is not one of the supported table formats.
    #[error("Unsupported file format: {0} (expected .csv, .xls or .xlsx)")]
    UnsupportedFormat(String),

    /// Column was not found in the table.
    #[error("Column '{0}' not found in table")]
    ColumnNotFound(String),

    /// A column with this name already exists.
    #[error("Column '{0}' already exists in table")]
    DuplicateColumn(String),

    /// New column length does not match the table height.
    #[error("Column has {actual} values but table has {expected} rows")]
    ColumnLengthMismatch { expected: usize, actual: usize },

    /// A numeric fill method was requested for a non-numeric column.
    #[error("Fill method '{method}' requires a numeric column, but '{column}' is not numeric")]
    NonNumericColumn { column: String, method: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Excel parsing error (only with "excel" feature).
    #[cfg(feature = "excel")]
    #[error("Excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<AnalysisError>,
    },
}

impl AnalysisError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        AnalysisError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AnalysisError::Polars(e).with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalysisError::ColumnNotFound("age".to_string());
        assert_eq!(err.to_string(), "Column 'age' not found in table");

        let err = AnalysisError::ColumnLengthMismatch {
            expected: 5,
            actual: 3,
        };
        assert!(err.to_string().contains("3 values"));
        assert!(err.to_string().contains("5 rows"));
    }

    #[test]
    fn test_with_context() {
        let err = AnalysisError::ColumnNotFound("age".to_string()).with_context("During cleaning");
        assert!(err.to_string().contains("During cleaning"));
        assert!(err.to_string().contains("age"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<()> = Err(AnalysisError::FileNotFound("data.csv".to_string()));
        let err = result.context("Loading input").unwrap_err();
        assert!(err.to_string().starts_with("Loading input"));
    }
}
