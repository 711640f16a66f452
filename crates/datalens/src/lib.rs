//! Tabular Data Analysis Library
//!
//! A no-code-friendly data analysis library built with Rust and Polars.
//!
//! # Overview
//!
//! This library provides the building blocks of a point-and-click data
//! analysis tool:
//!
//! - **Table Loading**: CSV and Excel ingestion into Polars DataFrames
//! - **Cleaning Transforms**: missing-value fill, one-hot encoding,
//!   column drop/rename/add
//! - **Dataset Summary**: per-column descriptive statistics
//! - **Automated Insights**: missing-value scan, IQR outlier detection and
//!   Pearson correlation screening, rendered as short textual observations
//! - **Reports**: a JSON artifact bundling all findings
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use datalens::{InsightConfig, generate_insights, load_table};
//!
//! let df = load_table("data.csv")?;
//!
//! let config = InsightConfig::builder()
//!     .correlation_threshold(0.7)
//!     .build()?;
//!
//! for insight in generate_insights(&df, &config)? {
//!     println!("{}", insight);
//! }
//! ```
//!
//! # Design
//!
//! The insight analyses are pure functions of an immutable table snapshot:
//! they take `&DataFrame`, return plain data, and never retain a reference
//! across calls. The caller owns the authoritative table; cleaning
//! transforms return new tables rather than editing in place. Column types
//! are decided once at load time by the Polars/calamine type inference, and
//! the analyses dispatch on those dtypes.

pub mod cleaner;
pub mod config;
pub mod error;
pub mod insights;
pub mod loader;
pub mod report;
pub mod summary;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use cleaner::{FillMethod, add_column, drop_columns, fill_missing, one_hot_encode, rename_column};
pub use config::{ConfigValidationError, InsightConfig, InsightConfigBuilder};
pub use error::{AnalysisError, Result as AnalysisResult, ResultExt};
pub use insights::{
    CorrelationScreener, MissingValueScanner, OutlierDetector, generate_insights, render_insights,
};
pub use loader::{load_table, write_csv};
pub use report::{InsightReport, ReportGenerator};
pub use summary::{ColumnSummary, DatasetSummary, NumericStats, summarize};
pub use types::{
    ColumnOutliers, CorrelationPair, MissingColumn, MissingReport, Outlier, OutlierReport,
};
pub use utils::{DtypeCategory, get_dtype_category, is_numeric_dtype, numeric_columns};
