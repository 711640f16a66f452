//! Configuration types for the insight engine.
//!
//! This module provides configuration options using the builder pattern.

use serde::{Deserialize, Serialize};

/// Configuration for insight generation.
///
/// Use [`InsightConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use datalens::config::InsightConfig;
///
/// let config = InsightConfig::builder()
///     .correlation_threshold(0.8)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Threshold for reporting a correlation pair (0.0 - 1.0, exclusive of 0).
    /// Pairs with |r| strictly above this value are reported.
    /// Default: 0.7
    pub correlation_threshold: f64,

    /// Candidate columns for outlier detection.
    /// Non-numeric and unknown names are silently skipped.
    /// If None, every column of the table is a candidate.
    /// Default: None
    pub outlier_columns: Option<Vec<String>>,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            correlation_threshold: 0.7,
            outlier_columns: None,
        }
    }
}

impl InsightConfig {
    /// Create a new configuration builder.
    pub fn builder() -> InsightConfigBuilder {
        InsightConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(self.correlation_threshold > 0.0 && self.correlation_threshold <= 1.0) {
            return Err(ConfigValidationError::InvalidThreshold {
                field: "correlation_threshold".to_string(),
                value: self.correlation_threshold,
            });
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid threshold for '{field}': {value} (must be in (0.0, 1.0])")]
    InvalidThreshold { field: String, value: f64 },
}

/// Builder for [`InsightConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct InsightConfigBuilder {
    correlation_threshold: Option<f64>,
    outlier_columns: Option<Vec<String>>,
}

impl InsightConfigBuilder {
    /// Set the correlation reporting threshold.
    ///
    /// # Arguments
    /// * `threshold` - Value in (0.0, 1.0]; pairs with |r| above it are reported
    pub fn correlation_threshold(mut self, threshold: f64) -> Self {
        self.correlation_threshold = Some(threshold);
        self
    }

    /// Restrict outlier detection to the given candidate columns.
    ///
    /// Candidates that are absent or non-numeric are skipped, not rejected.
    pub fn outlier_columns(mut self, columns: Vec<String>) -> Self {
        self.outlier_columns = Some(columns);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `InsightConfig` or an error if validation fails.
    pub fn build(self) -> Result<InsightConfig, ConfigValidationError> {
        let config = InsightConfig {
            correlation_threshold: self.correlation_threshold.unwrap_or(0.7),
            outlier_columns: self.outlier_columns,
        };

        config.validate()?;
        Ok(config)
    }
}
