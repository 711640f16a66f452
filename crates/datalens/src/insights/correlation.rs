//! Pairwise Pearson correlation screening.

use crate::types::CorrelationPair;
use crate::utils::numeric_columns;
use polars::prelude::*;
use tracing::debug;

/// Screens the numeric columns of a table for strongly correlated pairs.
pub struct CorrelationScreener;

impl CorrelationScreener {
    /// Report every unordered pair of distinct numeric columns whose Pearson
    /// coefficient has absolute value strictly above `threshold`.
    ///
    /// Coefficients are computed over pairwise-complete observations (rows
    /// where both columns are non-null). Each pair appears at most once, in
    /// canonical name order, and the result is sorted by that order. Fewer
    /// than 2 numeric columns yields an empty result. NaN coefficients
    /// (constant column, too few paired rows) are never reported.
    pub fn screen(df: &DataFrame, threshold: f64) -> PolarsResult<Vec<CorrelationPair>> {
        let names = numeric_columns(df);
        if names.len() < 2 {
            return Ok(Vec::new());
        }

        let mut columns = Vec::with_capacity(names.len());
        for name in &names {
            let float_series = df
                .column(name.as_str())?
                .as_materialized_series()
                .cast(&DataType::Float64)?;
            let values: Vec<Option<f64>> = float_series.f64()?.into_iter().collect();
            columns.push(values);
        }

        let mut pairs = Vec::new();
        for i in 0..names.len() {
            for j in (i + 1)..names.len() {
                let r = pearson(&columns[i], &columns[j]);
                // NaN compares false, so degenerate coefficients drop out here.
                if r.abs() > threshold {
                    debug!("Strong correlation {} / {}: {:.3}", names[i], names[j], r);
                    pairs.push(CorrelationPair::new(&names[i], &names[j], r));
                }
            }
        }

        pairs.sort_by(|a, b| (&a.first, &a.second).cmp(&(&b.first, &b.second)));
        Ok(pairs)
    }
}

/// Pearson correlation coefficient over pairwise-complete observations.
///
/// Returns NaN when fewer than 2 complete pairs exist or either column has
/// zero variance over the complete pairs.
fn pearson(a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
    let paired: Vec<(f64, f64)> = a
        .iter()
        .zip(b.iter())
        .filter_map(|(x, y)| x.zip(*y))
        .collect();

    let n = paired.len() as f64;
    if paired.len() < 2 {
        return f64::NAN;
    }

    let mean_x = paired.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = paired.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &paired {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    cov / (var_x.sqrt() * var_y.sqrt())
}
