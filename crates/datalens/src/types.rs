use serde::{Deserialize, Serialize};

/// Null-value count for a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingColumn {
    pub name: String,
    pub null_count: usize,
}

/// Missing-value scan result.
///
/// Contains only columns with at least one null, in the column order of the
/// source table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissingReport {
    pub columns: Vec<MissingColumn>,
}

impl MissingReport {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Names of the affected columns, in table order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Null count for a column, if it appears in the report.
    pub fn null_count(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.null_count)
    }
}

/// A single outlying value: its row position in the table and the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outlier {
    pub row: usize,
    pub value: f64,
}

/// Outliers found in one numeric column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnOutliers {
    pub name: String,
    pub outliers: Vec<Outlier>,
}

/// Outlier detection result.
///
/// Columns that yielded no outliers are omitted entirely, unlike the
/// missing-value scan which lists every column with a positive count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutlierReport {
    pub columns: Vec<ColumnOutliers>,
}

impl OutlierReport {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Names of the affected columns.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Outliers for a column, if it appears in the report.
    pub fn outliers(&self, name: &str) -> Option<&[Outlier]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.outliers.as_slice())
    }
}

/// An unordered pair of distinct columns with a strong Pearson correlation.
///
/// The pair is stored in canonical order (`first` lexicographically smaller
/// than `second`), so each unordered pair has exactly one representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub first: String,
    pub second: String,
    pub coefficient: f64,
}

impl CorrelationPair {
    /// Create a pair, sorting the two names into canonical order.
    pub fn new(a: impl Into<String>, b: impl Into<String>, coefficient: f64) -> Self {
        let (a, b) = (a.into(), b.into());
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self {
            first,
            second,
            coefficient,
        }
    }

    /// Render the pair as "first & second".
    pub fn label(&self) -> String {
        format!("{} & {}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_report_accessors() {
        let report = MissingReport {
            columns: vec![
                MissingColumn {
                    name: "age".to_string(),
                    null_count: 3,
                },
                MissingColumn {
                    name: "city".to_string(),
                    null_count: 1,
                },
            ],
        };

        assert!(!report.is_empty());
        assert_eq!(report.column_names(), vec!["age", "city"]);
        assert_eq!(report.null_count("age"), Some(3));
        assert_eq!(report.null_count("fare"), None);
    }

    #[test]
    fn test_correlation_pair_canonical_order() {
        let pair = CorrelationPair::new("width", "height", 0.95);
        assert_eq!(pair.first, "height");
        assert_eq!(pair.second, "width");

        let pair = CorrelationPair::new("height", "width", 0.95);
        assert_eq!(pair.first, "height");
        assert_eq!(pair.second, "width");
    }

    #[test]
    fn test_correlation_pair_label() {
        let pair = CorrelationPair::new("b", "a", -0.8);
        assert_eq!(pair.label(), "a & b");
    }

    #[test]
    fn test_outlier_report_serialization() {
        let report = OutlierReport {
            columns: vec![ColumnOutliers {
                name: "age".to_string(),
                outliers: vec![Outlier {
                    row: 4,
                    value: 1000.0,
                }],
            }],
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"age\""));
        assert!(json.contains("1000"));

        let deserialized: OutlierReport = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.outliers("age").unwrap().len(), 1);
    }
}
