//! Table loading and export.
//!
//! Loads CSV files through Polars and Excel workbooks through calamine
//! (behind the `excel` feature). The loader is the only place where column
//! types get decided; the analyses trust the resulting dtypes.

use crate::error::{AnalysisError, Result};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Load a table from a CSV or Excel file, dispatching on the extension.
pub fn load_table(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AnalysisError::FileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let df = match extension.as_str() {
        "csv" => read_csv_file(path)?,
        #[cfg(feature = "excel")]
        "xls" | "xlsx" => read_excel_file(path)?,
        _ => {
            return Err(AnalysisError::UnsupportedFormat(
                path.display().to_string(),
            ));
        }
    };

    info!(
        "Loaded {} ({} rows x {} columns)",
        path.display(),
        df.height(),
        df.width()
    );
    Ok(df)
}

/// Write a table to a CSV file, creating parent directories as needed.
pub fn write_csv(df: &mut DataFrame, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(df)?;

    info!("Table saved: {}", path.display());
    Ok(())
}

/// Read a CSV file into a DataFrame.
///
/// Polars samples the first 1000 rows for type inference; a generous sample
/// keeps mostly-numeric columns from being mistyped by a late header row.
fn read_csv_file(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(1000))
        .try_into_reader_with_file_path(Some(path.into()))?
        .finish()?;

    Ok(df)
}

/// Read the first worksheet of an Excel workbook into a DataFrame.
///
/// The first row is treated as the header. A column becomes Float64 when
/// every non-empty cell is a number, Boolean when every non-empty cell is a
/// bool, and String otherwise; empty cells become nulls.
#[cfg(feature = "excel")]
fn read_excel_file(path: &Path) -> Result<DataFrame> {
    use calamine::{Data, Reader, open_workbook_auto};

    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AnalysisError::UnsupportedFormat(path.display().to_string()))?;
    debug!("Reading worksheet '{}'", sheet_name);

    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(DataFrame::empty());
    };

    let names: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell {
            Data::Empty => format!("column_{}", i + 1),
            other => other.to_string(),
        })
        .collect();

    let body: Vec<&[Data]> = rows.collect();
    let mut columns = Vec::with_capacity(names.len());

    for (col_idx, name) in names.iter().enumerate() {
        let cells: Vec<&Data> = body
            .iter()
            .map(|row| row.get(col_idx).unwrap_or(&Data::Empty))
            .collect();
        columns.push(build_excel_column(name, &cells));
    }

    Ok(DataFrame::new(
        columns.into_iter().map(Column::from).collect(),
    )?)
}

#[cfg(feature = "excel")]
fn build_excel_column(name: &str, cells: &[&calamine::Data]) -> Series {
    use calamine::Data;

    let all_numeric = cells
        .iter()
        .all(|c| matches!(c, Data::Empty | Data::Float(_) | Data::Int(_)));
    if all_numeric {
        let values: Vec<Option<f64>> = cells
            .iter()
            .map(|c| match c {
                Data::Float(v) => Some(*v),
                Data::Int(v) => Some(*v as f64),
                _ => None,
            })
            .collect();
        return Series::new(name.into(), values);
    }

    let all_bool = cells
        .iter()
        .all(|c| matches!(c, Data::Empty | Data::Bool(_)));
    if all_bool {
        let values: Vec<Option<bool>> = cells
            .iter()
            .map(|c| match c {
                Data::Bool(v) => Some(*v),
                _ => None,
            })
            .collect();
        return Series::new(name.into(), values);
    }

    let values: Vec<Option<String>> = cells
        .iter()
        .map(|c| match c {
            Data::Empty => None,
            other => Some(other.to_string()),
        })
        .collect();
    Series::new(name.into(), values)
}
