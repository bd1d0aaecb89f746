//! Dataset loader for delimited text and Parquet files
//!
//! Text tables have one header row of variable names followed by one row per
//! case. Fields may be separated by spaces, commas or tabs, in any mix.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

use super::error::DataError;

/// Numeric columns pulled out of a data file
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Every column name in file order
    pub names: Vec<String>,
    /// The first `n_indep` columns
    pub predictors: Vec<Vec<f64>>,
    pub dependent: Vec<f64>,
    /// Column index of the dependent variable
    pub dependent_column: usize,
}

impl Dataset {
    pub fn n_cases(&self) -> usize {
        self.dependent.len()
    }

    pub fn predictor_names(&self) -> &[String] {
        &self.names[..self.predictors.len()]
    }

    pub fn dependent_name(&self) -> &str {
        &self.names[self.dependent_column]
    }
}

/// Rewrite every non-blank line with single commas between fields.
pub fn normalize_delimiters(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        let fields: Vec<&str> = line
            .split(|c: char| c == ' ' || c == ',' || c == '\t' || c == '\r')
            .filter(|f| !f.is_empty())
            .collect();
        if fields.is_empty() {
            continue;
        }
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

/// Read a whole table into memory. `.parquet` files are read natively,
/// anything else is treated as delimited text.
pub fn read_table(path: &Path) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension == "parquet" {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open Parquet file: {}", path.display()))?;
        return ParquetReader::new(file)
            .finish()
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()));
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file: {}", path.display()))?;
    let normalized = normalize_delimiters(&text);
    if normalized.is_empty() {
        anyhow::bail!("Data file is empty: {}", path.display());
    }

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .into_reader_with_file_handle(Cursor::new(normalized.into_bytes()))
        .finish()
        .with_context(|| format!("Failed to parse data file: {}", path.display()))
}

/// Find the dependent column by case-insensitive name. It must lie after the
/// first `n_indep` columns.
pub fn locate_dependent(
    names: &[String],
    name: &str,
    n_indep: usize,
) -> Result<usize, DataError> {
    if n_indep >= names.len() {
        return Err(DataError::TooFewColumns {
            n_indep,
            columns: names.len(),
        });
    }

    let column = names
        .iter()
        .position(|n| n.eq_ignore_ascii_case(name))
        .ok_or_else(|| DataError::DependentNotFound {
            name: name.to_string(),
        })?;

    if column < n_indep {
        return Err(DataError::DependentInPredictorRange {
            name: name.to_string(),
            column,
            n_indep,
        });
    }

    Ok(column)
}

/// Extract a column as finite `f64` values.
pub fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .as_materialized_series()
        .cast(&DataType::Float64)
        .with_context(|| format!("Column '{}' cannot be read as numbers", name))?;

    if series.null_count() > 0 {
        return Err(DataError::NonNumericValue {
            column: name.to_string(),
        }
        .into());
    }

    let values: Vec<f64> = series.f64()?.into_no_null_iter().collect();
    if values.iter().any(|v| !v.is_finite()) {
        return Err(DataError::NonNumericValue {
            column: name.to_string(),
        }
        .into());
    }

    Ok(values)
}

/// Load the predictors (first `n_indep` columns) and the dependent variable.
pub fn load_dataset(path: &Path, n_indep: usize, dependent: &str) -> Result<Dataset> {
    let df = read_table(path)?;
    dataset_from_frame(&df, n_indep, dependent)
}

/// Same as [`load_dataset`] for a table that is already in memory.
pub fn dataset_from_frame(df: &DataFrame, n_indep: usize, dependent: &str) -> Result<Dataset> {
    let names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    let dependent_column = locate_dependent(&names, dependent, n_indep)?;

    if df.height() == 0 {
        return Err(DataError::EmptyTable.into());
    }

    let predictors = names[..n_indep]
        .iter()
        .map(|name| numeric_column(df, name))
        .collect::<Result<Vec<_>>>()?;
    let dependent = numeric_column(df, &names[dependent_column])?;

    Ok(Dataset {
        names,
        predictors,
        dependent,
        dependent_column,
    })
}
