//! Error types for dataset loading and binning.
//!
//! These cover the input-shape failures that must be reported before the
//! selection loop runs. The selection loop itself has no failure modes.

use thiserror::Error;

/// Errors raised while turning a data file into binned variables.
#[derive(Debug, Error)]
pub enum DataError {
    /// The dependent variable name does not match any header.
    #[error("Dependent variable {name} is not in file")]
    DependentNotFound {
        /// Name as given on the command line
        name: String,
    },

    /// The dependent variable sits inside the independent-variable prefix.
    #[error(
        "Dependent variable {name} (column {column}) must be beyond the first {n_indep} independent variables"
    )]
    DependentInPredictorRange {
        name: String,
        /// Zero-based column index of the match
        column: usize,
        n_indep: usize,
    },

    /// Not enough columns to hold the predictors plus a dependent variable.
    #[error("Requested {n_indep} independent variables but the file has only {columns} columns")]
    TooFewColumns { n_indep: usize, columns: usize },

    /// A column contains a value that is not a number, or a missing value.
    #[error("Column '{column}' contains a missing or non-numeric value")]
    NonNumericValue { column: String },

    /// Header present but no data rows.
    #[error("Data file contains no cases")]
    EmptyTable,

    /// A bin row does not have one entry per case.
    #[error("Variable {variable} has {found} bin ids, expected {expected}")]
    RaggedBinMatrix {
        variable: usize,
        expected: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependent_not_found_display() {
        let err = DataError::DependentNotFound {
            name: "DAY_RETURN".to_string(),
        };
        assert_eq!(err.to_string(), "Dependent variable DAY_RETURN is not in file");
    }

    #[test]
    fn test_dependent_in_range_display() {
        let err = DataError::DependentInPredictorRange {
            name: "Y".to_string(),
            column: 2,
            n_indep: 4,
        };
        assert_eq!(
            err.to_string(),
            "Dependent variable Y (column 2) must be beyond the first 4 independent variables"
        );
    }

    #[test]
    fn test_too_few_columns_display() {
        let err = DataError::TooFewColumns {
            n_indep: 5,
            columns: 5,
        };
        assert!(err.to_string().contains("only 5 columns"));
    }

    #[test]
    fn test_ragged_matrix_display() {
        let err = DataError::RaggedBinMatrix {
            variable: 3,
            expected: 10,
            found: 9,
        };
        assert_eq!(err.to_string(), "Variable 3 has 9 bin ids, expected 10");
    }
}
