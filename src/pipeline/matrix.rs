//! Variable-major storage for binned predictors

use super::binning::BinId;
use super::error::DataError;

/// Bin ids for every predictor, one row per variable and one column per case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinMatrix {
    n_vars: usize,
    n_cases: usize,
    data: Vec<BinId>,
}

impl BinMatrix {
    /// Build a matrix from per-variable rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<BinId>>) -> Result<Self, DataError> {
        let n_vars = rows.len();
        let n_cases = rows.first().map(|r| r.len()).unwrap_or(0);

        let mut data = Vec::with_capacity(n_vars * n_cases);
        for (variable, row) in rows.into_iter().enumerate() {
            if row.len() != n_cases {
                return Err(DataError::RaggedBinMatrix {
                    variable,
                    expected: n_cases,
                    found: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self {
            n_vars,
            n_cases,
            data,
        })
    }

    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    pub fn n_cases(&self) -> usize {
        self.n_cases
    }

    /// All bin ids of one variable.
    ///
    /// # Panics
    /// If `variable >= n_vars()`.
    pub fn row(&self, variable: usize) -> &[BinId] {
        assert!(
            variable < self.n_vars,
            "variable {} out of range ({} variables)",
            variable,
            self.n_vars
        );
        let start = variable * self.n_cases;
        &self.data[start..start + self.n_cases]
    }

    /// Bin id of one case, or `None` when either index is out of range.
    pub fn get(&self, variable: usize, case: usize) -> Option<BinId> {
        if variable >= self.n_vars || case >= self.n_cases {
            return None;
        }
        Some(self.data[variable * self.n_cases + case])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[BinId]> + '_ {
        (0..self.n_vars).map(move |v| self.row(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_layout() {
        let m = BinMatrix::from_rows(vec![vec![0, 1, 1], vec![1, 0, 0]]).unwrap();
        assert_eq!(m.n_vars(), 2);
        assert_eq!(m.n_cases(), 3);
        assert_eq!(m.row(0), &[0, 1, 1]);
        assert_eq!(m.row(1), &[1, 0, 0]);
        assert_eq!(m.get(1, 0), Some(1));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = BinMatrix::from_rows(vec![vec![0, 1], vec![1]]).unwrap_err();
        assert!(matches!(
            err,
            DataError::RaggedBinMatrix {
                variable: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_empty_matrix() {
        let m = BinMatrix::from_rows(Vec::new()).unwrap();
        assert_eq!(m.n_vars(), 0);
        assert_eq!(m.rows().count(), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_row_out_of_range_panics() {
        let m = BinMatrix::from_rows(vec![vec![0, 1]]).unwrap();
        let _ = m.row(1);
    }
}
