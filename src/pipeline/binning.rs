//! Discretization of continuous variables into a small number of bins
//!
//! Two strategies are supported: a fixed split at zero, and an equal-frequency
//! partition that never separates tied values. Both are deterministic and
//! depend only on their inputs.

use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;

use super::matrix::BinMatrix;

/// Bin identifier for a single case
pub type BinId = u8;

/// Number of bins used for every variable
pub const BIN_COUNT: usize = 2;

/// How a variable is discretized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinningMode {
    /// `> 0` goes to bin 1, everything else to bin 0
    ZeroSplit,
    /// Equal-frequency partition into [`BIN_COUNT`] bins
    OptimalPartition,
}

impl std::fmt::Display for BinningMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinningMode::ZeroSplit => write!(f, "zero-split"),
            BinningMode::OptimalPartition => write!(f, "optimal"),
        }
    }
}

impl std::str::FromStr for BinningMode {
    type Err = String;

    /// Parses the command-line flag form: any nonzero integer selects the
    /// zero split, zero selects the optimal partition.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let flag: i64 = s
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a valid flag (use 0 or 1)", s))?;
        Ok(if flag != 0 {
            BinningMode::ZeroSplit
        } else {
            BinningMode::OptimalPartition
        })
    }
}

/// Result of an equal-frequency partition
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Bin id for each input value, in input order
    pub bins: Vec<BinId>,
    /// Lower bounds (inclusive) of bins 1.., ascending
    pub thresholds: Vec<f64>,
}

impl Partition {
    /// Number of bins actually produced (may be fewer than requested).
    pub fn n_bins(&self) -> usize {
        if self.bins.is_empty() {
            0
        } else {
            self.thresholds.len() + 1
        }
    }
}

/// Split at zero: positive values go to bin 1.
pub fn split_at_zero(values: &[f64]) -> Vec<BinId> {
    values.iter().map(|&v| if v > 0.0 { 1 } else { 0 }).collect()
}

/// Partition `values` into at most `n_bins` bins of roughly equal counts.
///
/// Boundaries fall at `j * n / n_bins` in sorted order. A boundary landing in
/// a run of tied values moves to whichever end of the run is closer (the upper
/// end on a tie); if neither end is usable the boundary is dropped and fewer
/// bins are produced.
pub fn partition(values: &[f64], n_bins: usize) -> Partition {
    let n = values.len();
    if n == 0 {
        return Partition {
            bins: Vec::new(),
            thresholds: Vec::new(),
        };
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let requested = n_bins.clamp(1, n);
    let mut thresholds = Vec::with_capacity(requested - 1);
    let mut prev = 0usize;

    for j in 1..requested {
        let target = j * n / requested;
        if target <= prev {
            continue;
        }

        let boundary = if sorted[target - 1] < sorted[target] {
            Some(target)
        } else {
            let tied = sorted[target];
            let mut lower = target;
            while lower > 0 && sorted[lower - 1] == tied {
                lower -= 1;
            }
            let mut upper = target;
            while upper < n && sorted[upper] == tied {
                upper += 1;
            }

            let lower_ok = lower > prev;
            let upper_ok = upper < n;
            match (lower_ok, upper_ok) {
                (true, true) if target - lower < upper - target => Some(lower),
                (_, true) => Some(upper),
                (true, false) => Some(lower),
                (false, false) => None,
            }
        };

        if let Some(pos) = boundary {
            if pos > prev {
                thresholds.push(sorted[pos]);
                prev = pos;
            }
        }
    }

    let bins = values
        .iter()
        .map(|&v| thresholds.iter().filter(|&&t| v >= t).count() as BinId)
        .collect();

    Partition { bins, thresholds }
}

/// Discretize one variable.
pub fn bin_variable(values: &[f64], mode: BinningMode) -> Vec<BinId> {
    match mode {
        BinningMode::ZeroSplit => split_at_zero(values),
        BinningMode::OptimalPartition => partition(values, BIN_COUNT).bins,
    }
}

/// Discretize every predictor column in parallel and pack them into a matrix.
pub fn bin_predictors(columns: &[Vec<f64>], mode: BinningMode) -> Result<BinMatrix> {
    let rows: Vec<Vec<BinId>> = columns
        .par_iter()
        .map(|column| bin_variable(column, mode))
        .collect();

    Ok(BinMatrix::from_rows(rows)?)
}
