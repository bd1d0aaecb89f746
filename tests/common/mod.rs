//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::cell::RefCell;
use std::io::Write;
use std::path::PathBuf;

use mi_stepwise::pipeline::{BinId, BinMatrix, InformationSource, KeptVariable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::TempDir;

/// Information scores given by explicit tables; records every conditional call.
///
/// Conditional values not listed fall back to the univariate value of the
/// candidate.
pub struct TableSource {
    pub univariate: Vec<f64>,
    pub conditional: Vec<((usize, usize), f64)>,
    pub calls: RefCell<Vec<(usize, usize)>>,
}

impl TableSource {
    pub fn new(univariate: &[f64]) -> Self {
        Self {
            univariate: univariate.to_vec(),
            conditional: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Set I(Y;candidate|given).
    pub fn with(mut self, candidate: usize, given: usize, value: f64) -> Self {
        self.conditional.push(((candidate, given), value));
        self
    }

    pub fn calls(&self) -> Vec<(usize, usize)> {
        self.calls.borrow().clone()
    }
}

impl InformationSource for TableSource {
    fn candidate_count(&self) -> usize {
        self.univariate.len()
    }

    fn mutual_information(&self, candidate: usize) -> f64 {
        self.univariate[candidate]
    }

    fn conditional_mutual_information(&self, candidate: usize, given: usize) -> f64 {
        self.calls.borrow_mut().push((candidate, given));
        self.conditional
            .iter()
            .find(|(key, _)| *key == (candidate, given))
            .map(|(_, v)| *v)
            .unwrap_or(self.univariate[candidate])
    }
}

/// Straightforward forward selection: every round recomputes each remaining
/// candidate's minimum over its univariate value and all kept variables.
pub fn reference_selection<O: InformationSource>(
    source: &O,
    max_kept: usize,
) -> Vec<KeptVariable> {
    let n = source.candidate_count();
    let limit = max_kept.min(n);
    let mut kept: Vec<KeptVariable> = Vec::new();
    if limit == 0 {
        return kept;
    }

    let mut best: Option<KeptVariable> = None;
    for index in 0..n {
        let score = source.mutual_information(index);
        if best.map_or(true, |b| score > b.criterion) {
            best = Some(KeptVariable { index, criterion: score });
        }
    }
    kept.push(best.unwrap());

    while kept.len() < limit {
        let mut best_crit = -1.0e60;
        let mut best_index = None;
        for index in 0..n {
            if kept.iter().any(|k| k.index == index) {
                continue;
            }
            let mut score = source.mutual_information(index);
            for k in &kept {
                score = score.min(source.conditional_mutual_information(index, k.index));
            }
            if score > best_crit {
                best_crit = score;
                best_index = Some(index);
            }
        }
        if best_crit <= 0.0 {
            break;
        }
        kept.push(KeptVariable {
            index: best_index.unwrap(),
            criterion: best_crit,
        });
    }

    kept
}

/// Random binary problem: a target plus predictors that each copy the target
/// with their own noise rate, some of them near-duplicates of each other.
pub fn random_bins(seed: u64, n_vars: usize, n_cases: usize) -> (Vec<BinId>, BinMatrix) {
    let mut rng = StdRng::seed_from_u64(seed);
    let target: Vec<BinId> = (0..n_cases).map(|_| rng.gen_range(0..2)).collect();

    let mut rows: Vec<Vec<BinId>> = Vec::with_capacity(n_vars);
    for v in 0..n_vars {
        let flip = rng.gen::<f64>() * 0.5;
        let base: Vec<BinId> = if v > 0 && rng.gen_bool(0.3) {
            rows[rng.gen_range(0..v)].clone()
        } else {
            target.clone()
        };
        let row = base
            .iter()
            .map(|&b| if rng.gen_bool(flip) { 1 - b } else { b })
            .collect();
        rows.push(row);
    }

    (target, BinMatrix::from_rows(rows).unwrap())
}

/// Random continuous columns plus a dependent column driven by the first two.
pub fn random_columns(seed: u64, n_vars: usize, n_cases: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let columns: Vec<Vec<f64>> = (0..n_vars)
        .map(|_| (0..n_cases).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect())
        .collect();
    let dependent = (0..n_cases)
        .map(|i| {
            let a = columns.first().map_or(0.0, |c| c[i]);
            let b = columns.get(1).map_or(0.0, |c| c[i]);
            a + 0.5 * b + (rng.gen::<f64>() - 0.5) * 0.3
        })
        .collect();
    (columns, dependent)
}

/// Write a data table with the given header and rows, fields joined by `sep`.
pub fn write_table(header: &[&str], rows: &[Vec<f64>], sep: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("vars.txt");

    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{}", header.join(sep)).unwrap();
    for row in rows {
        let fields: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(file, "{}", fields.join(sep)).unwrap();
    }

    (temp_dir, path)
}

/// Write raw text as a data file.
pub fn write_text(text: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("vars.txt");
    std::fs::write(&path, text).unwrap();
    (temp_dir, path)
}

/// Columns to rows.
pub fn transpose(columns: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = columns.first().map_or(0, |c| c.len());
    (0..n).map(|i| columns.iter().map(|c| c[i]).collect()).collect()
}
