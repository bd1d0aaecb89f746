//! Univariate screen of every candidate against the target
//!
//! Produces the diagnostic table printed before selection starts: each
//! candidate's mutual information with the target and its Fano bound.

use indicatif::ProgressBar;
use serde::Serialize;

use super::information::{entropy, error_entropy, fano_bound, BinnedInformation, InformationSource};

/// Univariate statistics of one candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnivariateScore {
    pub index: usize,
    /// I(Y;X) in nats
    pub information: f64,
    /// Fano bound in bits
    pub fano_bound: f64,
}

/// Target entropy plus per-candidate statistics, in file order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnivariateScreen {
    pub target_entropy: f64,
    pub scores: Vec<UnivariateScore>,
}

impl UnivariateScreen {
    /// Score every candidate, advancing `pb` once per candidate.
    pub fn compute(source: &BinnedInformation<'_>, pb: &ProgressBar) -> Self {
        let dependent = source.dependent();
        let target_entropy = entropy(dependent);

        let scores = (0..source.candidate_count())
            .map(|index| {
                let predictor = source.predictors().row(index);
                let information = source.mutual_information(index);
                let bound = fano_bound(
                    target_entropy,
                    information,
                    error_entropy(dependent, predictor),
                );
                pb.inc(1);
                UnivariateScore {
                    index,
                    information,
                    fano_bound: bound,
                }
            })
            .collect();

        Self {
            target_entropy,
            scores,
        }
    }

    /// Scores by decreasing information; equal values keep file order.
    pub fn sorted_descending(&self) -> Vec<UnivariateScore> {
        let mut sorted = self.scores.clone();
        sorted.sort_by(|a, b| b.information.total_cmp(&a.information));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::matrix::BinMatrix;

    #[test]
    fn test_screen_perfect_and_useless_predictors() {
        let y = vec![0, 1, 0, 1, 1, 0];
        let m = BinMatrix::from_rows(vec![
            vec![0, 0, 1, 1, 0, 1], // unrelated
            vec![0, 1, 0, 1, 1, 0], // copy of y
        ])
        .unwrap();
        let source = BinnedInformation::new(&y, &m);

        let screen = UnivariateScreen::compute(&source, &ProgressBar::hidden());
        assert!((screen.target_entropy - std::f64::consts::LN_2).abs() < 1e-12);
        assert_eq!(screen.scores.len(), 2);

        // A copy carries the full entropy, agrees on every case, and leaves no error
        let copy = screen.scores[1];
        assert!((copy.information - screen.target_entropy).abs() < 1e-12);
        assert!(copy.fano_bound < 1e-12);

        let sorted = screen.sorted_descending();
        assert_eq!(sorted[0].index, 1);
        assert_eq!(sorted[1].index, 0);
    }

    #[test]
    fn test_sorted_descending_is_stable_on_ties() {
        let screen = UnivariateScreen {
            target_entropy: 0.5,
            scores: vec![
                UnivariateScore { index: 0, information: 0.1, fano_bound: 0.0 },
                UnivariateScore { index: 1, information: 0.2, fano_bound: 0.0 },
                UnivariateScore { index: 2, information: 0.1, fano_bound: 0.0 },
            ],
        };
        let order: Vec<usize> = screen.sorted_descending().iter().map(|s| s.index).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }
}
