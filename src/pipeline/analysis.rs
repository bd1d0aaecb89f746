//! End-to-end analysis of a loaded dataset: binning, univariate screen, selection

use anyhow::Result;
use indicatif::ProgressBar;
use serde::Serialize;

use super::binning::{bin_predictors, bin_variable, BinId, BinningMode};
use super::information::BinnedInformation;
use super::loader::Dataset;
use super::matrix::BinMatrix;
use super::selection::{select_variables, Pruning, SelectionConfig, SelectionOutcome};
use super::univariate::UnivariateScreen;

/// Settings for one analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisOptions {
    pub dependent_mode: BinningMode,
    pub predictor_mode: BinningMode,
    pub max_kept: usize,
    pub pruning: Pruning,
}

/// Everything produced by a run, ready for reporting
#[derive(Debug, Clone)]
pub struct Analysis {
    pub options: AnalysisOptions,
    pub dependent_bins: Vec<BinId>,
    pub predictor_bins: BinMatrix,
    pub screen: UnivariateScreen,
    pub outcome: SelectionOutcome,
}

impl Analysis {
    /// Bin the dataset and run the selection. `pb` tracks the univariate pass.
    pub fn run(dataset: &Dataset, options: AnalysisOptions, pb: &ProgressBar) -> Result<Self> {
        let dependent_bins = bin_variable(&dataset.dependent, options.dependent_mode);
        let predictor_bins = bin_predictors(&dataset.predictors, options.predictor_mode)?;

        let source = BinnedInformation::new(&dependent_bins, &predictor_bins);
        let screen = UnivariateScreen::compute(&source, pb);
        let config = SelectionConfig::new(options.max_kept).with_pruning(options.pruning);
        let outcome = select_variables(&source, config);

        Ok(Self {
            options,
            dependent_bins,
            predictor_bins,
            screen,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        // y is positive exactly when x0 is; x1 is noise; x2 copies x0
        let x0 = vec![1.0, -1.0, 2.0, -2.0, 3.0, -3.0, 0.5, -0.5];
        let x1 = vec![1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0];
        let x2 = x0.clone();
        let y = vec![0.3, -0.1, 0.2, -0.4, 0.9, -0.2, 0.1, -0.3];
        Dataset {
            names: vec!["x0".into(), "x1".into(), "x2".into(), "y".into()],
            predictors: vec![x0, x1, x2],
            dependent: y,
            dependent_column: 3,
        }
    }

    #[test]
    fn test_redundant_copy_is_not_kept() {
        let options = AnalysisOptions {
            dependent_mode: BinningMode::ZeroSplit,
            predictor_mode: BinningMode::ZeroSplit,
            max_kept: 3,
            pruning: Pruning::Enabled,
        };
        let analysis = Analysis::run(&dataset(), options, &ProgressBar::hidden()).unwrap();

        assert_eq!(analysis.predictor_bins.n_vars(), 3);
        assert_eq!(analysis.dependent_bins.len(), 8);
        // x0 and x2 tie on information; the earlier one is kept first, and
        // neither of the others adds anything once x0 is known
        assert_eq!(analysis.outcome.kept_indices(), vec![0]);
    }
}
