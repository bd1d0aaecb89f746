//! Run configuration assembled from the command line

use std::path::PathBuf;

use super::args::Cli;
use crate::pipeline::{AnalysisOptions, Pruning};

/// Everything the pipeline needs to know about one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub data_file: PathBuf,
    pub n_indep: usize,
    pub dependent: String,
    pub analysis: AnalysisOptions,
    pub log_path: PathBuf,
    pub export_path: Option<PathBuf>,
    pub verbose: bool,
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            data_file: cli.datafile.clone(),
            n_indep: cli.n_indep,
            dependent: cli.depname.clone(),
            analysis: AnalysisOptions {
                dependent_mode: cli.depzero,
                predictor_mode: cli.indepzero,
                max_kept: cli.maxkept,
                pruning: if cli.exhaustive {
                    Pruning::Disabled
                } else {
                    Pruning::Enabled
                },
            },
            log_path: cli.log.clone(),
            export_path: cli.export.clone(),
            verbose: cli.verbose,
        }
    }
}
