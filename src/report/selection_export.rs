//! JSON export of a selection run

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{Analysis, AnalysisOptions, Dataset, RoundTrace, TerminationReason};

/// Metadata about the run
#[derive(Serialize)]
pub struct RunMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    pub version: String,
    pub input_file: String,
    pub dependent: String,
    pub options: AnalysisOptions,
}

/// A candidate's univariate statistics
#[derive(Serialize)]
pub struct CandidateEntry {
    pub index: usize,
    pub name: String,
    pub information: f64,
    pub fano_bound: f64,
}

/// A kept variable with its criterion at selection time
#[derive(Serialize)]
pub struct KeptEntry {
    pub index: usize,
    pub name: String,
    pub criterion: f64,
}

/// Complete export document
#[derive(Serialize)]
pub struct SelectionExport<'a> {
    pub metadata: RunMetadata,
    pub target_entropy: f64,
    pub candidates: Vec<CandidateEntry>,
    pub rounds: &'a [RoundTrace],
    pub kept: Vec<KeptEntry>,
    pub termination: TerminationReason,
}

impl<'a> SelectionExport<'a> {
    pub fn new(input_file: &Path, dataset: &Dataset, analysis: &'a Analysis) -> Self {
        let names = dataset.predictor_names();

        let candidates = analysis
            .screen
            .scores
            .iter()
            .map(|s| CandidateEntry {
                index: s.index,
                name: names[s.index].clone(),
                information: s.information,
                fano_bound: s.fano_bound,
            })
            .collect();

        let kept = analysis
            .outcome
            .kept
            .iter()
            .map(|k| KeptEntry {
                index: k.index,
                name: names[k.index].clone(),
                criterion: k.criterion,
            })
            .collect();

        Self {
            metadata: RunMetadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                input_file: input_file.display().to_string(),
                dependent: dataset.dependent_name().to_string(),
                options: analysis.options,
            },
            target_entropy: analysis.screen.target_entropy,
            candidates,
            rounds: &analysis.outcome.rounds,
            kept,
            termination: analysis.outcome.termination,
        }
    }
}

/// Write the run as pretty-printed JSON.
pub fn export_selection(
    input_file: &Path,
    dataset: &Dataset,
    analysis: &Analysis,
    output_path: &Path,
) -> Result<()> {
    let export = SelectionExport::new(input_file, dataset, analysis);

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize selection results to JSON")?;

    std::fs::write(output_path, json).with_context(|| {
        format!(
            "Failed to write selection results to {}",
            output_path.display()
        )
    })?;

    Ok(())
}
