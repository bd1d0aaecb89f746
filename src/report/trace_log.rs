//! Selection trace log
//!
//! The log is the reproducible record of a run: binning description, target
//! entropy, the univariate screen in file order and sorted, every round's
//! kept set and candidate criteria, and the final kept set. Identical inputs
//! always render byte-identical logs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::{Analysis, BinningMode, Dataset, KeptVariable};

/// Write the full trace to `out`.
pub fn write_trace<W: Write>(
    out: &mut W,
    dataset: &Dataset,
    analysis: &Analysis,
) -> std::io::Result<()> {
    let names = dataset.predictor_names();
    let dependent = dataset.dependent_name();
    let screen = &analysis.screen;
    let outcome = &analysis.outcome;

    match analysis.options.dependent_mode {
        BinningMode::ZeroSplit => writeln!(out, "{} has been split at zero", dependent)?,
        BinningMode::OptimalPartition => {
            writeln!(out, "{} has been optimally partitioned", dependent)?
        }
    }
    match analysis.options.predictor_mode {
        BinningMode::ZeroSplit => writeln!(out, "Independent variables have been split at zero")?,
        BinningMode::OptimalPartition => {
            writeln!(out, "Independent variables have been given an optimal split")?
        }
    }

    writeln!(out)?;
    writeln!(out)?;
    writeln!(
        out,
        "Mutual information of {}  (Entropy = {:.4})",
        dependent, screen.target_entropy
    )?;

    writeln!(out)?;
    writeln!(out, "Initial candidates, in order of appearance in data file")?;
    writeln!(out)?;
    writeln!(out, "                       Variable   Information   Fano's bound")?;
    for score in &screen.scores {
        writeln!(
            out,
            "{:>31} {:>11.5}  {:>13.5}",
            names[score.index], score.information, score.fano_bound
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Initial candidates, in order of decreasing mutual information")?;
    writeln!(out)?;
    writeln!(out, "                       Variable   Information")?;
    for score in screen.sorted_descending() {
        writeln!(out, "{:>31}   {:.5}", names[score.index], score.information)?;
    }

    let kept = outcome.kept.as_slice();
    for round in &outcome.rounds {
        writeln!(out)?;
        writeln!(out, "Variables so far                 Criterion")?;
        write_kept(out, names, &kept[..round.kept_len])?;
        writeln!(out)?;
        writeln!(out, "Searching for an additional candidate...")?;
        writeln!(out)?;
        writeln!(out, "                       Variable  Criterion")?;
        for scan in &round.scans {
            writeln!(out, "{:>31} {:>10.5}", names[scan.index], scan.criterion)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Final set                        Criterion")?;
    write_kept(out, names, kept)?;

    Ok(())
}

fn write_kept<W: Write>(
    out: &mut W,
    names: &[String],
    kept: &[KeptVariable],
) -> std::io::Result<()> {
    for k in kept {
        writeln!(out, "{:>31} {:>10.5}", names[k.index], k.criterion)?;
    }
    Ok(())
}

/// Render the trace into a string.
pub fn render_trace(dataset: &Dataset, analysis: &Analysis) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_trace(&mut buf, dataset, analysis);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write the trace log file, replacing any existing file.
pub fn write_trace_log(path: &Path, dataset: &Dataset, analysis: &Analysis) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Cannot open {} for writing", path.display()))?;
    let mut out = BufWriter::new(file);
    write_trace(&mut out, dataset, analysis)
        .and_then(|_| out.flush())
        .with_context(|| format!("Failed to write trace log to {}", path.display()))?;
    Ok(())
}
