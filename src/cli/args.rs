//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::BinningMode;

/// mi-stepwise - Stepwise selection of binary-binned predictors by mutual information
#[derive(Parser, Debug)]
#[command(name = "mi-stepwise")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text file containing the data. The first line is variable names,
    /// subsequent lines are cases. Delimiters can be space, comma, or tab.
    pub datafile: PathBuf,

    /// Number of independent variables, starting with the first column
    #[arg(value_parser = validate_count)]
    pub n_indep: usize,

    /// Name of the dependent variable (case-insensitive).
    /// It must come AFTER the first n_indep variables.
    pub depname: String,

    /// If nonzero, the dependent variable is split >0 vs <=0.
    /// Otherwise it is split by optimal partition.
    #[arg(value_parser = parse_binning_mode, allow_negative_numbers = true)]
    pub depzero: BinningMode,

    /// Same as depzero, for all independent variables
    #[arg(value_parser = parse_binning_mode, allow_negative_numbers = true)]
    pub indepzero: BinningMode,

    /// Stepwise selection keeps at most this many predictors
    #[arg(value_parser = validate_count)]
    pub maxkept: usize,

    /// File the selection trace is written to
    #[arg(long, default_value = "MI_BIN.LOG")]
    pub log: PathBuf,

    /// Also write the run as JSON to this path
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Evaluate every candidate against every kept variable (no pruning).
    /// The result is identical, only slower.
    #[arg(long, default_value = "false")]
    pub exhaustive: bool,

    /// Print each candidate's conditional evaluations while selecting
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

/// Validator for counts that must be at least one
fn validate_count(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid count", s))?;

    if value == 0 {
        Err("count must be at least 1".to_string())
    } else {
        Ok(value)
    }
}

/// Parser for the zero-split flags
fn parse_binning_mode(s: &str) -> Result<BinningMode, String> {
    s.parse()
}
