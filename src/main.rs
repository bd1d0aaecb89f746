//! mi-stepwise: Stepwise Predictor Selection CLI Tool
//!
//! Reads a table of cases, bins the first `n_indep` columns and a dependent
//! column, and keeps predictors one at a time by mutual information.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use mi_stepwise::cli::{Cli, RunConfig};
use mi_stepwise::pipeline::{load_dataset, Analysis};
use mi_stepwise::report::terminal::{print_round, print_univariate};
use mi_stepwise::report::{export_selection, write_trace_log, SelectionSummary};
use mi_stepwise::utils::{
    create_progress_bar, create_spinner, finish_with_success, print_banner, print_completion,
    print_config, print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = RunConfig::from(&cli);
    run(&config)
}

fn run(config: &RunConfig) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(config);

    // Step 1: Load dataset
    print_step_header(1, "Load Data");
    let step_start = Instant::now();
    let spinner = create_spinner("Reading data file...");
    let dataset = load_dataset(&config.data_file, config.n_indep, &config.dependent)?;
    finish_with_success(&spinner, "Dataset loaded");

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Cases: {}", dataset.n_cases());
    println!("      Columns: {}", dataset.names.len());
    println!("      Candidates: {}", dataset.predictors.len());
    println!("      Dependent: {}", dataset.dependent_name());
    print_step_time(step_start.elapsed());

    // Step 2: Binning, univariate screen and selection
    print_step_header(2, "Binning & Mutual Information");
    let step_start = Instant::now();
    let pb = create_progress_bar(dataset.predictors.len() as u64, "Univariate screen");
    let analysis = Analysis::run(&dataset, config.analysis, &pb)?;
    finish_with_success(&pb, "Univariate screen complete");

    println!(
        "      Entropy of {}: {:.4}",
        style(dataset.dependent_name()).bold(),
        analysis.screen.target_entropy
    );
    if config.verbose {
        print_univariate(dataset.predictor_names(), &analysis.screen);
    }
    print_step_time(step_start.elapsed());

    // Step 3: Selection trace
    print_step_header(3, "Stepwise Selection");
    let names = dataset.predictor_names();
    let kept = analysis.outcome.kept.as_slice();
    match kept.first() {
        Some(first) => println!(
            "    {} Starting with {} = {:.5}",
            style("✓").green().bold(),
            style(&names[first.index]).green(),
            first.criterion
        ),
        None => print_info("No candidates to select from"),
    }
    for round in &analysis.outcome.rounds {
        let latest = kept[round.kept_len - 1].index;
        print_round(names, latest, round, config.verbose);
    }

    // Step 4: Save results
    print_step_header(4, "Save Results");
    let step_start = Instant::now();
    write_trace_log(&config.log_path, &dataset, &analysis)?;
    print_success(&format!("Trace written to {}", config.log_path.display()));

    if let Some(export_path) = &config.export_path {
        export_selection(&config.data_file, &dataset, &analysis, export_path)?;
        print_success(&format!("Results exported to {}", export_path.display()));
    }
    print_step_time(step_start.elapsed());

    SelectionSummary::new(&dataset, &analysis).display();
    print_completion();

    Ok(())
}
