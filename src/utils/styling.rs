//! Terminal styling utilities

use console::{style, Emoji};
use std::path::Path;

use crate::cli::RunConfig;
use crate::pipeline::{BinningMode, Pruning};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("I(Y;X|Z)").magenta().bold(),
        style("mi-stepwise").cyan().bold()
    );
    println!(
        "    {}",
        style("Stepwise predictor selection by mutual information").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(config: &RunConfig) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);
    let options = &config.analysis;

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(box_width - 20)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Input:  {:<39}│",
        FOLDER,
        truncate_path(&config.data_file, 38)
    );
    println!(
        "    │  {} Target: {:<39}│",
        TARGET,
        truncate_string(&config.dependent, 38)
    );
    println!(
        "    │  {} Log:    {:<39}│",
        SAVE,
        truncate_path(&config.log_path, 38)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Predictors:     {:<31}│",
        CHART,
        style(config.n_indep).yellow()
    );
    println!(
        "    │  {} Target split:   {:<31}│",
        CHART,
        style(describe_mode(options.dependent_mode)).yellow()
    );
    println!(
        "    │  {} Predictor split:{:<31}│",
        CHART,
        style(describe_mode(options.predictor_mode)).yellow()
    );
    println!(
        "    │  {} Max kept:       {:<31}│",
        CHART,
        style(options.max_kept).yellow()
    );
    if options.pruning == Pruning::Disabled {
        println!(
            "    │  {} Pruning:        {:<31}│",
            CHART,
            style("disabled").yellow()
        );
    }
    println!("    └{}┘", line);
    println!();
}

fn describe_mode(mode: BinningMode) -> &'static str {
    match mode {
        BinningMode::ZeroSplit => "at zero",
        BinningMode::OptimalPartition => "optimal partition",
    }
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print elapsed time for a step
pub fn print_step_time(elapsed: std::time::Duration) {
    println!(
        "      {}",
        style(format!("({:.2}s)", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Selection complete!").green().bold()
    );
    println!();
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let tail: String = s
            .chars()
            .rev()
            .take(max_len - 3)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("...{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_short() {
        assert_eq!(truncate_string("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_string_long_keeps_tail() {
        assert_eq!(truncate_string("abcdefghij", 6), "...hij");
    }
}
