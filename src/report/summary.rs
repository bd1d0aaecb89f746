//! Selection summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{Analysis, Dataset, TerminationReason};

/// One kept variable as shown in the summary
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub rank: usize,
    pub name: String,
    pub criterion: f64,
    pub information: f64,
}

/// Summary of a selection run
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSummary {
    pub candidates: usize,
    pub cases: usize,
    pub rounds: usize,
    pub kept: Vec<SummaryRow>,
    pub termination: TerminationReason,
}

impl SelectionSummary {
    pub fn new(dataset: &Dataset, analysis: &Analysis) -> Self {
        let names = dataset.predictor_names();
        let kept = analysis
            .outcome
            .kept
            .iter()
            .enumerate()
            .map(|(i, k)| SummaryRow {
                rank: i + 1,
                name: names[k.index].clone(),
                criterion: k.criterion,
                information: analysis.screen.scores[k.index].information,
            })
            .collect();

        Self {
            candidates: names.len(),
            cases: dataset.n_cases(),
            rounds: analysis.outcome.rounds.len(),
            kept,
            termination: analysis.outcome.termination,
        }
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Variable").add_attribute(Attribute::Bold),
            Cell::new("Criterion").add_attribute(Attribute::Bold),
            Cell::new("Information").add_attribute(Attribute::Bold),
        ]);

        for row in &self.kept {
            table.add_row(vec![
                Cell::new(row.rank),
                Cell::new(&row.name).fg(Color::Green),
                Cell::new(format!("{:.5}", row.criterion)),
                Cell::new(format!("{:.5}", row.information)).fg(Color::Cyan),
            ]);
        }
        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("SELECTION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!(
            "      {} candidates, {} cases, {} round(s)",
            style(self.candidates).yellow().bold(),
            style(self.cases).yellow().bold(),
            style(self.rounds).yellow().bold()
        );
        println!(
            "      Stopped: {}",
            style(self.termination.to_string()).dim()
        );
        println!();

        // Indent the table
        for line in self.to_table().to_string().lines() {
            println!("    {}", line);
        }
    }
}
