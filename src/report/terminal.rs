//! Live terminal trace of the univariate screen and each selection round

use console::style;

use crate::pipeline::{RoundTrace, UnivariateScreen};

/// Print every candidate's univariate information and Fano bound.
pub fn print_univariate(names: &[String], screen: &UnivariateScreen) {
    for score in &screen.scores {
        println!(
            "      {} = {:.5}  {}",
            names[score.index],
            score.information,
            style(format!("({:.5})", score.fano_bound)).dim()
        );
    }
}

/// Print one round. With `verbose`, every candidate's evaluations are shown.
pub fn print_round(names: &[String], latest: usize, round: &RoundTrace, verbose: bool) {
    println!();
    println!(
        "    {} {}",
        style(format!("Round {}", round.round)).cyan().bold(),
        style(format!("latest candidate: {}", names[latest])).dim()
    );

    if verbose {
        for scan in &round.scans {
            let tested_thru = scan
                .starting_position
                .map_or_else(|| "-1".to_string(), |p| p.to_string());
            println!(
                "      Testing candidate {}  Starting score={:.5}  Tested thru {}",
                names[scan.index], scan.starting_score, tested_thru
            );
            for e in &scan.evaluations {
                println!(
                    "        With kept {} I(Y;X|Z)={:.5}  score={:.5}",
                    names[e.given], e.value, e.score
                );
            }
            println!("      {} = {:.5}", names[scan.index], scan.criterion);
        }
    }

    match round.added {
        Some(added) => println!(
            "    {} Added {} = {:.5}",
            style("✓").green().bold(),
            style(&names[added.index]).green(),
            added.criterion
        ),
        None => println!(
            "    {} Best remaining criterion {:.5} adds nothing, stopping",
            style("•").dim(),
            round.best_criterion
        ),
    }
}
