//! Greedy forward selection by minimum conditional mutual information
//!
//! Each remaining candidate carries an incremental score (see [`CandidateState`])
//! that the [`CandidateScorer`] lowers as new kept variables are conditioned on.
//! The [`SelectionEngine`] runs the rounds and decides when to stop.

mod engine;
mod scorer;
mod state;

pub use engine::{
    select_variables, CandidateScan, Pruning, RoundTrace, SelectionConfig, SelectionEngine,
    SelectionOutcome, TerminationReason, NO_CRITERION,
};
pub use scorer::{CandidateScorer, Evaluation};
pub use state::{initialize_candidates, CandidateState, KeptSet, KeptVariable};
