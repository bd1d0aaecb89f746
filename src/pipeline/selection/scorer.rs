//! Incremental refresh of a single candidate's score against the kept set

use serde::Serialize;

use super::state::{CandidateState, KeptSet};
use crate::pipeline::information::InformationSource;

/// One conditional evaluation performed during a refresh
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    /// Kept-set position of the conditioning variable
    pub position: usize,
    /// Variable index of the conditioning variable
    pub given: usize,
    /// I(Y;X|Z) for this conditioning variable
    pub value: f64,
    /// Running minimum after this evaluation
    pub score: f64,
}

/// Advances candidate scores through kept variables they have not seen yet.
#[derive(Debug)]
pub struct CandidateScorer<'a, O> {
    source: &'a O,
}

impl<'a, O: InformationSource> CandidateScorer<'a, O> {
    pub fn new(source: &'a O) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &'a O {
        self.source
    }

    /// Bring `candidate` up to date with `kept`, stopping as soon as its score
    /// is at or below `bound`. Returns the resulting score.
    ///
    /// Conditioning on more variables can only lower the minimum, so once the
    /// score reaches the bound the candidate cannot beat it this round. The
    /// position reached is stored on the candidate and later calls resume
    /// from there.
    pub fn refresh(&self, candidate: &mut CandidateState, kept: &KeptSet, bound: f64) -> f64 {
        self.refresh_with(candidate, kept, bound, |_| {})
    }

    /// Same as [`refresh`](Self::refresh), reporting every evaluation to `on_evaluation`.
    pub fn refresh_with<F>(
        &self,
        candidate: &mut CandidateState,
        kept: &KeptSet,
        bound: f64,
        mut on_evaluation: F,
    ) -> f64
    where
        F: FnMut(Evaluation),
    {
        for position in candidate.next_position()..kept.len() {
            if candidate.score <= bound {
                break;
            }

            let given = kept[position].index;
            let value = self
                .source
                .conditional_mutual_information(candidate.index, given);
            if value < candidate.score {
                candidate.score = value;
            }
            // Recorded even when the score did not drop
            candidate.last_evaluated = Some(position);

            on_evaluation(Evaluation {
                position,
                given,
                value,
                score: candidate.score,
            });
        }

        candidate.score
    }
}
