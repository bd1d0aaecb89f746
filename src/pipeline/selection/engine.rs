//! Round-by-round forward selection
//!
//! The engine starts from the candidate with the largest univariate
//! information, then repeatedly scans the remaining candidates and keeps the
//! one whose minimum conditional information given the kept variables is
//! largest. The best score found so far in a round is the pruning bound for
//! every later candidate of that round.

use serde::Serialize;

use super::scorer::{CandidateScorer, Evaluation};
use super::state::{initialize_candidates, CandidateState, KeptSet, KeptVariable};
use crate::pipeline::information::InformationSource;

/// Starting value of a round's best criterion
pub const NO_CRITERION: f64 = -1.0e60;

/// Whether a round's running best is used to cut candidate evaluation short
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Pruning {
    #[default]
    Enabled,
    /// Every candidate is evaluated against every kept variable
    Disabled,
}

impl Pruning {
    fn bound(self, best: f64) -> f64 {
        match self {
            Pruning::Enabled => best,
            Pruning::Disabled => f64::NEG_INFINITY,
        }
    }
}

/// Parameters of a selection run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionConfig {
    /// Upper limit on the kept set size
    pub max_kept: usize,
    pub pruning: Pruning,
}

impl SelectionConfig {
    pub fn new(max_kept: usize) -> Self {
        Self {
            max_kept,
            pruning: Pruning::Enabled,
        }
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }
}

/// Why the selection loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TerminationReason {
    /// There was nothing to select from (or zero variables were requested)
    NoCandidates,
    /// The kept set reached the requested size
    MaxKeptReached,
    /// Every candidate was kept before the requested size was reached
    CandidatesExhausted,
    /// The best remaining candidate adds no information
    NoPositiveCriterion,
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::NoCandidates => write!(f, "no candidates"),
            TerminationReason::MaxKeptReached => write!(f, "requested maximum reached"),
            TerminationReason::CandidatesExhausted => write!(f, "all candidates kept"),
            TerminationReason::NoPositiveCriterion => {
                write!(f, "no remaining candidate adds information")
            }
        }
    }
}

/// What happened to one candidate during a round
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateScan {
    pub index: usize,
    /// Score before the refresh
    pub starting_score: f64,
    /// `last_evaluated` before the refresh
    pub starting_position: Option<usize>,
    pub evaluations: Vec<Evaluation>,
    /// Score after the refresh
    pub criterion: f64,
}

/// One scan over the remaining candidates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundTrace {
    /// 1-based; round 0 is the univariate pick
    pub round: usize,
    /// Kept set size when the round started
    pub kept_len: usize,
    pub scans: Vec<CandidateScan>,
    /// Best criterion found in the round
    pub best_criterion: f64,
    /// Variable added at the end of the round, if any
    pub added: Option<KeptVariable>,
}

/// Final kept set plus the trace of every round
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionOutcome {
    pub kept: KeptSet,
    pub rounds: Vec<RoundTrace>,
    pub termination: TerminationReason,
}

impl SelectionOutcome {
    pub fn kept_indices(&self) -> Vec<usize> {
        self.kept.indices()
    }
}

enum Phase {
    Scan,
    Select {
        position: Option<usize>,
        criterion: f64,
    },
    Terminated(TerminationReason),
}

/// Greedy forward selector over an [`InformationSource`].
pub struct SelectionEngine<'a, O> {
    scorer: CandidateScorer<'a, O>,
    config: SelectionConfig,
    /// Candidates not yet kept, in increasing index order
    pool: Vec<CandidateState>,
    kept: KeptSet,
    rounds: Vec<RoundTrace>,
    limit: usize,
}

impl<'a, O: InformationSource> SelectionEngine<'a, O> {
    /// Score every candidate by its univariate information.
    pub fn new(source: &'a O, config: SelectionConfig) -> Self {
        let pool = initialize_candidates(source);
        let limit = config.max_kept.min(pool.len());
        Self {
            scorer: CandidateScorer::new(source),
            config,
            pool,
            kept: KeptSet::new(),
            rounds: Vec::new(),
            limit,
        }
    }

    /// Candidates still in the pool with their current state.
    pub fn candidates(&self) -> &[CandidateState] {
        &self.pool
    }

    pub fn run(mut self) -> SelectionOutcome {
        let mut phase = self.seed();
        loop {
            phase = match phase {
                Phase::Scan => self.scan(),
                Phase::Select {
                    position,
                    criterion,
                } => self.select(position, criterion),
                Phase::Terminated(termination) => {
                    return SelectionOutcome {
                        kept: self.kept,
                        rounds: self.rounds,
                        termination,
                    };
                }
            };
        }
    }

    /// Keep the best univariate candidate. Earliest index wins ties.
    fn seed(&mut self) -> Phase {
        if self.limit == 0 {
            return Phase::Terminated(TerminationReason::NoCandidates);
        }

        let mut best: Option<(usize, f64)> = None;
        for (position, candidate) in self.pool.iter().enumerate() {
            if best.map_or(true, |(_, score)| candidate.score > score) {
                best = Some((position, candidate.score));
            }
        }

        match best {
            Some((position, _)) => {
                self.keep(position);
                self.after_addition()
            }
            None => Phase::Terminated(TerminationReason::NoCandidates),
        }
    }

    fn scan(&mut self) -> Phase {
        let mut best_crit = NO_CRITERION;
        let mut best_position = None;
        let mut scans = Vec::with_capacity(self.pool.len());

        for (position, candidate) in self.pool.iter_mut().enumerate() {
            let bound = self.config.pruning.bound(best_crit);
            let starting_score = candidate.score;
            let starting_position = candidate.last_evaluated;
            let mut evaluations = Vec::new();

            let criterion = self
                .scorer
                .refresh_with(candidate, &self.kept, bound, |e| evaluations.push(e));

            if criterion > best_crit {
                best_crit = criterion;
                best_position = Some(position);
            }

            scans.push(CandidateScan {
                index: candidate.index,
                starting_score,
                starting_position,
                evaluations,
                criterion,
            });
        }

        self.rounds.push(RoundTrace {
            round: self.rounds.len() + 1,
            kept_len: self.kept.len(),
            scans,
            best_criterion: best_crit,
            added: None,
        });

        Phase::Select {
            position: best_position,
            criterion: best_crit,
        }
    }

    fn select(&mut self, position: Option<usize>, criterion: f64) -> Phase {
        if criterion <= 0.0 {
            return Phase::Terminated(TerminationReason::NoPositiveCriterion);
        }
        let Some(position) = position else {
            return Phase::Terminated(TerminationReason::CandidatesExhausted);
        };

        let added = self.keep(position);
        if let Some(round) = self.rounds.last_mut() {
            round.added = Some(added);
        }
        self.after_addition()
    }

    /// Move a pool entry into the kept set with its current score as criterion.
    fn keep(&mut self, position: usize) -> KeptVariable {
        let winner = self.pool.remove(position);
        let kept = KeptVariable {
            index: winner.index,
            criterion: winner.score,
        };
        self.kept.push(kept);
        kept
    }

    fn after_addition(&self) -> Phase {
        if self.kept.len() < self.limit {
            Phase::Scan
        } else if self.pool.is_empty() && self.config.max_kept > self.kept.len() {
            Phase::Terminated(TerminationReason::CandidatesExhausted)
        } else {
            Phase::Terminated(TerminationReason::MaxKeptReached)
        }
    }
}

/// Run a full selection with the given configuration.
pub fn select_variables<O: InformationSource>(
    source: &O,
    config: SelectionConfig,
) -> SelectionOutcome {
    SelectionEngine::new(source, config).run()
}
