//! Per-candidate scoring progress and the kept set

use serde::Serialize;

use crate::pipeline::information::InformationSource;

/// Incremental score of one candidate that has not been kept yet.
///
/// `score` is the minimum of the candidate's univariate information and its
/// conditional information given each kept variable at positions
/// `0..=last_evaluated`. It never increases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidateState {
    pub index: usize,
    pub score: f64,
    /// Kept-set position of the last conditioning variable tried
    pub last_evaluated: Option<usize>,
}

impl CandidateState {
    pub fn new(index: usize, univariate: f64) -> Self {
        Self {
            index,
            score: univariate,
            last_evaluated: None,
        }
    }

    /// First kept-set position not yet evaluated for this candidate.
    pub fn next_position(&self) -> usize {
        self.last_evaluated.map_or(0, |p| p + 1)
    }
}

/// Build the initial state of every candidate from its univariate information.
pub fn initialize_candidates<O: InformationSource>(source: &O) -> Vec<CandidateState> {
    (0..source.candidate_count())
        .map(|index| CandidateState::new(index, source.mutual_information(index)))
        .collect()
}

/// A selected variable and its criterion at the moment it was selected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeptVariable {
    pub index: usize,
    pub criterion: f64,
}

/// Variables selected so far, in selection order. Entries are never removed
/// or rewritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KeptSet {
    entries: Vec<KeptVariable>,
}

impl KeptSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, variable: KeptVariable) {
        self.entries.push(variable);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&KeptVariable> {
        self.entries.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeptVariable> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[KeptVariable] {
        &self.entries
    }

    /// Variable indices in selection order.
    pub fn indices(&self) -> Vec<usize> {
        self.entries.iter().map(|k| k.index).collect()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.entries.iter().any(|k| k.index == index)
    }
}

impl std::ops::Index<usize> for KeptSet {
    type Output = KeptVariable;

    fn index(&self, position: usize) -> &Self::Output {
        &self.entries[position]
    }
}

impl<'a> IntoIterator for &'a KeptSet {
    type Item = &'a KeptVariable;
    type IntoIter = std::slice::Iter<'a, KeptVariable>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_position() {
        let mut state = CandidateState::new(4, 0.2);
        assert_eq!(state.next_position(), 0);
        state.last_evaluated = Some(2);
        assert_eq!(state.next_position(), 3);
    }

    #[test]
    fn test_kept_set_preserves_order() {
        let mut kept = KeptSet::new();
        kept.push(KeptVariable {
            index: 3,
            criterion: 0.4,
        });
        kept.push(KeptVariable {
            index: 1,
            criterion: 0.1,
        });
        assert_eq!(kept.indices(), vec![3, 1]);
        assert_eq!(kept[1].criterion, 0.1);
        assert!(kept.contains(3));
        assert!(!kept.contains(0));
        assert_eq!(kept.get(2), None);
    }
}
