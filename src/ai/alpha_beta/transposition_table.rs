//! Transposition table for caching search results.

use rustc_hash::FxHashMap;
use std::hash::Hash;

use super::traits::SearchScore;

/// One cached search result: the score with its bound kind, the depth
/// it was established at, and the successor list ordered best first.
#[derive(Clone)]
pub struct TableEntry<S: Clone, C> {
    pub score: C,
    pub depth: u32,
    pub bound_type: BoundType,
    pub successors: Vec<S>,
}

/// How a cached score relates to the true value of the state. A score
/// published after a cutoff only bounds the true value from one side.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum BoundType {
    Exact,
    Lower,
    Upper,
}

pub struct TranspositionTable<S, C>
where
    S: Clone + Eq + Hash,
    C: SearchScore,
{
    table: FxHashMap<S, TableEntry<S, C>>,
    hits: usize,
    depth_rejected: usize,
    bound_rejected: usize,
    overwrites: usize,
}

impl<S, C> Default for TranspositionTable<S, C>
where
    S: Clone + Eq + Hash,
    C: SearchScore,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C> TranspositionTable<S, C>
where
    S: Clone + Eq + Hash,
    C: SearchScore,
{
    pub fn new() -> Self {
        Self {
            table: FxHashMap::default(),
            hits: 0,
            depth_rejected: 0,
            bound_rejected: 0,
            overwrites: 0,
        }
    }

    pub fn store(
        &mut self,
        state: S,
        score: C,
        depth: u32,
        bound_type: BoundType,
        successors: Vec<S>,
    ) {
        let entry = TableEntry {
            score,
            depth,
            bound_type,
            successors,
        };

        // Simple replacement strategy: always replace
        if self.table.insert(state, entry).is_some() {
            self.overwrites += 1;
        }
    }

    /// Probes for a cutoff and hands back the cached successor
    /// ordering either way. The score is `Some` only when the entry
    /// was established at the current depth or deeper and its bound
    /// answers the node outright; a shallower or mismatched entry
    /// still contributes its ordering.
    pub fn probe(&mut self, state: &S, depth: u32, alpha: C, beta: C) -> (Option<C>, Option<Vec<S>>) {
        if let Some(entry) = self.table.get(state) {
            let successors = if entry.successors.is_empty() {
                None
            } else {
                Some(entry.successors.clone())
            };

            if entry.depth >= depth {
                match entry.bound_type {
                    BoundType::Exact => {
                        self.hits += 1;
                        return (Some(entry.score), successors);
                    }
                    BoundType::Lower if entry.score >= beta => {
                        self.hits += 1;
                        return (Some(beta), successors);
                    }
                    BoundType::Upper if entry.score <= alpha => {
                        self.hits += 1;
                        return (Some(alpha), successors);
                    }
                    _ => {
                        self.bound_rejected += 1;
                    }
                }
            } else {
                self.depth_rejected += 1;
            }
            (None, successors)
        } else {
            (None, None)
        }
    }

    /// The front of the cached successor ordering, which the search
    /// keeps pointed at the best known continuation.
    pub fn best_successor(&self, state: &S) -> Option<&S> {
        self.table
            .get(state)
            .and_then(|entry| entry.successors.first())
    }

    pub fn get(&self, state: &S) -> Option<&TableEntry<S, C>> {
        self.table.get(state)
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.hits = 0;
        self.depth_rejected = 0;
        self.bound_rejected = 0;
        self.overwrites = 0;
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn size(&self) -> usize {
        self.table.len()
    }

    pub fn depth_rejected(&self) -> usize {
        self.depth_rejected
    }

    pub fn bound_rejected(&self) -> usize {
        self.bound_rejected
    }

    pub fn overwrites(&self) -> usize {
        self.overwrites
    }
}
