//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Subtrees whose value falls outside this window
//! can be pruned without affecting the final result. The algorithm finds the same successor as
//! plain minimax but explores far fewer states.
//!
//! The search is generic over the game: a [`SearchDelegate`] supplies terminal detection,
//! evaluation and successor generation, and any signed integer works as the score type.
//!
//! # Optimizations
//!
//! ## Iterative Deepening
//! Searches at increasing depths until the depth or time budget is spent. Results from
//! shallower searches survive in the transposition table and improve successor ordering at
//! deeper levels, which pays for the repeated shallow passes many times over.
//!
//! ## Transposition Table
//! Caches the score, depth, bound type (exact/upper/lower) and ordered successor list per
//! state. Revisited states are answered from the table when the cached depth suffices; the
//! cached ordering is reused either way. Whenever a successor improves the window it is
//! swapped to the front of the list, so the best known continuation is searched first on
//! the next visit.
//!
//! ## Shuffling
//! Optionally shuffles all successors behind the front one before searching a node, which
//! keeps play varied between otherwise equal continuations. Disable it for reproducible
//! searches.

use std::hash::Hash;
use std::time::{Duration, Instant};

use log::debug;
use rand::seq::SliceRandom;

use super::traits::{SearchDelegate, SearchScore};
use super::transposition_table::{BoundType, TranspositionTable};

/// Hard ceiling on the configurable time budget.
pub const MAX_SEARCH_TIME: Duration = Duration::from_secs(60);

pub const DEFAULT_SEARCH_TIME: Duration = Duration::from_secs(1);

/// Search limits and behavior switches.
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    /// Deepening stops after this depth. The time budget usually cuts
    /// the search short well before an unbounded depth is reached.
    pub max_search_depth: u32,
    /// Soft time budget: checked between deepening rounds, so a round
    /// that has started always runs to completion.
    pub max_search_time: Duration,
    pub shuffling_enabled: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_search_depth: u32::MAX,
            max_search_time: DEFAULT_SEARCH_TIME,
            shuffling_enabled: true,
        }
    }
}

/// Iterative deepening alpha-beta search over an abstract game.
pub struct AlphaBeta<D, S, C>
where
    D: SearchDelegate<S, C>,
    S: Clone + Eq + Hash,
    C: SearchScore,
{
    delegate: D,
    config: SearchConfig,
    table: TranspositionTable<S, C>,
    start_time: Instant,
    searched_state_count: usize,
    cutoff_count: usize,
}

impl<D, S, C> AlphaBeta<D, S, C>
where
    D: SearchDelegate<S, C>,
    S: Clone + Eq + Hash,
    C: SearchScore,
{
    pub fn new(delegate: D) -> Self {
        Self::with_config(delegate, SearchConfig::default())
    }

    pub fn with_config(delegate: D, mut config: SearchConfig) -> Self {
        config.max_search_time = config.max_search_time.min(MAX_SEARCH_TIME);
        Self {
            delegate,
            config,
            table: TranspositionTable::default(),
            start_time: Instant::now(),
            searched_state_count: 0,
            cutoff_count: 0,
        }
    }

    pub fn set_max_search_depth(&mut self, depth: u32) {
        self.config.max_search_depth = depth;
    }

    /// Times above [`MAX_SEARCH_TIME`] are clamped down to it.
    pub fn set_max_search_time(&mut self, time: Duration) {
        self.config.max_search_time = time.min(MAX_SEARCH_TIME);
    }

    pub fn set_shuffling_enabled(&mut self, enabled: bool) {
        self.config.shuffling_enabled = enabled;
    }

    pub fn searched_state_count(&self) -> usize {
        self.searched_state_count
    }

    pub fn cutoff_count(&self) -> usize {
        self.cutoff_count
    }

    pub fn table_hits(&self) -> usize {
        self.table.hits()
    }

    pub fn table_size(&self) -> usize {
        self.table.size()
    }

    pub fn table(&self) -> &TranspositionTable<S, C> {
        &self.table
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Runs iterative deepening from `origin` until the depth or time
    /// budget is spent, then returns the best immediate successor.
    ///
    /// # Panics
    ///
    /// Panics if no successor was recorded for `origin`: a terminal
    /// origin, an origin without successors, or a zero depth budget.
    /// Callers decide whether the game is over before searching.
    pub fn best_successor(&mut self, origin: &S) -> S {
        self.start_time = Instant::now();
        let mut depth = 1;
        while depth <= self.config.max_search_depth {
            self.search(origin, depth, C::MIN, C::MAX, true);
            debug!(
                "searched to depth {}: {} states visited, {} cutoffs, {} table hits",
                depth,
                self.searched_state_count,
                self.cutoff_count,
                self.table.hits()
            );
            if self.timed_out() || depth == self.config.max_search_depth {
                break;
            }
            depth += 1;
        }
        self.table
            .best_successor(origin)
            .expect("search should record a best successor for the origin state")
            .clone()
    }

    fn timed_out(&self) -> bool {
        self.start_time.elapsed() > self.config.max_search_time
    }

    fn search(&mut self, state: &S, depth: u32, mut alpha: C, mut beta: C, maximizing: bool) -> C {
        self.searched_state_count += 1;

        let (cutoff, cached_successors) = self.table.probe(state, depth, alpha, beta);
        if let Some(score) = cutoff {
            return score;
        }

        if depth == 0 || self.delegate.is_terminal(state) {
            let score = self.delegate.evaluate(state);
            self.table
                .store(state.clone(), score, depth, BoundType::Exact, Vec::new());
            return score;
        }

        let mut successors = match cached_successors {
            Some(successors) => successors,
            None => self.delegate.successors(state),
        };
        // The front successor is the best known one; only the tail is
        // shuffled so the ordering work is never thrown away.
        if self.config.shuffling_enabled && successors.len() > 1 {
            successors[1..].shuffle(&mut rand::thread_rng());
        }

        if maximizing {
            let mut bound_type = BoundType::Upper;
            for index in 0..successors.len() {
                let score = self.search(&successors[index], depth - 1, alpha, beta, false);
                if alpha < score {
                    alpha = score;
                    successors.swap(0, index);
                    bound_type = BoundType::Exact;
                }
                if beta <= alpha {
                    self.cutoff_count += 1;
                    self.table
                        .store(state.clone(), beta, depth, BoundType::Lower, successors);
                    return alpha;
                }
            }
            self.table
                .store(state.clone(), alpha, depth, bound_type, successors);
            alpha
        } else {
            let mut bound_type = BoundType::Lower;
            for index in 0..successors.len() {
                let score = self.search(&successors[index], depth - 1, alpha, beta, true);
                if score < beta {
                    beta = score;
                    successors.swap(0, index);
                    bound_type = BoundType::Exact;
                }
                if beta <= alpha {
                    self.cutoff_count += 1;
                    self.table
                        .store(state.clone(), alpha, depth, BoundType::Upper, successors);
                    return beta;
                }
            }
            self.table
                .store(state.clone(), beta, depth, bound_type, successors);
            beta
        }
    }
}
