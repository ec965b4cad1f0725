//! The alpha-beta engine, wired to the morris rules.
//!
//! [`MorrisAlphaBeta`] plays full turns: the search works on encoded
//! states whose successors already include any mill removal, so when a
//! turn closes a mill the engine answers the follow up removal request
//! from the plan it already made instead of searching again.

use std::time::Duration;

use log::debug;
use rustc_hash::FxHashMap;

use crate::board::Color;
use crate::game::{Game, GameOptions, PlayerAction};

use super::alpha_beta::{AlphaBeta, SearchConfig, SearchDelegate};
use super::evaluators::{self, Evaluator};
use super::game_state::GameState;
use super::successors::SuccessorCache;
use super::transition;
use super::AiAlgorithm;

pub struct MorrisAlphaBeta {
    options: GameOptions,
    max_search_depth: Option<u32>,
    max_search_time: Option<Duration>,
    evaluators: Vec<Evaluator>,
    weights: Vec<i32>,
    successor_cache: SuccessorCache,
    score_cache: FxHashMap<GameState, i32>,
    pending_removal: Option<PlayerAction>,
    max_player: Color,
}

impl MorrisAlphaBeta {
    pub fn new(options: GameOptions) -> Self {
        Self::with_evaluators(
            options,
            evaluators::default_evaluators(),
            evaluators::DEFAULT_WEIGHTS.to_vec(),
        )
    }

    /// Builds an engine with a custom heuristic. An empty weight list
    /// weighs every evaluator at one.
    ///
    /// Panics when no evaluators are given or when the weights do not
    /// pair up with them.
    pub fn with_evaluators(
        options: GameOptions,
        evaluators: Vec<Evaluator>,
        weights: Vec<i32>,
    ) -> Self {
        assert!(!evaluators.is_empty(), "at least one evaluator is required");
        let weights = if weights.is_empty() {
            vec![1; evaluators.len()]
        } else {
            weights
        };
        assert_eq!(
            evaluators.len(),
            weights.len(),
            "evaluators and weights must pair up"
        );

        Self {
            options,
            max_search_depth: None,
            max_search_time: None,
            evaluators,
            weights,
            successor_cache: SuccessorCache::new(options),
            score_cache: FxHashMap::default(),
            pending_removal: None,
            max_player: Color::White,
        }
    }

    pub fn set_max_search_depth(&mut self, depth: u32) {
        self.max_search_depth = Some(depth);
    }

    pub fn set_max_search_time(&mut self, time: Duration) {
        self.max_search_time = Some(time);
    }

    fn search_config(&self) -> SearchConfig {
        let mut config = SearchConfig::default();
        if let Some(depth) = self.max_search_depth {
            config.max_search_depth = depth;
        }
        if let Some(time) = self.max_search_time {
            config.max_search_time = time;
        }
        config
    }

    fn loss_score(&self, loser: Color) -> i32 {
        if loser == self.max_player {
            i32::MIN
        } else {
            i32::MAX
        }
    }
}

impl AiAlgorithm for MorrisAlphaBeta {
    fn next_action(&mut self, game: &Game) -> PlayerAction {
        debug_assert_eq!(game.options(), self.options);

        // The removal finishing a mill was already decided by the
        // search that closed it.
        if let Some(removal) = self.pending_removal.take() {
            return removal;
        }

        self.max_player = game.current_player();
        let origin = GameState::from_game(game);
        let config = self.search_config();

        let best = {
            let mut search = AlphaBeta::with_config(&mut *self, config);
            let best = search.best_successor(&origin);
            debug!(
                "search finished: {} states, {} cutoffs, {} table hits, {} table entries",
                search.searched_state_count(),
                search.cutoff_count(),
                search.table_hits(),
                search.table_size()
            );
            best
        };

        let mut actions =
            transition::get_transition(self.options.game_type, origin, best).into_iter();
        let action = actions
            .next()
            .expect("a transition should contain at least one action");
        self.pending_removal = actions.next();
        action
    }
}

impl SearchDelegate<GameState, i32> for MorrisAlphaBeta {
    fn is_terminal(&mut self, state: &GameState) -> bool {
        let player = state.current_player();
        let on_board = state
            .decode_board(self.options.game_type)
            .piece_count(player);
        let in_hand = usize::from(state.pieces_in_hand(player));

        if on_board + in_hand <= 2 {
            let score = self.loss_score(player);
            self.score_cache.insert(*state, score);
            return true;
        }
        if in_hand > 0 {
            return false;
        }
        if on_board == 3 && self.options.jumps_allowed {
            return false;
        }
        if self.successor_cache.successors(state).is_empty() {
            // The player to move is walled in.
            let score = self.loss_score(player);
            self.score_cache.insert(*state, score);
            return true;
        }
        false
    }

    fn evaluate(&mut self, state: &GameState) -> i32 {
        if let Some(&score) = self.score_cache.get(state) {
            return score;
        }

        let board = state.decode_board(self.options.game_type);
        let max_player = self.max_player;
        let score: i32 = self
            .evaluators
            .iter()
            .zip(&self.weights)
            .map(|(evaluator, &weight)| weight * evaluator(&board, max_player))
            .sum();
        self.score_cache.insert(*state, score);
        score
    }

    fn successors(&mut self, state: &GameState) -> Vec<GameState> {
        self.successor_cache.successors(state)
    }
}
