//! Game playing strategies.
//!
//! [`MorrisAlphaBeta`] wires the board rules into the generic
//! [`alpha_beta`] searcher through a compact [`game_state`] encoding.
//! [`RandomAi`] picks uniformly among the legal actions and mostly
//! serves as a baseline opponent in tests.

pub mod alpha_beta;
pub mod evaluators;
pub mod game_state;
pub mod location_index;
pub mod morris_alpha_beta;
pub mod random;
pub mod successors;
pub mod transition;

pub use game_state::GameState;
pub use morris_alpha_beta::MorrisAlphaBeta;
pub use random::RandomAi;

use crate::game::{Game, PlayerAction};

/// A strategy that picks the next action for the player to move.
///
/// Implementations may keep state between calls, so a game should hold
/// one instance per engine controlled player.
pub trait AiAlgorithm {
    /// Returns the action the strategy wants to play in `game`. Must
    /// only be called while the game is still in progress.
    fn next_action(&mut self, game: &Game) -> PlayerAction;
}
