//! A baseline strategy that picks uniformly among the legal actions.

use fastrand::Rng;

use crate::board::{BoardLocation, Color};
use crate::game::{ActionType, Game, PlayerAction};

use super::AiAlgorithm;

pub struct RandomAi {
    rng: Rng,
}

impl RandomAi {
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }

    /// A reproducible variant for tests and matchups.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }
}

impl Default for RandomAi {
    fn default() -> Self {
        Self::new()
    }
}

impl AiAlgorithm for RandomAi {
    fn next_action(&mut self, game: &Game) -> PlayerAction {
        let player = game.current_player();
        let candidates = match game.next_action_type() {
            ActionType::Place => placements(game, player),
            ActionType::Move => moves(game, player),
            ActionType::Remove => removals(game, player),
        };
        assert!(
            !candidates.is_empty(),
            "an unfinished game should offer at least one legal action"
        );
        candidates[self.rng.usize(..candidates.len())]
    }
}

fn placements(game: &Game, player: Color) -> Vec<PlayerAction> {
    empty_locations(game)
        .map(|destination| PlayerAction::Place {
            player,
            destination,
        })
        .collect()
}

fn moves(game: &Game, player: Color) -> Vec<PlayerAction> {
    let board = game.board();
    let mut actions = Vec::new();
    for &source in board.locations() {
        if board.piece_at(source) != Some(player) {
            continue;
        }
        for destination in empty_locations(game) {
            if board.is_adjacent(source, destination) || game.can_jump() {
                actions.push(PlayerAction::Move {
                    player,
                    source,
                    destination,
                });
            }
        }
    }
    actions
}

/// Mill pieces are out of reach while the opponent still has a piece
/// outside a mill.
fn removals(game: &Game, player: Color) -> Vec<PlayerAction> {
    let board = game.board();
    let opponent: Vec<BoardLocation> = board
        .locations()
        .iter()
        .copied()
        .filter(|&location| board.piece_at(location) == Some(player.opposite()))
        .collect();

    let free: Vec<BoardLocation> = opponent
        .iter()
        .copied()
        .filter(|&location| !board.is_part_of_mill(location))
        .collect();

    let takeable = if free.is_empty() { opponent } else { free };
    takeable
        .into_iter()
        .map(|source| PlayerAction::Remove { player, source })
        .collect()
}

fn empty_locations(game: &Game) -> impl Iterator<Item = BoardLocation> + '_ {
    let board = game.board();
    board
        .locations()
        .iter()
        .copied()
        .filter(move |&location| board.piece_at(location).is_none())
}
