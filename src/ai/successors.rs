//! Legal successor generation over encoded states.
//!
//! A successor covers a full turn: when a placement or move closes a
//! mill, each legal removal becomes its own successor state, so the
//! search never sees a half finished turn.

use rustc_hash::FxHashMap;

use crate::board::{Board, BoardLocation, Color};
use crate::game::GameOptions;

use super::game_state::GameState;

/// Generates successors and remembers them, since the search asks
/// about the same states over and over across deepening rounds.
pub struct SuccessorCache {
    options: GameOptions,
    cache: FxHashMap<GameState, Vec<GameState>>,
}

impl SuccessorCache {
    pub fn new(options: GameOptions) -> Self {
        Self {
            options,
            cache: FxHashMap::default(),
        }
    }

    pub fn successors(&mut self, state: &GameState) -> Vec<GameState> {
        if let Some(successors) = self.cache.get(state) {
            return successors.clone();
        }
        let successors = self.generate(state);
        self.cache.insert(*state, successors.clone());
        successors
    }

    pub fn size(&self) -> usize {
        self.cache.len()
    }

    fn generate(&self, state: &GameState) -> Vec<GameState> {
        let board = state.decode_board(self.options.game_type);
        let player = state.current_player();
        let placing = state.pieces_in_hand(player) > 0;

        let (own, empty, removable) = partition_locations(&board, player);

        let mut successors = Vec::new();
        if placing {
            let mut hands = [
                state.pieces_in_hand(Color::White),
                state.pieces_in_hand(Color::Black),
            ];
            hands[player as usize] -= 1;

            for &destination in &empty {
                let mut next = board.clone();
                next.add_piece(destination, player)
                    .expect("an empty location should accept a placement");
                push_turn(&mut successors, next, destination, player, hands, &removable);
            }
        } else {
            let hands = [0, 0];
            let may_jump = self.options.jumps_allowed && board.piece_count(player) <= 3;

            for &source in &own {
                for &destination in &empty {
                    if !board.is_adjacent(source, destination) && !may_jump {
                        continue;
                    }
                    let mut next = board.clone();
                    next.move_piece(source, destination)
                        .expect("a move to an empty location should apply cleanly");
                    push_turn(&mut successors, next, destination, player, hands, &removable);
                }
            }
        }

        successors
    }
}

/// Splits the board into the player's pieces, the empty locations, and
/// the opponent pieces a mill may take. Pieces inside a mill are safe
/// unless the opponent has nothing else to give.
fn partition_locations(
    board: &Board,
    player: Color,
) -> (Vec<BoardLocation>, Vec<BoardLocation>, Vec<BoardLocation>) {
    let mut own = Vec::new();
    let mut empty = Vec::new();
    let mut free_opponent = Vec::new();
    let mut all_opponent = Vec::new();

    for &location in board.locations() {
        match board.piece_at(location) {
            Some(color) if color == player => own.push(location),
            Some(_) => {
                all_opponent.push(location);
                if !board.is_part_of_mill(location) {
                    free_opponent.push(location);
                }
            }
            None => empty.push(location),
        }
    }

    let removable = if free_opponent.is_empty() {
        all_opponent
    } else {
        free_opponent
    };
    (own, empty, removable)
}

/// Encodes the finished turn. A mill at `destination` fans out into
/// one successor per removable opponent piece.
fn push_turn(
    successors: &mut Vec<GameState>,
    board: Board,
    destination: BoardLocation,
    player: Color,
    hands: [u8; 2],
    removable: &[BoardLocation],
) {
    let opponent = player.opposite();
    if board.is_part_of_mill(destination) {
        for &capture in removable {
            let mut next = board.clone();
            next.remove_piece(capture)
                .expect("a removable location should hold an opponent piece");
            successors.push(GameState::encode(&next, opponent, hands));
        }
    } else {
        successors.push(GameState::encode(&board, opponent, hands));
    }
}
