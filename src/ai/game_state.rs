//! Compact bit encoding of a full game position.
//!
//! The search keeps millions of positions in its transposition table,
//! so positions are packed into a single `u64` instead of hashing whole
//! boards. The layout, from the least significant bit up:
//!
//! - bit 0: the player to move (white is `0`)
//! - bits 1 through 4: white's in hand count
//! - bits 5 through 8: black's in hand count
//! - bits 9 and up: one occupancy bit per location and color, white
//!   first, in [`location_index`](super::location_index) order
//!
//! The largest board needs 9 + 2 * 24 = 57 bits.

use std::fmt;

use crate::board::{Board, Color, GameType};
use crate::game::Game;

use super::location_index;

const HAND_MASK: u64 = 0xF;
const WHITE_HAND_SHIFT: u32 = 1;
const BLACK_HAND_SHIFT: u32 = 5;
const OCCUPANCY_SHIFT: u32 = 9;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameState(u64);

impl GameState {
    /// Packs a position. Panics if an in hand count does not fit its
    /// 4 bit field.
    pub fn encode(board: &Board, player: Color, pieces_in_hand: [u8; 2]) -> Self {
        let mut bits = u64::from(u8::from(player));

        for &count in &pieces_in_hand {
            assert!(
                u64::from(count) <= HAND_MASK,
                "in hand count {} does not fit the 4 bit field",
                count
            );
        }
        bits |= u64::from(pieces_in_hand[Color::White as usize]) << WHITE_HAND_SHIFT;
        bits |= u64::from(pieces_in_hand[Color::Black as usize]) << BLACK_HAND_SHIFT;

        let locations = location_index::ordered_locations(board.game_type());
        for (index, &location) in locations.iter().enumerate() {
            if let Some(color) = board.piece_at(location) {
                bits |= 1 << occupancy_bit(color, index, locations.len());
            }
        }

        GameState(bits)
    }

    pub fn from_game(game: &Game) -> Self {
        Self::encode(
            game.board(),
            game.current_player(),
            [
                game.pieces_in_hand(Color::White),
                game.pieces_in_hand(Color::Black),
            ],
        )
    }

    pub fn current_player(self) -> Color {
        Color::from((self.0 & 1) as u8)
    }

    pub fn pieces_in_hand(self, color: Color) -> u8 {
        let shift = match color {
            Color::White => WHITE_HAND_SHIFT,
            Color::Black => BLACK_HAND_SHIFT,
        };
        ((self.0 >> shift) & HAND_MASK) as u8
    }

    /// Rebuilds the board this state encodes. Panics if both colors
    /// claim the same location, which no legal encoding produces.
    pub fn decode_board(self, game_type: GameType) -> Board {
        let mut board = Board::new(game_type);
        let locations = location_index::ordered_locations(game_type);

        for (index, &location) in locations.iter().enumerate() {
            let white = self.0 >> occupancy_bit(Color::White, index, locations.len()) & 1 == 1;
            let black = self.0 >> occupancy_bit(Color::Black, index, locations.len()) & 1 == 1;
            let color = match (white, black) {
                (true, true) => panic!("location {} is claimed by both players", location),
                (true, false) => Color::White,
                (false, true) => Color::Black,
                (false, false) => continue,
            };
            board
                .add_piece(location, color)
                .expect("an indexed location should accept a piece on an empty board");
        }

        board
    }
}

fn occupancy_bit(color: Color, index: usize, location_count: usize) -> u32 {
    let offset = match color {
        Color::White => 0,
        Color::Black => location_count,
    };
    OCCUPANCY_SHIFT + (offset + index) as u32
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("player", &self.current_player())
            .field("white_hand", &self.pieces_in_hand(Color::White))
            .field("black_hand", &self.pieces_in_hand(Color::Black))
            .field("bits", &format_args!("{:#x}", self.0))
            .finish()
    }
}
