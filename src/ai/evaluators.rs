//! Heuristics for scoring a board from one player's point of view.
//!
//! Each evaluator measures a single feature. The engine combines them
//! as a weighted sum; the default set scores the player's mobility,
//! material, and mills against the opponent's.

use crate::board::{Board, Color};

/// A single board feature, scored for the given color.
pub type Evaluator = Box<dyn Fn(&Board, Color) -> i32>;

/// Weights matching [`default_evaluators`] position by position.
pub const DEFAULT_WEIGHTS: [i32; 6] = [10, 10, 10, -10, -10, -10];

pub fn default_evaluators() -> Vec<Evaluator> {
    vec![
        Box::new(mobility),
        Box::new(material),
        Box::new(mills),
        opponent(mobility),
        opponent(material),
        opponent(mills),
    ]
}

/// Number of moves the player could make by sliding along a line.
pub fn mobility(board: &Board, color: Color) -> i32 {
    let mut moves = 0;
    for &location in board.locations() {
        if board.piece_at(location) != Some(color) {
            continue;
        }
        moves += board
            .adjacent_locations(location)
            .iter()
            .filter(|&&neighbor| board.piece_at(neighbor).is_none())
            .count();
    }
    moves as i32
}

/// Number of pieces the player has on the board.
pub fn material(board: &Board, color: Color) -> i32 {
    board.piece_count(color) as i32
}

/// Number of complete mills the player holds.
pub fn mills(board: &Board, color: Color) -> i32 {
    board.mill_count(color) as i32
}

/// Scores `evaluator` for the other player.
pub fn opponent(evaluator: impl Fn(&Board, Color) -> i32 + 'static) -> Evaluator {
    Box::new(move |board, color| evaluator(board, color.opposite()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardLocation, GameType};

    fn board_with(pieces: &[(&str, Color)]) -> Board {
        let mut board = Board::new(GameType::ThreeMensMorris);
        for &(input, color) in pieces {
            let location: BoardLocation = input.parse().unwrap();
            board.add_piece(location, color).unwrap();
        }
        board
    }

    #[test]
    fn test_material_counts_pieces_on_the_board() {
        let board = board_with(&[
            ("1a", Color::White),
            ("1b", Color::White),
            ("2b", Color::Black),
        ]);
        assert_eq!(material(&board, Color::White), 2);
        assert_eq!(material(&board, Color::Black), 1);
    }

    #[test]
    fn test_mobility_counts_slides_to_empty_neighbors() {
        let board = board_with(&[
            ("1a", Color::White),
            ("1b", Color::White),
            ("2b", Color::Black),
        ]);
        // 1a slides to 2a; 1b slides to 1c; 2b has three open sides.
        assert_eq!(mobility(&board, Color::White), 2);
        assert_eq!(mobility(&board, Color::Black), 3);
    }

    #[test]
    fn test_mills_counts_complete_lines() {
        let board = board_with(&[
            ("1a", Color::White),
            ("1b", Color::White),
            ("1c", Color::White),
            ("3a", Color::Black),
        ]);
        assert_eq!(mills(&board, Color::White), 1);
        assert_eq!(mills(&board, Color::Black), 0);
    }

    #[test]
    fn test_opponent_swaps_the_point_of_view() {
        let board = board_with(&[("1a", Color::White), ("2b", Color::Black)]);
        let their_material = opponent(material);
        assert_eq!(their_material(&board, Color::White), 1);
        assert_eq!(
            their_material(&board, Color::Black),
            material(&board, Color::White)
        );
    }

    #[test]
    fn test_the_default_set_lines_up_with_its_weights() {
        assert_eq!(default_evaluators().len(), DEFAULT_WEIGHTS.len());
    }
}
