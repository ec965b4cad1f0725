//! Recovers the actions that turn one state into a successor state.
//!
//! The search works on encoded states, but the game loop speaks
//! [`PlayerAction`]s. Diffing the two boards tells us whether the turn
//! was a placement or a move and whether a mill took a piece.

use crate::board::{BoardLocation, GameType};
use crate::game::PlayerAction;

use super::game_state::GameState;

/// The one or two actions leading from `from` to `to`. The second
/// action, when present, is the mill removal finishing the turn.
///
/// Panics if `to` is not a successor of `from`.
pub fn get_transition(game_type: GameType, from: GameState, to: GameState) -> Vec<PlayerAction> {
    let player = from.current_player();
    let from_board = from.decode_board(game_type);
    let to_board = to.decode_board(game_type);

    let mut appeared = None;
    let mut vacated = None;
    let mut captured = None;

    for &location in from_board.locations() {
        let before = from_board.piece_at(location);
        let after = to_board.piece_at(location);
        if before == after {
            continue;
        }
        match (before, after) {
            (None, Some(color)) if color == player => {
                set_once(&mut appeared, location, from, to);
            }
            (Some(color), None) if color == player => {
                set_once(&mut vacated, location, from, to);
            }
            (Some(_), None) => {
                set_once(&mut captured, location, from, to);
            }
            _ => panic!("states are not adjacent: {:?} -> {:?}", from, to),
        }
    }

    let destination = match appeared {
        Some(destination) => destination,
        None => panic!("states are not adjacent: {:?} -> {:?}", from, to),
    };

    let first = match vacated {
        Some(source) => PlayerAction::Move {
            player,
            source,
            destination,
        },
        None => PlayerAction::Place {
            player,
            destination,
        },
    };

    let mut actions = vec![first];
    if let Some(source) = captured {
        actions.push(PlayerAction::Remove { player, source });
    }
    actions
}

fn set_once(slot: &mut Option<BoardLocation>, location: BoardLocation, from: GameState, to: GameState) {
    if slot.replace(location).is_some() {
        panic!("states are not adjacent: {:?} -> {:?}", from, to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Color};
    use crate::game::GameOptions;

    use crate::ai::successors::SuccessorCache;

    fn location(input: &str) -> BoardLocation {
        input.parse().unwrap()
    }

    fn encoded(pieces: &[(&str, Color)], player: Color, hands: [u8; 2]) -> GameState {
        let mut board = Board::new(GameType::ThreeMensMorris);
        for &(input, color) in pieces {
            board.add_piece(location(input), color).unwrap();
        }
        GameState::encode(&board, player, hands)
    }

    #[test]
    fn test_a_placement_is_recovered() {
        let from = encoded(&[], Color::White, [3, 3]);
        let to = encoded(&[("2b", Color::White)], Color::Black, [2, 3]);

        let actions = get_transition(GameType::ThreeMensMorris, from, to);
        assert_eq!(
            actions,
            vec![PlayerAction::Place {
                player: Color::White,
                destination: location("2b"),
            }]
        );
    }

    #[test]
    fn test_a_move_is_recovered() {
        let from = encoded(
            &[("1a", Color::Black), ("3c", Color::White)],
            Color::Black,
            [0, 0],
        );
        let to = encoded(
            &[("2a", Color::Black), ("3c", Color::White)],
            Color::White,
            [0, 0],
        );

        let actions = get_transition(GameType::ThreeMensMorris, from, to);
        assert_eq!(
            actions,
            vec![PlayerAction::Move {
                player: Color::Black,
                source: location("1a"),
                destination: location("2a"),
            }]
        );
    }

    #[test]
    fn test_a_mill_closing_turn_includes_the_removal() {
        let from = encoded(
            &[
                ("1a", Color::White),
                ("1b", Color::White),
                ("2b", Color::Black),
            ],
            Color::White,
            [1, 2],
        );
        let to = encoded(
            &[
                ("1a", Color::White),
                ("1b", Color::White),
                ("1c", Color::White),
            ],
            Color::Black,
            [0, 2],
        );

        let actions = get_transition(GameType::ThreeMensMorris, from, to);
        assert_eq!(
            actions,
            vec![
                PlayerAction::Place {
                    player: Color::White,
                    destination: location("1c"),
                },
                PlayerAction::Remove {
                    player: Color::White,
                    source: location("2b"),
                },
            ]
        );
    }

    #[test]
    fn test_every_generated_successor_has_a_transition() {
        let options = GameOptions {
            game_type: GameType::ThreeMensMorris,
            ..Default::default()
        };
        let mut cache = SuccessorCache::new(options);
        let from = encoded(
            &[
                ("1a", Color::White),
                ("1b", Color::White),
                ("2b", Color::Black),
                ("3c", Color::Black),
            ],
            Color::White,
            [1, 1],
        );

        for to in cache.successors(&from) {
            let actions = get_transition(options.game_type, from, to);
            assert!(!actions.is_empty());
            assert_eq!(actions[0].player(), Color::White);
        }
    }

    #[test]
    #[should_panic(expected = "not adjacent")]
    fn test_unrelated_states_panic() {
        let from = encoded(&[], Color::White, [3, 3]);
        let to = encoded(
            &[("1a", Color::White), ("1b", Color::White)],
            Color::Black,
            [1, 3],
        );
        get_transition(GameType::ThreeMensMorris, from, to);
    }

    #[test]
    #[should_panic(expected = "not adjacent")]
    fn test_a_state_pair_with_no_new_piece_panics() {
        let from = encoded(&[("1a", Color::White)], Color::White, [2, 3]);
        let to = encoded(&[], Color::Black, [2, 3]);
        get_transition(GameType::ThreeMensMorris, from, to);
    }
}
