use log::debug;

use crate::board::{Board, Color};

use super::action::{ActionType, PlayerAction};
use super::options::GameOptions;

/// Represents the state and control of a mill game: the board, whose
/// turn it is, what kind of action is expected next, and the pieces
/// each player still has in hand.
pub struct Game {
    options: GameOptions,
    board: Board,
    pieces_in_hand: [u8; 2],
    current_player: Color,
    next_action: ActionType,
    winner: Option<Color>,
    history: Vec<PlayerAction>,
}

impl Game {
    pub fn new(options: GameOptions) -> Self {
        let initial_pieces = options.game_type.initial_piece_count();
        let mut game = Self {
            options,
            board: Board::new(options.game_type),
            pieces_in_hand: [initial_pieces; 2],
            current_player: Color::White,
            next_action: ActionType::Place,
            winner: None,
            history: Vec::new(),
        };
        game.update_game_state();
        game
    }

    pub fn options(&self) -> GameOptions {
        self.options
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn next_action_type(&self) -> ActionType {
        self.next_action
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn pieces_in_hand(&self, color: Color) -> u8 {
        self.pieces_in_hand[color as usize]
    }

    pub fn history(&self) -> &[PlayerAction] {
        &self.history
    }

    /// True if the current player may fly pieces to any empty location
    /// rather than sliding them along board lines.
    pub fn can_jump(&self) -> bool {
        self.options.jumps_allowed
            && self.next_action == ActionType::Move
            && self.board.piece_count(self.current_player) <= 3
    }

    /// Checks an action against the full rules: the right player, the
    /// expected action kind, and the board level constraints.
    pub fn can_execute(&self, action: &PlayerAction) -> bool {
        if self.is_over() {
            debug!("rejecting {}: the game is over", action);
            return false;
        }
        if action.action_type() != self.next_action {
            debug!("rejecting {}: expected a {} action", action, self.next_action);
            return false;
        }
        if action.player() != self.current_player {
            debug!("rejecting {}: it is {}'s turn", action, self.current_player);
            return false;
        }
        match *action {
            PlayerAction::Place { destination, .. } => {
                if self.pieces_in_hand(self.current_player) == 0 {
                    debug!("rejecting {}: no pieces left in hand", action);
                    return false;
                }
                if !self.board.is_valid_location(destination)
                    || self.board.piece_at(destination).is_some()
                {
                    debug!("rejecting {}: destination is not a free location", action);
                    return false;
                }
            }
            PlayerAction::Move {
                source,
                destination,
                ..
            } => {
                if self.board.piece_at(source) != Some(self.current_player) {
                    debug!("rejecting {}: no own piece at the source", action);
                    return false;
                }
                if !self.board.is_valid_location(destination)
                    || self.board.piece_at(destination).is_some()
                {
                    debug!("rejecting {}: destination is not a free location", action);
                    return false;
                }
                if !self.board.is_adjacent(source, destination) && !self.can_jump() {
                    debug!("rejecting {}: locations are not connected", action);
                    return false;
                }
            }
            PlayerAction::Remove { source, .. } => {
                if self.board.piece_at(source) != Some(self.current_player.opposite()) {
                    debug!("rejecting {}: no opponent piece at the source", action);
                    return false;
                }
                if self.board.is_part_of_mill(source) && self.opponent_has_free_piece() {
                    debug!("rejecting {}: mill pieces are protected while free pieces remain", action);
                    return false;
                }
            }
        }
        true
    }

    /// Applies an action the current player is allowed to take. The
    /// caller must check `can_execute` first; executing an invalid
    /// action is a programming error.
    pub fn execute(&mut self, action: PlayerAction) {
        assert!(self.can_execute(&action), "cannot execute action: {}", action);
        action
            .apply_to(&mut self.board)
            .expect("a validated action should apply cleanly");
        if action.action_type() == ActionType::Place {
            self.pieces_in_hand[action.player() as usize] -= 1;
        }
        self.history.push(action);
        self.update_game_state();
    }

    /// Takes back the most recent action and returns it, or `None` if
    /// nothing has been played yet.
    pub fn undo(&mut self) -> Option<PlayerAction> {
        let action = self.history.pop()?;
        action
            .undo_on(&mut self.board)
            .expect("an executed action should undo cleanly");
        if action.action_type() == ActionType::Place {
            self.pieces_in_hand[action.player() as usize] += 1;
        }
        self.update_game_state();
        Some(action)
    }

    /// Recomputes turn, expected action and winner from the last
    /// action in the history. Running the same derivation after both
    /// execute and undo keeps the two paths from drifting apart.
    fn update_game_state(&mut self) {
        self.winner = None;
        let last_action = match self.history.last().copied() {
            Some(action) => action,
            None => {
                self.current_player = if self.options.white_starts {
                    Color::White
                } else {
                    Color::Black
                };
                self.next_action = ActionType::Place;
                return;
            }
        };

        // A freshly closed mill grants the acting player a removal
        // before the turn passes on.
        if let Some(mill_location) = last_action.mill_location() {
            if self.board.is_part_of_mill(mill_location) {
                self.current_player = last_action.player();
                self.next_action = ActionType::Remove;
                return;
            }
        }

        let opponent = last_action.player().opposite();
        self.current_player = opponent;
        self.next_action = if self.pieces_in_hand(opponent) > 0 {
            ActionType::Place
        } else {
            ActionType::Move
        };
        if self.current_player_has_lost() {
            self.winner = Some(opponent.opposite());
        }
    }

    /// A player loses with two pieces left in total, or with no legal
    /// move once their hand is empty.
    fn current_player_has_lost(&self) -> bool {
        let player = self.current_player;
        let on_board = self.board.piece_count(player);
        let in_hand = self.pieces_in_hand(player) as usize;
        if on_board + in_hand <= 2 {
            return true;
        }
        if in_hand > 0 {
            return false;
        }
        if on_board == 3 && self.options.jumps_allowed {
            return false;
        }
        !self.board.locations().iter().any(|&location| {
            self.board.piece_at(location) == Some(player)
                && self
                    .board
                    .adjacent_locations(location)
                    .iter()
                    .any(|&neighbor| self.board.piece_at(neighbor).is_none())
        })
    }

    fn opponent_has_free_piece(&self) -> bool {
        let opponent = self.current_player.opposite();
        self.board.locations().iter().any(|&location| {
            self.board.piece_at(location) == Some(opponent) && !self.board.is_part_of_mill(location)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardLocation, GameType};

    fn place(player: Color, destination: &str) -> PlayerAction {
        PlayerAction::Place {
            player,
            destination: destination.parse().unwrap(),
        }
    }

    fn shift(player: Color, source: &str, destination: &str) -> PlayerAction {
        PlayerAction::Move {
            player,
            source: source.parse().unwrap(),
            destination: destination.parse().unwrap(),
        }
    }

    fn remove(player: Color, source: &str) -> PlayerAction {
        PlayerAction::Remove {
            player,
            source: source.parse().unwrap(),
        }
    }

    fn three_mens_morris(jumps_allowed: bool) -> GameOptions {
        GameOptions {
            game_type: GameType::ThreeMensMorris,
            jumps_allowed,
            white_starts: true,
        }
    }

    #[test]
    fn test_new_game_expects_a_white_placement() {
        let game = Game::new(GameOptions::default());
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.next_action_type(), ActionType::Place);
        assert_eq!(game.pieces_in_hand(Color::White), 9);
        assert_eq!(game.pieces_in_hand(Color::Black), 9);
        assert!(!game.is_over());
    }

    #[test]
    fn test_black_starts_when_configured() {
        let options = GameOptions {
            white_starts: false,
            ..GameOptions::default()
        };
        let game = Game::new(options);
        assert_eq!(game.current_player(), Color::Black);
    }

    #[test]
    fn test_placement_passes_the_turn_and_spends_the_hand() {
        let mut game = Game::new(GameOptions::default());
        game.execute(place(Color::White, "1a"));
        assert_eq!(game.pieces_in_hand(Color::White), 8);
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.next_action_type(), ActionType::Place);
    }

    #[test]
    fn test_turns_alternate_through_the_placement_phase() {
        let mut game = Game::new(three_mens_morris(true));
        game.execute(place(Color::White, "1a"));
        game.execute(place(Color::Black, "2b"));
        game.execute(place(Color::White, "3c"));
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.pieces_in_hand(Color::White), 1);
        assert_eq!(game.pieces_in_hand(Color::Black), 2);
    }

    #[test]
    fn test_rejects_actions_by_the_wrong_player() {
        let game = Game::new(GameOptions::default());
        assert!(!game.can_execute(&place(Color::Black, "1a")));
    }

    #[test]
    fn test_rejects_the_wrong_action_type() {
        let game = Game::new(GameOptions::default());
        assert!(!game.can_execute(&shift(Color::White, "1a", "1d")));
        assert!(!game.can_execute(&remove(Color::White, "1a")));
    }

    #[test]
    fn test_rejects_placement_on_an_occupied_location() {
        let mut game = Game::new(GameOptions::default());
        game.execute(place(Color::White, "4a"));
        assert!(!game.can_execute(&place(Color::Black, "4a")));
    }

    #[test]
    fn test_rejects_placement_on_an_unplayable_grid_cell() {
        let game = Game::new(GameOptions::default());
        assert!(!game.can_execute(&place(Color::White, "1b")));
    }

    #[test]
    fn test_a_closed_mill_lets_the_player_remove() {
        let mut game = Game::new(three_mens_morris(true));
        game.execute(place(Color::White, "1a"));
        game.execute(place(Color::Black, "2b"));
        game.execute(place(Color::White, "1b"));
        game.execute(place(Color::Black, "3c"));
        game.execute(place(Color::White, "1c"));

        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.next_action_type(), ActionType::Remove);
        assert!(!game.can_execute(&place(Color::Black, "2a")));
    }

    #[test]
    fn test_removal_rejects_own_and_empty_locations() {
        let mut game = Game::new(three_mens_morris(true));
        game.execute(place(Color::White, "1a"));
        game.execute(place(Color::Black, "2b"));
        game.execute(place(Color::White, "1b"));
        game.execute(place(Color::Black, "3c"));
        game.execute(place(Color::White, "1c"));

        assert!(!game.can_execute(&remove(Color::White, "1a")));
        assert!(!game.can_execute(&remove(Color::White, "2a")));
        assert!(game.can_execute(&remove(Color::White, "2b")));
    }

    #[test]
    fn test_mill_pieces_are_protected_while_free_pieces_remain() {
        let mut game = Game::new(three_mens_morris(true));
        game.execute(place(Color::White, "2a"));
        game.execute(place(Color::Black, "1a"));
        game.execute(place(Color::White, "2b"));
        game.execute(place(Color::Black, "1b"));
        game.execute(place(Color::White, "3c"));
        game.execute(place(Color::Black, "1c"));

        // Black closed the top mill and white's pieces are all free.
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.next_action_type(), ActionType::Remove);
        assert!(game.can_execute(&remove(Color::Black, "2a")));

        // A white mill would be protected, but a free piece is not.
        game.execute(remove(Color::Black, "3c"));
        assert_eq!(game.current_player(), Color::White);
    }

    #[test]
    fn test_reducing_the_opponent_to_two_pieces_wins() {
        let mut game = Game::new(three_mens_morris(true));
        game.execute(place(Color::White, "1a"));
        game.execute(place(Color::Black, "2b"));
        game.execute(place(Color::White, "1b"));
        game.execute(place(Color::Black, "3c"));
        game.execute(place(Color::White, "1c"));
        game.execute(remove(Color::White, "2b"));

        // Black is down to one piece on the board plus one in hand.
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Color::White));
        assert!(!game.can_execute(&place(Color::Black, "2a")));
    }

    #[test]
    fn test_a_blocked_player_loses_when_jumps_are_disabled() {
        let mut game = Game::new(three_mens_morris(false));
        game.execute(place(Color::White, "1a"));
        game.execute(place(Color::Black, "1c"));
        game.execute(place(Color::White, "1b"));
        game.execute(place(Color::Black, "2b"));
        game.execute(place(Color::White, "2a"));
        game.execute(place(Color::Black, "3a"));

        // White's corner cluster has no empty neighbors left.
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Color::Black));
    }

    #[test]
    fn test_a_blocked_player_with_three_pieces_may_jump() {
        let mut game = Game::new(three_mens_morris(true));
        game.execute(place(Color::White, "1a"));
        game.execute(place(Color::Black, "1c"));
        game.execute(place(Color::White, "1b"));
        game.execute(place(Color::Black, "2b"));
        game.execute(place(Color::White, "2a"));
        game.execute(place(Color::Black, "3a"));

        assert!(!game.is_over());
        assert!(game.can_jump());
        assert!(game.can_execute(&shift(Color::White, "1a", "3c")));
        assert!(!game.can_execute(&shift(Color::White, "1a", "2b")));
    }

    #[test]
    fn test_the_move_phase_follows_board_lines() {
        let mut game = Game::new(GameOptions::default());
        // Walk both hands down to zero without forming mills.
        let placements = [
            "1a", "1d", "1g", "2b", "2d", "2f", "3c", "3d", "3e", "4a", "4b", "4c", "4e", "4f",
            "4g", "5c", "5d", "5e",
        ];
        for (i, destination) in placements.iter().enumerate() {
            let player = if i % 2 == 0 { Color::White } else { Color::Black };
            game.execute(place(player, destination));
        }
        assert_eq!(game.next_action_type(), ActionType::Move);
        assert_eq!(game.current_player(), Color::White);
        assert!(!game.can_jump());

        // Only a line connection away, and only onto a free location.
        assert!(!game.can_execute(&shift(Color::White, "1a", "7a")));
        assert!(!game.can_execute(&shift(Color::White, "1a", "1d")));
        assert!(game.can_execute(&shift(Color::White, "5d", "6d")));

        game.execute(shift(Color::White, "5d", "6d"));
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.next_action_type(), ActionType::Move);
    }

    #[test]
    fn test_undo_restores_the_previous_turn() {
        let mut game = Game::new(three_mens_morris(true));
        game.execute(place(Color::White, "1a"));
        game.execute(place(Color::Black, "2b"));

        let undone = game.undo().unwrap();
        assert_eq!(undone, place(Color::Black, "2b"));
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.pieces_in_hand(Color::Black), 3);
        assert_eq!(game.board().piece_at("2b".parse().unwrap()), None);
    }

    #[test]
    fn test_undo_on_an_empty_history_is_a_no_op() {
        let mut game = Game::new(GameOptions::default());
        assert_eq!(game.undo(), None);
        assert_eq!(game.current_player(), Color::White);
    }

    #[test]
    fn test_undoing_a_removal_restores_the_pending_mill() {
        let mut game = Game::new(three_mens_morris(true));
        game.execute(place(Color::White, "1a"));
        game.execute(place(Color::Black, "2b"));
        game.execute(place(Color::White, "1b"));
        game.execute(place(Color::Black, "3c"));
        game.execute(place(Color::White, "1c"));
        game.execute(remove(Color::White, "2b"));

        game.undo();
        assert!(!game.is_over());
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.next_action_type(), ActionType::Remove);
        assert_eq!(
            game.board().piece_at("2b".parse::<BoardLocation>().unwrap()),
            Some(Color::Black)
        );
    }

    #[test]
    fn test_undoing_a_mill_placement_reverts_to_the_opponents_turn() {
        let mut game = Game::new(three_mens_morris(true));
        game.execute(place(Color::White, "1a"));
        game.execute(place(Color::Black, "2b"));
        game.execute(place(Color::White, "1b"));
        game.execute(place(Color::Black, "3c"));
        game.execute(place(Color::White, "1c"));

        game.undo();
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.next_action_type(), ActionType::Place);
        assert_eq!(game.pieces_in_hand(Color::White), 1);
    }

    #[test]
    #[should_panic(expected = "cannot execute action")]
    fn test_executing_an_invalid_action_panics() {
        let mut game = Game::new(GameOptions::default());
        game.execute(place(Color::Black, "1a"));
    }
}
