use std::thread;
use std::time::Duration;

use crate::ai::{AiAlgorithm, MorrisAlphaBeta};
use crate::board::Color;
use crate::game::display::GameDisplay;
use crate::game::{ActionType, Game, GameOptions, PlayerAction};
use crate::input_handler::{InputError, MoveInput};

use super::input_source::InputSource;

/// Drives a game to its end: render a frame, ask the input source for
/// a move, translate it into an action, apply it. Engine turns arrive
/// as [`MoveInput::UseEngine`] and are answered by the engine owned by
/// the player on turn.
pub struct GameLoop<T: InputSource> {
    game: Game,
    input: T,
    display: GameDisplay,
    engines: [Box<dyn AiAlgorithm>; 2],
    frame_delay: Option<Duration>,
    status: Option<String>,
}

impl<T: InputSource> GameLoop<T> {
    pub fn new(options: GameOptions, input: T) -> Self {
        Self {
            game: Game::new(options),
            input,
            display: GameDisplay::new(),
            engines: [
                Box::new(MorrisAlphaBeta::new(options)),
                Box::new(MorrisAlphaBeta::new(options)),
            ],
            frame_delay: None,
            status: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn set_engine(&mut self, color: Color, engine: Box<dyn AiAlgorithm>) {
        self.engines[color as usize] = engine;
    }

    /// Pause between frames, so engine matches stay watchable.
    pub fn set_frame_delay(&mut self, delay: Duration) {
        self.frame_delay = Some(delay);
    }

    pub fn run(&mut self) {
        loop {
            let status = self.status.take();
            self.display.render_game_state(&self.game, status.as_deref());

            // The final frame already announces the winner.
            if self.game.is_over() {
                break;
            }

            let current_turn = self.game.current_player();
            match self.input.get_move(current_turn) {
                Ok(Some(input)) => {
                    if self.play(input, current_turn) {
                        if let Some(delay) = self.frame_delay {
                            thread::sleep(delay);
                        }
                    }
                }
                Ok(None) => self.status = Some("invalid input".to_string()),
                Err(InputError::UserExit) => break,
                Err(error) => self.status = Some(format!("error: {}", error)),
            }
        }
    }

    fn play(&mut self, input: MoveInput, player: Color) -> bool {
        let action = match self.action_from_input(input, player) {
            Some(action) => action,
            None => {
                self.status = Some("invalid input for this turn".to_string());
                return false;
            }
        };

        if self.game.can_execute(&action) {
            self.game.execute(action);
            true
        } else {
            self.status = Some(format!("illegal action: {}", action));
            false
        }
    }

    fn action_from_input(&mut self, input: MoveInput, player: Color) -> Option<PlayerAction> {
        match input {
            MoveInput::UseEngine => {
                Some(self.engines[player as usize].next_action(&self.game))
            }
            MoveInput::Single { location } => match self.game.next_action_type() {
                ActionType::Place => Some(PlayerAction::Place {
                    player,
                    destination: location,
                }),
                ActionType::Remove => Some(PlayerAction::Remove {
                    player,
                    source: location,
                }),
                ActionType::Move => None,
            },
            MoveInput::Pair { from, to } => match self.game.next_action_type() {
                ActionType::Move => Some(PlayerAction::Move {
                    player,
                    source: from,
                    destination: to,
                }),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GameType;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Feeds a fixed script of inputs, then asks to exit.
    struct ScriptedInput {
        moves: RefCell<VecDeque<MoveInput>>,
    }

    impl ScriptedInput {
        fn new(inputs: Vec<MoveInput>) -> Self {
            Self {
                moves: RefCell::new(inputs.into()),
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn get_move(&self, _current_turn: Color) -> Result<Option<MoveInput>, InputError> {
            match self.moves.borrow_mut().pop_front() {
                Some(input) => Ok(Some(input)),
                None => Err(InputError::UserExit),
            }
        }
    }

    fn single(input: &str) -> MoveInput {
        MoveInput::Single {
            location: input.parse().unwrap(),
        }
    }

    fn options() -> GameOptions {
        GameOptions {
            game_type: GameType::ThreeMensMorris,
            ..Default::default()
        }
    }

    #[test]
    fn test_a_scripted_game_runs_to_its_winner() {
        // White mills on the top line and takes black down to two.
        let script = vec![
            single("1a"),
            single("2a"),
            single("1b"),
            single("2b"),
            single("1c"),
            single("2a"),
        ];
        let mut game_loop = GameLoop::new(options(), ScriptedInput::new(script));
        game_loop.run();

        assert_eq!(game_loop.game().winner(), Some(Color::White));
    }

    #[test]
    fn test_mismatched_input_is_reported_not_executed() {
        let script = vec![
            MoveInput::Pair {
                from: "1a".parse().unwrap(),
                to: "1b".parse().unwrap(),
            },
            single("2b"),
        ];
        let mut game_loop = GameLoop::new(options(), ScriptedInput::new(script));
        game_loop.run();

        // The movement input cannot start a placing turn, so only the
        // placement landed.
        assert_eq!(game_loop.game().history().len(), 1);
        assert!(!game_loop.game().is_over());
    }

    #[test]
    fn test_engine_turns_are_played_by_the_owned_engines() {
        let script = vec![
            MoveInput::UseEngine,
            MoveInput::UseEngine,
            MoveInput::UseEngine,
            MoveInput::UseEngine,
        ];
        let mut game_loop = GameLoop::new(options(), ScriptedInput::new(script));
        let mut white = MorrisAlphaBeta::new(options());
        white.set_max_search_depth(2);
        let mut black = MorrisAlphaBeta::new(options());
        black.set_max_search_depth(2);
        game_loop.set_engine(Color::White, Box::new(white));
        game_loop.set_engine(Color::Black, Box::new(black));

        game_loop.run();

        // Four engine turns land four actions unless one closed a
        // mill, in which case the removal makes it five.
        assert!(game_loop.game().history().len() >= 4);
    }
}
