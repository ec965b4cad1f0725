use std::fmt::Write;

use termion::{clear, cursor};

use crate::board::Color;
use crate::game::Game;

/// Renders one terminal frame per turn into a reusable buffer.
pub struct GameDisplay {
    buffer: String,
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All).unwrap();
    }

    pub fn render_game_state(&mut self, game: &Game, status: Option<&str>) {
        self.clear();

        write!(self.buffer, "{}\n", game.board()).unwrap();

        if game.pieces_in_hand(Color::White) > 0 || game.pieces_in_hand(Color::Black) > 0 {
            self.buffer.push_str(&format!(
                "in hand: white {}, black {}\n",
                game.pieces_in_hand(Color::White),
                game.pieces_in_hand(Color::Black)
            ));
        }

        if let Some(action) = game.history().last() {
            self.buffer.push_str(&format!("last action: {}\n", action));
        }

        match game.winner() {
            Some(winner) => self.buffer.push_str(&format!("\n{} wins!\n", winner)),
            None => self.buffer.push_str(&format!(
                "\n{} to {}\n",
                game.current_player(),
                game.next_action_type()
            )),
        }

        if let Some(status) = status {
            self.buffer.push_str(&format!("{}\n", status));
        }

        // Print the complete frame
        print!("{}", self.buffer);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GameType;
    use crate::game::{GameOptions, PlayerAction};

    #[test]
    fn test_a_fresh_game_frame() {
        let game = Game::new(GameOptions {
            game_type: GameType::ThreeMensMorris,
            ..Default::default()
        });
        let mut display = GameDisplay::new();
        display.render_game_state(&game, None);

        let frame = display.buffer();
        assert!(frame.contains("   a   b   c"));
        assert!(frame.contains("in hand: white 3, black 3"));
        assert!(frame.contains("white to place"));
        assert!(!frame.contains("last action"));
    }

    #[test]
    fn test_the_frame_tracks_the_game() {
        let mut game = Game::new(GameOptions {
            game_type: GameType::ThreeMensMorris,
            ..Default::default()
        });
        game.execute(PlayerAction::Place {
            player: Color::White,
            destination: "2b".parse().unwrap(),
        });

        let mut display = GameDisplay::new();
        display.render_game_state(&game, Some("status line"));

        let frame = display.buffer();
        assert!(frame.contains("last action: white places at 2b"));
        assert!(frame.contains("black to place"));
        assert!(frame.contains("status line"));
    }
}
