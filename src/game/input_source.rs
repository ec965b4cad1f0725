//! Where player actions come from. The loop asks its source once per
//! action, not once per turn: closing a mill queues a removal for the
//! same player, which arrives as a separate input. Engine turns surface
//! as [`MoveInput::UseEngine`] and are resolved by the loop itself, so
//! one source can drive a match no matter which sides are automated.

use crate::board::Color;
use crate::input_handler::{self, InputError, MoveInput};

pub trait InputSource {
    fn get_move(&self, current_turn: Color) -> Result<Option<MoveInput>, InputError>;
}

/// Reads every action from the terminal.
pub struct HumanInput;

/// Lets the engines play every action.
pub struct EngineInput;

/// Reads one color's actions from the terminal and hands the other
/// color to its engine.
pub struct ConditionalInput {
    pub human_color: Color,
}

impl InputSource for HumanInput {
    fn get_move(&self, _current_turn: Color) -> Result<Option<MoveInput>, InputError> {
        match input_handler::parse_player_move_input() {
            Ok(input) => Ok(Some(input)),
            Err(InputError::UserExit) => Err(InputError::UserExit),
            // Unparseable lines re-prompt instead of ending the game.
            Err(_) => Ok(None),
        }
    }
}

impl InputSource for EngineInput {
    fn get_move(&self, _current_turn: Color) -> Result<Option<MoveInput>, InputError> {
        Ok(Some(MoveInput::UseEngine))
    }
}

impl InputSource for ConditionalInput {
    fn get_move(&self, current_turn: Color) -> Result<Option<MoveInput>, InputError> {
        if current_turn == self.human_color {
            HumanInput.get_move(current_turn)
        } else {
            EngineInput.get_move(current_turn)
        }
    }
}
