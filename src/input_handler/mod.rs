use std::io;
use std::str::FromStr;

use thiserror::Error;

use crate::board::BoardLocation;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exited")]
    UserExit,
}

/// A parsed line of player input. A single location covers placements
/// and removals; a pair of locations is a movement.
#[derive(Debug, PartialEq, Eq)]
pub enum MoveInput {
    Single { location: BoardLocation },
    Pair { from: BoardLocation, to: BoardLocation },
    UseEngine,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            return Err(InputError::UserExit);
        }
        let invalid = || InputError::InvalidInput {
            input: input.trim_end().to_string(),
        };
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        match tokens.as_slice() {
            [location] => Ok(MoveInput::Single {
                location: location.parse().map_err(|_| invalid())?,
            }),
            [from, to] => Ok(MoveInput::Pair {
                from: from.parse().map_err(|_| invalid())?,
                to: to.parse().map_err(|_| invalid())?,
            }),
            _ => Err(invalid()),
        }
    }
}

pub fn parse_player_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(_n) => input.parse(),
        Err(error) => Err(InputError::IOError {
            error: error.to_string(),
        }),
    }
}
