use std::fmt;
use std::str::FromStr;

/// The three classic mill game variants. They share the rules and only
/// differ in board layout and starting piece count.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GameType {
    ThreeMensMorris,
    SixMensMorris,
    NineMensMorris,
}

impl GameType {
    pub const ALL: [GameType; 3] = [
        GameType::ThreeMensMorris,
        GameType::SixMensMorris,
        GameType::NineMensMorris,
    ];

    /// Width of the square grid the board is laid out on.
    pub fn board_size(&self) -> u8 {
        match self {
            GameType::ThreeMensMorris => 3,
            GameType::SixMensMorris => 5,
            GameType::NineMensMorris => 7,
        }
    }

    /// How many pieces each player starts with in hand.
    pub fn initial_piece_count(&self) -> u8 {
        match self {
            GameType::ThreeMensMorris => 3,
            GameType::SixMensMorris => 6,
            GameType::NineMensMorris => 9,
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameType::ThreeMensMorris => "three men's morris",
            GameType::SixMensMorris => "six men's morris",
            GameType::NineMensMorris => "nine men's morris",
        };
        write!(f, "{}", name)
    }
}

type ParseError = &'static str;

impl FromStr for GameType {
    type Err = ParseError;

    fn from_str(game_type: &str) -> Result<Self, Self::Err> {
        match game_type.to_lowercase().as_str() {
            "three" | "3" => Ok(GameType::ThreeMensMorris),
            "six" | "6" => Ok(GameType::SixMensMorris),
            "nine" | "9" => Ok(GameType::NineMensMorris),
            _ => Err("invalid game type; options are: three (3), six (6), nine (9)"),
        }
    }
}
