//! Shared utilities for CLI commands.

use std::str::FromStr;
use std::time::Duration;

use morris::ai::{AiAlgorithm, MorrisAlphaBeta, RandomAi};
use morris::board::GameType;
use morris::game::GameOptions;

/// Which algorithm drives an engine-controlled color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Strategy {
    AlphaBeta,
    Random,
}

type ParseError = &'static str;

impl FromStr for Strategy {
    type Err = ParseError;

    fn from_str(strategy: &str) -> Result<Self, Self::Err> {
        match strategy.to_lowercase().as_str() {
            "alphabeta" | "alpha-beta" => Ok(Strategy::AlphaBeta),
            "random" => Ok(Strategy::Random),
            _ => Err("invalid strategy; options are: alphabeta, random"),
        }
    }
}

pub(crate) fn create_options(game_type: GameType, no_jumps: bool) -> GameOptions {
    GameOptions {
        game_type,
        jumps_allowed: !no_jumps,
        ..Default::default()
    }
}

pub(crate) fn create_engine(
    strategy: Strategy,
    options: GameOptions,
    depth: Option<u32>,
    time_ms: Option<u64>,
) -> Box<dyn AiAlgorithm> {
    match strategy {
        Strategy::AlphaBeta => {
            let mut engine = MorrisAlphaBeta::new(options);
            if let Some(depth) = depth {
                engine.set_max_search_depth(depth);
            }
            if let Some(time_ms) = time_ms {
                engine.set_max_search_time(Duration::from_millis(time_ms));
            }
            Box::new(engine)
        }
        Strategy::Random => Box::new(RandomAi::new()),
    }
}
