//! Watch command - watch two engines play against each other.

use std::time::Duration;

use morris::board::{Color, GameType};
use morris::game::{EngineInput, GameLoop};
use structopt::StructOpt;

use super::util::{create_engine, create_options, Strategy};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "nine")]
    pub game: GameType,
    #[structopt(long = "white", default_value = "alphabeta")]
    pub white_strategy: Strategy,
    #[structopt(long = "black", default_value = "alphabeta")]
    pub black_strategy: Strategy,
    #[structopt(short, long, help = "Depth cap for both engines")]
    pub depth: Option<u32>,
    #[structopt(long = "time", help = "Engine time budget per action in milliseconds")]
    pub time_ms: Option<u64>,
    #[structopt(long = "no-jumps", help = "Players down to three pieces must keep sliding")]
    pub no_jumps: bool,
    #[structopt(
        long = "delay",
        default_value = "750",
        help = "Delay between actions in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let options = create_options(self.game, self.no_jumps);
        let mut game_loop = GameLoop::new(options, EngineInput);
        game_loop.set_engine(
            Color::White,
            create_engine(self.white_strategy, options, self.depth, self.time_ms),
        );
        game_loop.set_engine(
            Color::Black,
            create_engine(self.black_strategy, options, self.depth, self.time_ms),
        );
        game_loop.set_frame_delay(Duration::from_millis(self.delay_ms));
        game_loop.run();
    }
}
