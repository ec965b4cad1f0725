//! Play command - play a game against the computer.

use morris::board::{Color, GameType};
use morris::game::{ConditionalInput, GameLoop};
use structopt::StructOpt;

use super::util::{create_engine, create_options, Strategy};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "nine")]
    pub game: GameType,
    #[structopt(short = "c", long = "color", default_value = "random")]
    pub color: Color,
    #[structopt(short, long, help = "Depth cap for the engine search")]
    pub depth: Option<u32>,
    #[structopt(long = "time", help = "Engine time budget per action in milliseconds")]
    pub time_ms: Option<u64>,
    #[structopt(long = "no-jumps", help = "Players down to three pieces must keep sliding")]
    pub no_jumps: bool,
}

impl Command for PlayArgs {
    fn execute(self) {
        let options = create_options(self.game, self.no_jumps);
        let mut game_loop = GameLoop::new(
            options,
            ConditionalInput {
                human_color: self.color,
            },
        );
        game_loop.set_engine(
            self.color.opposite(),
            create_engine(Strategy::AlphaBeta, options, self.depth, self.time_ms),
        );
        game_loop.run();
    }
}
