//! PvP command - play a game against another human.

use morris::board::GameType;
use morris::game::{GameLoop, HumanInput};
use structopt::StructOpt;

use super::util::create_options;
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(short, long, default_value = "nine")]
    pub game: GameType,
    #[structopt(long = "no-jumps", help = "Players down to three pieces must keep sliding")]
    pub no_jumps: bool,
}

impl Command for PvpArgs {
    fn execute(self) {
        let options = create_options(self.game, self.no_jumps);
        let mut game_loop = GameLoop::new(options, HumanInput);
        game_loop.run();
    }
}
