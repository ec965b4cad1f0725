//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{play::PlayArgs, pvp::PvpArgs, watch::WatchArgs};

#[derive(StructOpt)]
#[structopt(
    name = "morris",
    about = "An engine for the Morris family of mill games"
)]
pub enum Morris {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which will search for the best action using alpha-beta pruning within a one second budget per turn (tune with `--depth` and `--time`). Your color will be chosen at random unless you specify with `--color`. The board defaults to nine men's morris; pick another variant with `--game` (three, six, nine)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine. The board defaults to nine men's morris; pick another variant with `--game` (three, six, nine)."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch two engines play against each other, pausing `--delay` milliseconds between actions. Pick each side's strategy with `--white` and `--black` (alphabeta, random)."
    )]
    Watch(WatchArgs),
}

impl crate::cli::commands::Command for Morris {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
        }
    }
}
