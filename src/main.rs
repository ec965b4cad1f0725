use structopt::StructOpt;

use crate::cli::commands::Command;
use crate::cli::Morris;

mod cli;

fn main() {
    env_logger::init();
    Morris::from_args().execute();
}
