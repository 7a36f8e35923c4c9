mod cli;

use structopt::StructOpt;

use cli::commands::Command;
use cli::Expendibots;

fn main() {
    env_logger::init();
    Expendibots::from_args().execute();
}
