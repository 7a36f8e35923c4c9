//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    count_positions::CountPositionsArgs, play::PlayArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "expendibots",
    about = "An alpha-beta agent for Expendibots, the game of exploding token stacks"
)]
pub enum Expendibots {
    #[structopt(
        name = "play",
        about = "Play a game against the agent, which searches `--depth` plies ahead (default: 5). Your side will be chosen at random unless you specify it with `--color`. Enter actions as `MOVE n (q, r) (q, r)` or `BOOM (q, r)`, or `quit` to leave."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the agent play at the given `--depth` (default: 3) against itself, or against a uniformly random player with `--opponent random`."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the action sequences from the initial position for every depth up to `--depth` (default: 3), and report the time it took to do so."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Expendibots {
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
            Watch(cmd),
            CountPositions(cmd),
        }
    }
}
