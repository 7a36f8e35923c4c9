//! Watch command - watch the agent play against itself or a random player.

use std::str::FromStr;
use std::time::Duration;

use expendibots::board::side::Side;
use expendibots::game::agent::Agent;
use expendibots::game::player::Player;
use expendibots::game::random_player::RandomPlayer;
use expendibots::game::renderer::StatsRenderer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(Debug)]
pub enum Opponent {
    Agent,
    Random,
}

impl FromStr for Opponent {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "agent" => Ok(Opponent::Agent),
            "random" => Ok(Opponent::Random),
            _ => Err("invalid opponent; options are: agent, random"),
        }
    }
}

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(
        short,
        long,
        default_value = "agent",
        help = "Who plays Black: agent or random"
    )]
    pub opponent: Opponent,
    #[structopt(
        long = "distance-weight",
        default_value = "0.01",
        help = "Penalty per unit of squared distance between the two sides"
    )]
    pub distance_weight: f64,
    #[structopt(long, help = "Search root actions in parallel")]
    pub parallel: bool,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.depth, self.parallel, self.distance_weight);
        let white: Box<dyn Player> = Box::new(Agent::with_config(Side::White, config));
        let black: Box<dyn Player> = match self.opponent {
            Opponent::Agent => Box::new(Agent::with_config(Side::Black, config)),
            Opponent::Random => Box::new(RandomPlayer::new(Side::Black)),
        };

        run_game_loop(
            white,
            black,
            Box::new(StatsRenderer {
                delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
            }),
        );
    }
}
