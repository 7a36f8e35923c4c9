//! Play command - play a game against the agent.

use expendibots::board::side::Side;
use expendibots::game::agent::Agent;
use expendibots::game::human_player::HumanPlayer;
use expendibots::game::player::Player;
use expendibots::game::renderer::StatsRenderer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "5")]
    pub depth: u8,
    #[structopt(short = "c", long = "color", default_value = "random")]
    pub color: Side,
    #[structopt(
        long = "distance-weight",
        default_value = "0.01",
        help = "Penalty per unit of squared distance between the two sides"
    )]
    pub distance_weight: f64,
    #[structopt(long, help = "Search root actions in parallel")]
    pub parallel: bool,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(self.depth, self.parallel, self.distance_weight);
        let human: Box<dyn Player> = Box::new(HumanPlayer::new(self.color));
        let agent: Box<dyn Player> = Box::new(Agent::with_config(self.color.opposite(), config));

        println!("You are playing {}", self.color);
        let (white, black) = match self.color {
            Side::White => (human, agent),
            Side::Black => (agent, human),
        };

        run_game_loop(
            white,
            black,
            Box::new(StatsRenderer {
                delay_between_moves: None,
            }),
        );
    }
}
