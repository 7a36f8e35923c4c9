//! Shared utilities for CLI commands.

use expendibots::evaluate::EvaluationWeights;
use expendibots::game::agent::AgentConfig;
use expendibots::game::game_loop::{GameLoop, MatchConfig};
use expendibots::game::player::{Player, PlayerError};
use expendibots::game::renderer::GameRenderer;
use expendibots::input_handler::InputError;
use log::error;

pub(crate) fn run_game_loop(
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    renderer: Box<dyn GameRenderer>,
) {
    let mut game = GameLoop::new(white, black, MatchConfig::default()).with_renderer(renderer);

    match game.run() {
        Ok(result) => println!(
            "Game over after {} plies: {:?} ({:?})",
            result.plies, result.outcome, result.ending
        ),
        Err(PlayerError::Input(InputError::UserExit)) => println!("Goodbye!"),
        Err(err) => {
            error!("match aborted: {}", err);
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}

pub(crate) fn create_config(depth: u8, parallel: bool, distance_weight: f64) -> AgentConfig {
    AgentConfig {
        search_depth: depth,
        parallel,
        weights: EvaluationWeights {
            centroid_distance: distance_weight,
            ..EvaluationWeights::default()
        },
    }
}
