use std::io::{self, BufRead, BufReader};

use log::warn;

use crate::action::Action;
use crate::board::side::Side;
use crate::board::GameState;
use crate::input_handler::{parse_action_input, InputError};

use super::agent::{apply_reported_action, AgentError};
use super::player::{Player, PlayerError};

/// A person typing actions, one per line. Unparseable or illegal actions are
/// reported and asked for again.
pub struct HumanPlayer {
    side: Side,
    state: GameState,
    input: Box<dyn BufRead>,
}

impl HumanPlayer {
    /// A player reading from stdin.
    pub fn new(side: Side) -> Self {
        Self::with_input(side, Box::new(BufReader::new(io::stdin())))
    }

    pub fn with_input(side: Side, input: Box<dyn BufRead>) -> Self {
        Self {
            side,
            state: GameState::initial(),
            input,
        }
    }
}

impl Player for HumanPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        "human"
    }

    fn choose_action(&mut self) -> Result<Action, PlayerError> {
        if self.state.active_side() != self.side {
            return Err(AgentError::NotOurTurn.into());
        }

        loop {
            println!("Enter your action, e.g. MOVE 1 (0, 1) (0, 2) or BOOM (3, 1):");
            match parse_action_input(&mut self.input) {
                Ok(action) => match self.state.validate(&action) {
                    Ok(()) => return Ok(action),
                    Err(error) => {
                        warn!("rejected {}: {}", action, error);
                        println!("error: {}", error);
                    }
                },
                Err(error @ InputError::InvalidInput { .. }) => {
                    warn!("{}", error);
                    println!("error: {}", error);
                }
                Err(error) => return Err(error.into()),
            }
        }
    }

    fn record_action(&mut self, side: Side, action: &Action) -> Result<(), PlayerError> {
        self.state = apply_reported_action(&self.state, side, action)?;
        Ok(())
    }
}
