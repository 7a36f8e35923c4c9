use thiserror::Error;

use crate::action::Action;
use crate::board::side::Side;
use crate::input_handler::InputError;

use super::agent::{Agent, AgentError, SearchStats};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlayerError {
    #[error(transparent)]
    Agent(#[from] AgentError),
    #[error(transparent)]
    Input(#[from] InputError),
}

/// One participant in a match. Every action, including the player's own, is
/// reported back through `record_action` once the match accepts it.
pub trait Player {
    fn side(&self) -> Side;

    fn name(&self) -> &str;

    fn choose_action(&mut self) -> Result<Action, PlayerError>;

    fn record_action(&mut self, side: Side, action: &Action) -> Result<(), PlayerError>;

    /// Statistics of the latest search, for players that search.
    fn search_stats(&self) -> Option<SearchStats> {
        None
    }
}

impl Player for Agent {
    fn side(&self) -> Side {
        Agent::side(self)
    }

    fn name(&self) -> &str {
        "agent"
    }

    fn choose_action(&mut self) -> Result<Action, PlayerError> {
        Ok(Agent::choose_action(self)?)
    }

    fn record_action(&mut self, side: Side, action: &Action) -> Result<(), PlayerError> {
        Ok(Agent::record_action(self, side, action)?)
    }

    fn search_stats(&self) -> Option<SearchStats> {
        Some(Agent::search_stats(self))
    }
}
