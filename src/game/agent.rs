use std::time::Duration;

use log::{debug, info};
use thiserror::Error;

use crate::action::Action;
use crate::alpha_beta_searcher::{SearchContext, SearchError, DEFAULT_SEARCH_DEPTH};
use crate::board::error::BoardError;
use crate::board::side::Side;
use crate::board::GameState;
use crate::boom_search::search_best_action;
use crate::evaluate::EvaluationWeights;

/// Agent configuration
#[derive(Debug, Clone, Copy)]
pub struct AgentConfig {
    pub search_depth: u8,
    pub parallel: bool,
    pub weights: EvaluationWeights,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            parallel: false,
            weights: EvaluationWeights::default(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgentError {
    #[error("board error: {0}")]
    Board(#[from] BoardError),
    #[error("search error: {0}")]
    Search(#[from] SearchError),
    #[error("{actual} acted, but it is {expected}'s turn")]
    OutOfTurn { expected: Side, actual: Side },
    #[error("it is not this agent's turn")]
    NotOurTurn,
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub terminal_positions: usize,
    pub depth: u8,
    pub last_score: Option<f64>,
    pub last_search_duration: Option<Duration>,
}

/// A computer player for one side. It keeps its own copy of the game, which
/// only advances through `record_action`.
pub struct Agent {
    side: Side,
    state: GameState,
    weights: EvaluationWeights,
    search_context: SearchContext,
}

impl Agent {
    /// An agent with the default configuration, starting from the initial position.
    pub fn new(side: Side) -> Self {
        Self::with_config(side, AgentConfig::default())
    }

    pub fn with_config(side: Side, config: AgentConfig) -> Self {
        Self::from_state(side, config, GameState::initial())
    }

    /// An agent joining a game in progress.
    pub fn from_state(side: Side, config: AgentConfig, state: GameState) -> Self {
        Self {
            side,
            state,
            weights: config.weights,
            search_context: SearchContext::with_parallel(config.search_depth, config.parallel),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Picks an action for the current state without applying it.
    pub fn choose_action(&mut self) -> Result<Action, AgentError> {
        if self.state.active_side() != self.side {
            return Err(AgentError::NotOurTurn);
        }

        self.search_context.reset_stats();

        let actions = self.state.legal_actions();
        let action = match actions.as_slice() {
            [] => return Err(SearchError::NoAvailableMoves.into()),
            [only] => {
                debug!("{} has a single legal action, skipping search", self.side);
                *only
            }
            _ => search_best_action(&mut self.search_context, &self.state, &self.weights)?,
        };

        info!(
            "{} chose {} (score: {:?}, positions searched: {})",
            self.side,
            action,
            self.search_context.last_score(),
            self.search_context.searched_position_count()
        );
        Ok(action)
    }

    /// Advances the agent's state by one ply. Both sides' actions must be
    /// recorded, including the agent's own.
    pub fn record_action(&mut self, side: Side, action: &Action) -> Result<(), AgentError> {
        self.state = apply_reported_action(&self.state, side, action)?;
        Ok(())
    }

    pub fn search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            cutoffs: self.search_context.cutoff_count(),
            terminal_positions: self.search_context.terminal_count(),
            depth: self.search_context.search_depth(),
            last_score: self.search_context.last_score(),
            last_search_duration: self.search_context.last_search_duration(),
        }
    }
}

/// The state after `side` plays `action`, provided it is `side`'s turn.
pub(crate) fn apply_reported_action(
    state: &GameState,
    side: Side,
    action: &Action,
) -> Result<GameState, AgentError> {
    let expected = state.active_side();
    if side != expected {
        return Err(AgentError::OutOfTurn {
            expected,
            actual: side,
        });
    }
    Ok(state.apply_action(action)?)
}
