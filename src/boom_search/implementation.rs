//! Expendibots trait implementations for the alpha-beta search.

use crate::action::{Action, ActionList};
use crate::alpha_beta_searcher::{
    alpha_beta_search, Evaluator, SearchContext, SearchError, SearchState,
};
use crate::board::{error::BoardError, GameState};
use crate::evaluate::{self, EvaluationWeights};

impl SearchState for GameState {
    type Action = Action;
    type ActionList = ActionList;
    type Error = BoardError;

    #[inline]
    fn legal_actions(&self) -> ActionList {
        GameState::legal_actions(self)
    }

    #[inline]
    fn successor(&self, action: &Action) -> Result<GameState, BoardError> {
        self.apply_action(action)
    }

    #[inline]
    fn perspective_swapped(&self) -> GameState {
        self.swap_perspective()
    }

    #[inline]
    fn terminal_value(&self, ply: u8) -> Option<f64> {
        evaluate::terminal_score(self, ply)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BoomEvaluator {
    weights: EvaluationWeights,
}

impl BoomEvaluator {
    pub fn new(weights: EvaluationWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &EvaluationWeights {
        &self.weights
    }
}

impl Evaluator<GameState> for BoomEvaluator {
    #[inline]
    fn score(&self, state: &GameState) -> f64 {
        evaluate::score(state, &self.weights)
    }
}

/// Searches for the best action for the side to act in `state`.
#[must_use = "search returns the best action found"]
pub fn search_best_action(
    context: &mut SearchContext,
    state: &GameState,
    weights: &EvaluationWeights,
) -> Result<Action, SearchError> {
    alpha_beta_search(context, state, &BoomEvaluator::new(*weights))
}
