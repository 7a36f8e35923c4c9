use crate::board::side::Side;
use crate::board::stack_map::StackMap;
use crate::board::{GameState, TOKENS_PER_SIDE};

// These scores are significantly larger than any possible material value,
// and therefore will incentivize the engine to select for (or against) a
// position where one side has been wiped out.
pub const WIN_SCORE: f64 = 999.0;
pub const LOSS_SCORE: f64 = -WIN_SCORE;
pub const DRAW_SCORE: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Side),
    /// Both sides were wiped out by the same detonation, or the match ran out
    /// of turns or repeated a position too often.
    Draw,
}

/// Tunable weights of the static evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationWeights {
    /// Reward per token the acting side still holds.
    pub own_tokens: f64,
    /// Reward per opponent token already destroyed.
    pub captured_tokens: f64,
    /// Penalty per unit of squared distance between the two sides' centroids.
    pub centroid_distance: f64,
}

impl Default for EvaluationWeights {
    fn default() -> Self {
        Self {
            own_tokens: 1.0,
            captured_tokens: 1.0,
            centroid_distance: 0.01,
        }
    }
}

/// Returns the game outcome if either side has no stacks left.
pub fn game_outcome(state: &GameState) -> Option<GameOutcome> {
    let own_empty = state.own_stacks().is_empty();
    let opponent_empty = state.opponent_stacks().is_empty();

    match (own_empty, opponent_empty) {
        (true, true) => Some(GameOutcome::Draw),
        (false, true) => Some(GameOutcome::Win(state.active_side())),
        (true, false) => Some(GameOutcome::Win(state.active_side().opposite())),
        (false, false) => None,
    }
}

/// Score of a finished game from the acting side's perspective, or `None` if
/// both sides still have stacks. Each `ply` between the search root and the
/// end of the game moves the score one point towards zero, so a win found
/// sooner outscores one found later.
pub fn terminal_score(state: &GameState, ply: u8) -> Option<f64> {
    let ply = ply as f64;
    game_outcome(state).map(|outcome| match outcome {
        GameOutcome::Win(side) if side == state.active_side() => WIN_SCORE - ply,
        GameOutcome::Win(_) => LOSS_SCORE + ply,
        GameOutcome::Draw => DRAW_SCORE,
    })
}

/// Returns the score of the state from the perspective of the acting side.
///
/// Material counts tokens, not squares. The centroid term pulls the acting
/// side towards the opponent, where detonations can reach it.
pub fn score(state: &GameState, weights: &EvaluationWeights) -> f64 {
    if let Some(score) = terminal_score(state, 0) {
        return score;
    }

    let own = state.own_stacks();
    let opponent = state.opponent_stacks();

    let own_tokens = own.token_count() as f64;
    let captured_tokens = TOKENS_PER_SIDE.saturating_sub(opponent.token_count()) as f64;

    weights.own_tokens * own_tokens + weights.captured_tokens * captured_tokens
        - weights.centroid_distance * squared_centroid_distance(own, opponent)
}

fn squared_centroid_distance(own: &StackMap, opponent: &StackMap) -> f64 {
    let (own_q, own_r) = centroid(own);
    let (opponent_q, opponent_r) = centroid(opponent);
    (own_q - opponent_q).powi(2) + (own_r - opponent_r).powi(2)
}

/// Mean square coordinates over occupied squares, unweighted by stack size.
/// Callers guarantee `stacks` is non-empty.
fn centroid(stacks: &StackMap) -> (f64, f64) {
    let squares = stacks.square_count() as f64;
    let (sum_q, sum_r) = stacks
        .iter()
        .fold((0.0, 0.0), |(sum_q, sum_r), (position, _)| {
            (sum_q + position.q() as f64, sum_r + position.r() as f64)
        });
    (sum_q / squares, sum_r / squares)
}
