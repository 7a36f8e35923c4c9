//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! of scores that can still influence the result. Branches that fall outside this window are
//! pruned without affecting the final result, so the search returns the same value as a full
//! minimax walk while visiting fewer nodes.
//!
//! # Perspective
//!
//! States report scores from the perspective of the side to act. The search keeps alpha and
//! beta relative to the root side. Terminal values are negated at minimizing nodes, so a win
//! for the root side is positive at any ply. Static leaves on the opponent's turn are scored
//! on the perspective-swapped state, which keeps one-sided terms of the evaluation (such as
//! a distance penalty) working for the root side.
//!
//! # Parallel Search
//!
//! Root actions can be searched in parallel with rayon. Each root child then gets a full
//! window instead of the running root alpha, which costs some pruning but selects the same
//! value and the same action as the sequential search.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use log::debug;
use rayon::prelude::*;
use thiserror::Error;

use super::{Evaluator, SearchState};

/// The default number of plies searched below the root.
pub const DEFAULT_SEARCH_DEPTH: u8 = 5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("the game is already over")]
    TerminalState,
    #[error("failed to apply an action during search: {reason}")]
    Transition { reason: String },
}

/// Search configuration parameters.
struct SearchConfig {
    depth: u8,
    parallel: bool,
}

/// Statistics collected during search.
struct SearchStats {
    position_count: AtomicUsize,
    cutoff_count: AtomicUsize,
    terminal_count: AtomicUsize,
    last_score: Option<f64>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn new() -> Self {
        Self {
            position_count: AtomicUsize::new(0),
            cutoff_count: AtomicUsize::new(0),
            terminal_count: AtomicUsize::new(0),
            last_score: None,
            last_duration: None,
        }
    }

    fn increment(&self) {
        self.position_count.fetch_add(1, Ordering::SeqCst);
    }

    fn increment_cutoffs(&self) {
        self.cutoff_count.fetch_add(1, Ordering::SeqCst);
    }

    fn increment_terminals(&self) {
        self.terminal_count.fetch_add(1, Ordering::SeqCst);
    }

    fn reset(&mut self) {
        self.last_score = None;
        self.last_duration = None;
        self.position_count.store(0, Ordering::SeqCst);
        self.cutoff_count.store(0, Ordering::SeqCst);
        self.terminal_count.store(0, Ordering::SeqCst);
    }

    fn record_result(&mut self, score: f64, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }
}

pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl SearchContext {
    /// A sequential search context for the given depth.
    pub fn new(depth: u8) -> Self {
        Self::with_parallel(depth, false)
    }

    pub fn with_parallel(depth: u8, parallel: bool) -> Self {
        Self {
            config: SearchConfig { depth, parallel },
            stats: SearchStats::new(),
        }
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }

    pub fn is_parallel(&self) -> bool {
        self.config.parallel
    }

    pub fn search_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Nodes visited by the search, root children included.
    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count.load(Ordering::SeqCst)
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoff_count.load(Ordering::SeqCst)
    }

    /// Nodes at which the game was already decided.
    pub fn terminal_count(&self) -> usize {
        self.stats.terminal_count.load(Ordering::SeqCst)
    }

    /// The root score of the most recent search, from the root side's perspective.
    pub fn last_score(&self) -> Option<f64> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }
}

/// Searches `state` to the context's depth and returns the best action for
/// the side to act.
///
/// Ties between equally scored actions go to the one listed first by
/// `legal_actions`.
pub fn alpha_beta_search<S, E>(
    context: &mut SearchContext,
    state: &S,
    evaluator: &E,
) -> Result<S::Action, SearchError>
where
    S: SearchState,
    E: Evaluator<S>,
{
    debug!("alpha-beta search depth: {}", context.search_depth());

    if context.search_depth() < 1 {
        return Err(SearchError::DepthTooLow);
    }

    if state.terminal_value(0).is_some() {
        return Err(SearchError::TerminalState);
    }

    let candidates = state.legal_actions();
    if candidates.as_ref().is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    let start = Instant::now();

    let (score, best_action) = if context.is_parallel() {
        search_root_parallel(context, state, evaluator, candidates.as_ref())?
    } else {
        search_root_sequential(context, state, evaluator, candidates.as_ref())?
    };

    let duration = start.elapsed();
    context.stats.record_result(score, duration);

    debug!(
        "search complete: score {}, {} positions, {} cutoffs, {} terminals in {:?}",
        score,
        context.searched_position_count(),
        context.cutoff_count(),
        context.terminal_count(),
        duration
    );

    Ok(best_action)
}

fn search_root_sequential<S, E>(
    context: &SearchContext,
    state: &S,
    evaluator: &E,
    candidates: &[S::Action],
) -> Result<(f64, S::Action), SearchError>
where
    S: SearchState,
    E: Evaluator<S>,
{
    let mut best: Option<(f64, S::Action)> = None;
    let mut alpha = f64::NEG_INFINITY;

    for action in candidates {
        let child = apply(state, action)?;
        let score = alpha_beta(context, &child, evaluator, 1, alpha, f64::INFINITY, false)?;
        debug!("root action {:?} scored {}", action, score);

        if update_best(score, action, &mut best) {
            alpha = score;
        }
    }

    best.ok_or(SearchError::NoAvailableMoves)
}

fn search_root_parallel<S, E>(
    context: &SearchContext,
    state: &S,
    evaluator: &E,
    candidates: &[S::Action],
) -> Result<(f64, S::Action), SearchError>
where
    S: SearchState,
    E: Evaluator<S>,
{
    let scores = candidates
        .par_iter()
        .map(|action| {
            let child = apply(state, action)?;
            alpha_beta(
                context,
                &child,
                evaluator,
                1,
                f64::NEG_INFINITY,
                f64::INFINITY,
                false,
            )
        })
        .collect::<Result<Vec<f64>, SearchError>>()?;

    // rayon keeps the collected order, so ties resolve exactly as in the
    // sequential search.
    let mut best = None;
    for (score, action) in scores.into_iter().zip(candidates) {
        debug!("root action {:?} scored {}", action, score);
        update_best(score, action, &mut best);
    }

    best.ok_or(SearchError::NoAvailableMoves)
}

/// Keeps the first action with the highest score. Returns true if `best` changed.
fn update_best<A: Clone>(score: f64, action: &A, best: &mut Option<(f64, A)>) -> bool {
    match best {
        Some((best_score, _)) if score <= *best_score => false,
        _ => {
            *best = Some((score, action.clone()));
            true
        }
    }
}

fn apply<S: SearchState>(state: &S, action: &S::Action) -> Result<S, SearchError> {
    state
        .successor(action)
        .map_err(|error| SearchError::Transition {
            reason: format!("{:?}", error),
        })
}

/// Scores `state` from the root side's perspective.
///
/// `depth` counts plies below the root. Nodes where the root side acts are
/// maximizing. Returns `alpha` at maximizing nodes and `beta` at minimizing
/// nodes once the window closes.
fn alpha_beta<S, E>(
    context: &SearchContext,
    state: &S,
    evaluator: &E,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
) -> Result<f64, SearchError>
where
    S: SearchState,
    E: Evaluator<S>,
{
    context.stats.increment();

    if let Some(value) = state.terminal_value(depth) {
        context.stats.increment_terminals();
        return Ok(if maximizing { value } else { -value });
    }

    if depth >= context.search_depth() {
        return Ok(root_score(state, evaluator, maximizing));
    }

    let actions = state.legal_actions();
    if actions.as_ref().is_empty() {
        return Ok(root_score(state, evaluator, maximizing));
    }

    for action in actions.as_ref() {
        let child = apply(state, action)?;
        let score = alpha_beta(context, &child, evaluator, depth + 1, alpha, beta, !maximizing)?;

        if maximizing {
            if score > alpha {
                alpha = score;
            }
        } else if score < beta {
            beta = score;
        }

        if alpha >= beta {
            context.stats.increment_cutoffs();
            break;
        }
    }

    Ok(if maximizing { alpha } else { beta })
}

/// Static score of `state` for the root side. On the opponent's turn the
/// position is scored with the root side to act instead of negating the
/// opponent's score.
fn root_score<S, E>(state: &S, evaluator: &E, maximizing: bool) -> f64
where
    S: SearchState,
    E: Evaluator<S>,
{
    if maximizing {
        evaluator.score(state)
    } else {
        evaluator.score(&state.perspective_swapped())
    }
}
