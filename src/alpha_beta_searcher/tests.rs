//! Domain-agnostic tests for the alpha-beta search algorithm using Nim.
//!
//! Test coverage:
//! - Basic search functionality (winning moves, losing positions, last objects)
//! - Error handling (zero depth, finished games, no moves, failing transitions)
//! - Agreement with an unpruned minimax search
//! - Parallel vs sequential search consistency

use super::*;

/// State of a Nim game: players take 1 to `max_take` objects, last to take wins.
#[derive(Clone, Debug)]
struct NimState {
    pile: u8,
    max_take: u8,
}

impl NimState {
    fn new(pile: u8) -> Self {
        Self { pile, max_take: 3 }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct NimMove {
    take: u8,
}

impl SearchState for NimState {
    type Action = NimMove;
    type ActionList = Vec<NimMove>;
    type Error = &'static str;

    fn legal_actions(&self) -> Vec<NimMove> {
        (1..=self.max_take.min(self.pile))
            .map(|take| NimMove { take })
            .collect()
    }

    fn successor(&self, action: &NimMove) -> Result<Self, Self::Error> {
        if action.take == 0 || action.take > self.max_take || action.take > self.pile {
            return Err("Invalid move");
        }
        Ok(Self {
            pile: self.pile - action.take,
            max_take: self.max_take,
        })
    }

    fn perspective_swapped(&self) -> Self {
        self.clone()
    }

    fn terminal_value(&self, _ply: u8) -> Option<f64> {
        // the previous player took the last object
        if self.pile == 0 {
            Some(-1.0)
        } else {
            None
        }
    }
}

/// Knows nothing about Nim strategy.
#[derive(Clone)]
struct NeutralEvaluator;

impl Evaluator<NimState> for NeutralEvaluator {
    fn score(&self, _state: &NimState) -> f64 {
        0.0
    }
}

/// Arbitrary but deterministic scores, so that leaves are not all equal.
#[derive(Clone)]
struct ScatterEvaluator;

impl Evaluator<NimState> for ScatterEvaluator {
    fn score(&self, state: &NimState) -> f64 {
        ((state.pile as u32 * 7 + 3) % 5) as f64 / 10.0 - 0.2
    }
}

/// A state whose only action cannot be applied.
#[derive(Clone, Debug)]
struct BrokenState;

impl SearchState for BrokenState {
    type Action = u8;
    type ActionList = Vec<u8>;
    type Error = &'static str;

    fn legal_actions(&self) -> Vec<u8> {
        vec![1, 2]
    }

    fn successor(&self, _action: &u8) -> Result<Self, Self::Error> {
        Err("board is broken")
    }

    fn perspective_swapped(&self) -> Self {
        BrokenState
    }

    fn terminal_value(&self, _ply: u8) -> Option<f64> {
        None
    }
}

#[derive(Clone)]
struct BrokenEvaluator;

impl Evaluator<BrokenState> for BrokenEvaluator {
    fn score(&self, _state: &BrokenState) -> f64 {
        0.0
    }
}

/// Plain minimax without pruning: the value of `state` for the root side.
fn minimax<E: Evaluator<NimState>>(
    state: &NimState,
    evaluator: &E,
    depth: u8,
    max_depth: u8,
    maximizing: bool,
    nodes: &mut usize,
) -> f64 {
    *nodes += 1;
    if let Some(value) = state.terminal_value(depth) {
        return if maximizing { value } else { -value };
    }
    let actions = state.legal_actions();
    if depth >= max_depth || actions.is_empty() {
        return if maximizing {
            evaluator.score(state)
        } else {
            evaluator.score(&state.perspective_swapped())
        };
    }
    let values = actions.iter().map(|action| {
        let child = state.successor(action).unwrap();
        minimax(&child, evaluator, depth + 1, max_depth, !maximizing, nodes)
    });
    if maximizing {
        values.fold(f64::NEG_INFINITY, f64::max)
    } else {
        values.fold(f64::INFINITY, f64::min)
    }
}

/// The first best root action and its value according to plain minimax,
/// along with the number of non-root nodes visited.
fn minimax_root<E: Evaluator<NimState>>(
    state: &NimState,
    evaluator: &E,
    max_depth: u8,
) -> (NimMove, f64, usize) {
    let mut nodes = 0;
    let mut best: Option<(NimMove, f64)> = None;
    for action in state.legal_actions() {
        let child = state.successor(&action).unwrap();
        let value = minimax(&child, evaluator, 1, max_depth, false, &mut nodes);
        if best.as_ref().map_or(true, |(_, best_value)| value > *best_value) {
            best = Some((action, value));
        }
    }
    let (action, value) = best.unwrap();
    (action, value, nodes)
}

#[test]
fn test_finds_winning_move() {
    let mut context = SearchContext::new(5);
    let best = alpha_beta_search(&mut context, &NimState::new(5), &NeutralEvaluator).unwrap();

    // leaving a multiple of four loses for the opponent
    assert_eq!(best, NimMove { take: 1 });
    assert_eq!(context.last_score(), Some(1.0));
    assert!(context.last_search_duration().is_some());
}

#[test]
fn test_takes_the_last_objects_at_depth_one() {
    let mut context = SearchContext::new(1);
    let best = alpha_beta_search(&mut context, &NimState::new(3), &NeutralEvaluator).unwrap();

    assert_eq!(best, NimMove { take: 3 });
    assert_eq!(context.last_score(), Some(1.0));
    assert_eq!(context.terminal_count(), 1);
}

#[test]
fn test_leaves_on_the_opponents_turn_are_scored_for_the_root_side() {
    // Piles 9, 8 and 7 score -0.1, 0.2 and 0.0. The leaf is scored as if the
    // root side were to act, not negated.
    let mut context = SearchContext::new(1);
    let best = alpha_beta_search(&mut context, &NimState::new(10), &ScatterEvaluator).unwrap();

    assert_eq!(best, NimMove { take: 2 });
    let score = context.last_score().unwrap();
    assert!((score - 0.2).abs() < 1e-9, "score was {}", score);
}

#[test]
fn test_losing_position_picks_first_action() {
    let mut context = SearchContext::new(6);
    let best = alpha_beta_search(&mut context, &NimState::new(4), &NeutralEvaluator).unwrap();

    assert_eq!(best, NimMove { take: 1 });
    assert_eq!(context.last_score(), Some(-1.0));
}

#[test]
fn test_zero_depth_is_rejected() {
    let mut context = SearchContext::new(0);
    let result = alpha_beta_search(&mut context, &NimState::new(5), &NeutralEvaluator);
    assert_eq!(result, Err(SearchError::DepthTooLow));
}

#[test]
fn test_finished_game_is_rejected() {
    let mut context = SearchContext::new(3);
    let result = alpha_beta_search(&mut context, &NimState::new(0), &NeutralEvaluator);
    assert_eq!(result, Err(SearchError::TerminalState));
    assert_eq!(context.searched_position_count(), 0);
}

#[test]
fn test_no_available_moves() {
    let state = NimState {
        pile: 4,
        max_take: 0,
    };
    let mut context = SearchContext::new(3);
    let result = alpha_beta_search(&mut context, &state, &NeutralEvaluator);
    assert_eq!(result, Err(SearchError::NoAvailableMoves));
}

#[test]
fn test_transition_failures_propagate() {
    for parallel in [false, true] {
        let mut context = SearchContext::with_parallel(2, parallel);
        let result = alpha_beta_search(&mut context, &BrokenState, &BrokenEvaluator);
        assert!(
            matches!(result, Err(SearchError::Transition { ref reason }) if reason.contains("board is broken")),
            "unexpected result {:?}",
            result
        );
        assert_eq!(context.last_score(), None);
    }
}

#[test]
fn test_pruned_search_matches_minimax() {
    for pile in 1..=14 {
        for depth in 1..=5 {
            let state = NimState::new(pile);
            let (expected_action, expected_value, _) =
                minimax_root(&state, &ScatterEvaluator, depth);

            let mut context = SearchContext::new(depth);
            let best = alpha_beta_search(&mut context, &state, &ScatterEvaluator).unwrap();

            assert_eq!(
                context.last_score(),
                Some(expected_value),
                "pile {} depth {}",
                pile,
                depth
            );
            assert_eq!(best, expected_action, "pile {} depth {}", pile, depth);
        }
    }
}

#[test]
fn test_pruning_visits_fewer_nodes() {
    let state = NimState::new(20);
    let (_, _, minimax_nodes) = minimax_root(&state, &ScatterEvaluator, 7);

    let mut context = SearchContext::new(7);
    alpha_beta_search(&mut context, &state, &ScatterEvaluator).unwrap();

    assert!(context.cutoff_count() > 0);
    assert!(
        context.searched_position_count() < minimax_nodes,
        "{} >= {}",
        context.searched_position_count(),
        minimax_nodes
    );
}

#[test]
fn test_reset_stats() {
    let mut context = SearchContext::new(4);
    alpha_beta_search(&mut context, &NimState::new(9), &ScatterEvaluator).unwrap();
    assert!(context.searched_position_count() > 0);

    context.reset_stats();
    assert_eq!(context.searched_position_count(), 0);
    assert_eq!(context.cutoff_count(), 0);
    assert_eq!(context.last_score(), None);
}

#[test]
fn test_parallel_matches_sequential() {
    for pile in 1..=14 {
        let state = NimState::new(pile);

        let mut sequential = SearchContext::new(5);
        let mut parallel = SearchContext::with_parallel(5, true);
        assert!(parallel.is_parallel());

        let sequential_best = alpha_beta_search(&mut sequential, &state, &ScatterEvaluator).unwrap();
        let parallel_best = alpha_beta_search(&mut parallel, &state, &ScatterEvaluator).unwrap();

        assert_eq!(sequential_best, parallel_best, "pile {}", pile);
        assert_eq!(sequential.last_score(), parallel.last_score(), "pile {}", pile);
    }
}
