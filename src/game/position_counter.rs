use std::time::{Duration, Instant};

use crate::board::GameState;

/// Counts the action sequences of exactly `depth` plies from `state`. A
/// finished game ends its sequence early and counts once.
pub fn count_positions(state: &GameState, depth: u8) -> usize {
    if depth == 0 || state.is_terminal() {
        return 1;
    }

    state
        .legal_actions()
        .iter()
        .filter_map(|action| state.apply_action(action).ok())
        .map(|next| count_positions(&next, depth - 1))
        .sum()
}

pub fn run_count_positions(depth: u8) {
    let state = GameState::initial();

    let mut total_positions = 0;
    let mut total_duration = Duration::from_secs(0);

    for depth in 1..=depth {
        let start = Instant::now();
        let count = count_positions(&state, depth);
        let duration = start.elapsed();
        let positions_per_second = count as f64 / duration.as_secs_f64();

        total_positions += count;
        total_duration += duration;

        println!(
            "depth: {}, positions: {}, positions per second: {}",
            depth, count, positions_per_second
        );
    }

    println!(
        "total positions: {}, total duration: {:?}, positions per second: {}",
        total_positions,
        total_duration,
        total_positions as f64 / total_duration.as_secs_f64()
    );
}
