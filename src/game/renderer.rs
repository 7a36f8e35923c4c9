use std::time::Duration;

use crate::action::Action;
use crate::board::side::Side;
use crate::board::GameState;

use super::agent::SearchStats;

pub trait GameRenderer {
    /// Shows `state` before its active side acts. `last_action` is the action
    /// that produced it and `stats` the search behind that action, if any.
    fn render(
        &self,
        state: &GameState,
        last_action: Option<(Side, &Action)>,
        stats: Option<&SearchStats>,
    );

    fn frame_delay(&self) -> Option<Duration>;
}

pub struct StatsRenderer {
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(
        &self,
        state: &GameState,
        last_action: Option<(Side, &Action)>,
        stats: Option<&SearchStats>,
    ) {
        println!("{}", render_last_action(last_action));
        if let Some(stats) = stats {
            println!("{}", render_stats(stats));
        }
        println!("{}", state);
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

fn render_last_action(last_action: Option<(Side, &Action)>) -> String {
    match last_action {
        Some((side, action)) => format!("* {} played {}", side, action),
        None => "* New game".to_string(),
    }
}

fn render_stats(stats: &SearchStats) -> String {
    format!(
        "* Score: {}\n* Positions searched: {} (depth: {}, cutoffs: {}, decided: {})\n* Move took: {}",
        stats
            .last_score
            .map_or("-".to_string(), |score| format!("{:.2}", score)),
        stats.positions_searched,
        stats.depth,
        stats.cutoffs,
        stats.terminal_positions,
        stats
            .last_search_duration
            .map_or("-".to_string(), |duration| format!("{:?}", duration))
    )
}
