use std::thread;

use log::info;
use rustc_hash::FxHashMap;

use crate::action::Action;
use crate::board::side::Side;
use crate::board::GameState;
use crate::evaluate::GameOutcome;

use super::agent::{AgentError, SearchStats};
use super::player::{Player, PlayerError};
use super::renderer::GameRenderer;

/// Match rules enforced on top of the game itself
#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    /// Total actions, both sides combined, after which the match is drawn.
    pub max_plies: u32,
    /// Occurrences of the same state at which the match is drawn.
    pub repetition_limit: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 500,
            repetition_limit: 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEnding {
    /// At least one side has no tokens left.
    Elimination,
    PlyLimit,
    Repetition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub outcome: GameOutcome,
    pub ending: MatchEnding,
    pub plies: u32,
}

/// Referees a match between two players, keeping the authoritative state.
pub struct GameLoop {
    state: GameState,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    config: MatchConfig,
    renderer: Option<Box<dyn GameRenderer>>,
    history: Vec<(Side, Action)>,
    last_stats: Option<SearchStats>,
    seen: FxHashMap<GameState, u32>,
}

impl GameLoop {
    pub fn new(white: Box<dyn Player>, black: Box<dyn Player>, config: MatchConfig) -> Self {
        let state = GameState::initial();
        let mut seen = FxHashMap::default();
        seen.insert(state, 1);

        Self {
            state,
            white,
            black,
            config,
            renderer: None,
            history: Vec::new(),
            last_stats: None,
            seen,
        }
    }

    pub fn with_renderer(mut self, renderer: Box<dyn GameRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &[(Side, Action)] {
        &self.history
    }

    /// Plays until the match ends. Player errors, including a player
    /// quitting, abort the match.
    pub fn run(&mut self) -> Result<MatchResult, PlayerError> {
        loop {
            self.render();

            if let Some(outcome) = self.state.outcome() {
                return Ok(self.finish(outcome, MatchEnding::Elimination));
            }
            if self.seen.get(&self.state).copied().unwrap_or(0) >= self.config.repetition_limit {
                return Ok(self.finish(GameOutcome::Draw, MatchEnding::Repetition));
            }
            if self.plies() >= self.config.max_plies {
                return Ok(self.finish(GameOutcome::Draw, MatchEnding::PlyLimit));
            }

            self.play_turn()?;

            if let Some(delay) = self.renderer.as_ref().and_then(|r| r.frame_delay()) {
                thread::sleep(delay);
            }
        }
    }

    fn play_turn(&mut self) -> Result<(), PlayerError> {
        let side = self.state.active_side();
        let player = match side {
            Side::White => &mut self.white,
            Side::Black => &mut self.black,
        };

        let action = player.choose_action()?;
        let stats = player.search_stats();
        let next = self.state.apply_action(&action).map_err(AgentError::from)?;

        self.white.record_action(side, &action)?;
        self.black.record_action(side, &action)?;

        self.state = next;
        self.history.push((side, action));
        self.last_stats = stats;
        *self.seen.entry(next).or_insert(0) += 1;
        Ok(())
    }

    fn plies(&self) -> u32 {
        self.history.len() as u32
    }

    fn render(&self) {
        if let Some(renderer) = &self.renderer {
            let last_action = self.history.last().map(|(side, action)| (*side, action));
            renderer.render(&self.state, last_action, self.last_stats.as_ref());
        }
    }

    fn finish(&self, outcome: GameOutcome, ending: MatchEnding) -> MatchResult {
        let result = MatchResult {
            outcome,
            ending,
            plies: self.plies(),
        };
        info!(
            "{} ({}) vs {} ({}): {:?} by {:?} after {} plies",
            Side::White,
            self.white.name(),
            Side::Black,
            self.black.name(),
            result.outcome,
            result.ending,
            result.plies
        );
        result
    }
}
