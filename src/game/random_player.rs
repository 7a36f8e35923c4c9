use crate::action::Action;
use crate::alpha_beta_searcher::SearchError;
use crate::board::side::Side;
use crate::board::GameState;

use super::agent::{apply_reported_action, AgentError};
use super::player::{Player, PlayerError};

/// Baseline opponent that picks uniformly among the legal actions.
pub struct RandomPlayer {
    side: Side,
    state: GameState,
    rng: fastrand::Rng,
}

impl RandomPlayer {
    pub fn new(side: Side) -> Self {
        Self::with_rng(side, fastrand::Rng::new())
    }

    /// A player whose choices are reproducible.
    pub fn with_seed(side: Side, seed: u64) -> Self {
        Self::with_rng(side, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(side: Side, rng: fastrand::Rng) -> Self {
        Self {
            side,
            state: GameState::initial(),
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}

impl Player for RandomPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        "random"
    }

    fn choose_action(&mut self) -> Result<Action, PlayerError> {
        if self.state.active_side() != self.side {
            return Err(AgentError::NotOurTurn.into());
        }

        let actions = self.state.legal_actions();
        if actions.is_empty() {
            return Err(AgentError::from(SearchError::NoAvailableMoves).into());
        }
        Ok(actions[self.rng.usize(..actions.len())])
    }

    fn record_action(&mut self, side: Side, action: &Action) -> Result<(), PlayerError> {
        self.state = apply_reported_action(&self.state, side, action)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_legal_actions_until_the_game_ends() {
        let mut white = RandomPlayer::with_seed(Side::White, 1);
        let mut black = RandomPlayer::with_seed(Side::Black, 2);

        for _ in 0..200 {
            if white.state().is_terminal() {
                break;
            }
            let side = white.state().active_side();
            let mover = match side {
                Side::White => &mut white,
                Side::Black => &mut black,
            };
            assert_eq!(mover.side(), side);
            let action = mover.choose_action().unwrap();
            assert!(mover.state().is_legal(&action), "{} is illegal", action);

            white.record_action(side, &action).unwrap();
            black.record_action(side, &action).unwrap();
            assert_eq!(white.state(), black.state());
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let mut first = RandomPlayer::with_seed(Side::White, 42);
        let mut second = RandomPlayer::with_seed(Side::White, 42);
        assert_eq!(first.choose_action(), second.choose_action());
    }

    #[test]
    fn test_waits_for_its_turn() {
        let mut player = RandomPlayer::new(Side::Black);
        assert_eq!(
            player.choose_action(),
            Err(PlayerError::Agent(AgentError::NotOurTurn))
        );
    }
}
