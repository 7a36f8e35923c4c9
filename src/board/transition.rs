use std::collections::VecDeque;

use log::trace;

use crate::action::Action;

use super::bitboard::Bitboard;
use super::error::BoardError;
use super::geometry::blast_mask;
use super::position::Position;
use super::GameState;

impl GameState {
    /// Returns the state after the acting side plays `action`.
    ///
    /// The result is seen from the other side: its `own` stacks are this
    /// state's `opponent` stacks and vice versa. `self` is left untouched.
    pub fn apply_action(&self, action: &Action) -> Result<GameState, BoardError> {
        self.validate(action)?;

        let mut own = self.own;
        let mut opponent = self.opponent;

        match *action {
            Action::Move { count, from, to } => {
                own.take(from, count)?;
                own.add(to, count)?;
            }
            Action::Boom { at } => {
                let blast = self.blast_radius(at);
                let own_lost = own.remove_all(blast);
                let opponent_lost = opponent.remove_all(blast);
                trace!(
                    "boom at {} cleared {} squares ({} own tokens, {} opponent tokens)",
                    at,
                    blast.count_ones(),
                    own_lost,
                    opponent_lost
                );
            }
        }

        Ok(GameState {
            active: self.active.opposite(),
            own: opponent,
            opponent: own,
        })
    }

    /// Squares destroyed by a detonation at `at`: the 8-connected component of
    /// occupied squares containing `at`, regardless of who owns them.
    ///
    /// `at` itself is always included, even if it is empty.
    pub fn blast_radius(&self, at: Position) -> Bitboard {
        let occupied = self.occupied();
        let mut removed = Bitboard::from_position(at);
        let mut frontier = VecDeque::with_capacity(occupied.count_ones() as usize);
        frontier.push_back(at);

        while let Some(square) = frontier.pop_front() {
            let reached = blast_mask(square) & occupied & !removed;
            removed |= reached;
            frontier.extend(reached.positions());
        }

        removed
    }
}
