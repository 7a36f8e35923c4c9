use crate::action::{Action, ActionList};

use super::error::BoardError;
use super::geometry::STEP_DIRECTIONS;
use super::GameState;

impl GameState {
    /// Every action available to the acting side.
    ///
    /// Squares are visited in ascending index order. Each square yields its
    /// moves (left, right, down, up; nearest first) followed by its boom, so the
    /// list is stable for a given state.
    pub fn legal_actions(&self) -> ActionList {
        let mut actions = ActionList::new();
        let blocked = self.opponent.occupied();

        for (from, size) in self.own.iter() {
            for &direction in STEP_DIRECTIONS.iter() {
                for distance in 1..=size {
                    match from.offset(direction, distance) {
                        Some(to) if !blocked.contains(to) => {
                            actions.push(Action::move_tokens(distance, from, to))
                        }
                        // stacks may jump over enemy squares, only the landing square matters
                        Some(_) => continue,
                        None => break,
                    }
                }
            }
            actions.push(Action::boom(from));
        }

        actions
    }

    /// Checks `action` against the rules without applying it.
    ///
    /// A move may carry any number of tokens up to the stack size, over any
    /// straight orthogonal distance up to the stack size, onto a square the
    /// opponent does not hold.
    pub fn validate(&self, action: &Action) -> Result<(), BoardError> {
        let illegal = || BoardError::IllegalAction { action: *action };

        match *action {
            Action::Boom { at } => {
                if !self.own.contains(at) {
                    return Err(illegal());
                }
            }
            Action::Move { count, from, to } => {
                let size = self.own.get(from).ok_or_else(illegal)?;
                if count == 0 || count > size || self.opponent.contains(to) {
                    return Err(illegal());
                }
                let dq = (to.q() as i32 - from.q() as i32).abs();
                let dr = (to.r() as i32 - from.r() as i32).abs();
                let distance = match (dq, dr) {
                    (0, d) | (d, 0) => d,
                    _ => return Err(illegal()),
                };
                if distance == 0 || distance > size as i32 {
                    return Err(illegal());
                }
            }
        }

        Ok(())
    }

    pub fn is_legal(&self, action: &Action) -> bool {
        self.validate(action).is_ok()
    }
}
