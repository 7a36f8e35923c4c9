//! Actions a side can take on its turn.

mod notation;

use std::fmt;

use smallvec::SmallVec;

use crate::board::position::Position;

/// Legal actions for one state. The initial position has 50, so most lists
/// stay inline.
pub type ActionList = SmallVec<[Action; 64]>;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Action {
    /// Move `count` tokens from the stack at `from` to `to`.
    Move {
        count: u8,
        from: Position,
        to: Position,
    },
    /// Detonate the stack at `at`.
    Boom { at: Position },
}

impl Action {
    pub fn move_tokens(count: u8, from: Position, to: Position) -> Self {
        Action::Move { count, from, to }
    }

    pub fn boom(at: Position) -> Self {
        Action::Boom { at }
    }

    /// The square the acting side must occupy for this action.
    pub fn origin(&self) -> Position {
        match *self {
            Action::Move { from, .. } => from,
            Action::Boom { at } => at,
        }
    }

    pub fn is_boom(&self) -> bool {
        matches!(self, Action::Boom { .. })
    }

    /// Source square of a move.
    pub fn from(&self) -> Option<Position> {
        match *self {
            Action::Move { from, .. } => Some(from),
            Action::Boom { .. } => None,
        }
    }

    /// Destination square of a move.
    pub fn to(&self) -> Option<Position> {
        match *self {
            Action::Move { to, .. } => Some(to),
            Action::Boom { .. } => None,
        }
    }

    /// Number of tokens carried by a move.
    pub fn count(&self) -> Option<u8> {
        match *self {
            Action::Move { count, .. } => Some(count),
            Action::Boom { .. } => None,
        }
    }

    /// Detonated square of a boom.
    pub fn at(&self) -> Option<Position> {
        match *self {
            Action::Boom { at } => Some(at),
            Action::Move { .. } => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move { count, from, to } => write!(f, "MOVE {} {} {}", count, from, to),
            Action::Boom { at } => write!(f, "BOOM {}", at),
        }
    }
}
