use thiserror::Error;

use crate::action::Action;

use super::position::Position;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("Position ({q}, {r}) is outside the 8x8 board")]
    OutOfBoundsPosition { q: i32, r: i32 },
    #[error("Action `{action}` is not legal in the current state")]
    IllegalAction { action: Action },
    #[error("Square {position} holds tokens of both sides")]
    OverlappingStacks { position: Position },
    #[error("Stack at {position} cannot hold {count} tokens")]
    InvalidStackSize { position: Position, count: u32 },
}
