use std::convert::TryFrom;
use std::fmt;

use super::error::BoardError;
use super::geometry::{in_bounds, BOARD_SIZE};

/// A square on the board. `q` is the column and `r` is the row, both in `0..8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Position {
    q: u8,
    r: u8,
}

impl Position {
    pub fn new(q: u8, r: u8) -> Result<Self, BoardError> {
        Self::try_from((q as i32, r as i32))
    }

    /// Builds a position from a bitboard index. Panics if `index >= 64`.
    pub fn from_index(index: usize) -> Self {
        assert!(index < 64, "square index out of range: {}", index);
        Self {
            q: (index % BOARD_SIZE as usize) as u8,
            r: (index / BOARD_SIZE as usize) as u8,
        }
    }

    pub fn q(&self) -> u8 {
        self.q
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn index(&self) -> usize {
        self.r as usize * BOARD_SIZE as usize + self.q as usize
    }

    /// Returns the position `distance` steps along `(dq, dr)`, if it is on the board.
    pub fn offset(&self, (dq, dr): (i8, i8), distance: u8) -> Option<Self> {
        let q = self.q as i32 + dq as i32 * distance as i32;
        let r = self.r as i32 + dr as i32 * distance as i32;
        Self::try_from((q, r)).ok()
    }
}

impl TryFrom<(i32, i32)> for Position {
    type Error = BoardError;

    fn try_from((q, r): (i32, i32)) -> Result<Self, Self::Error> {
        if !in_bounds(q, r) {
            return Err(BoardError::OutOfBoundsPosition { q, r });
        }
        Ok(Self {
            q: q as u8,
            r: r as u8,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
