use std::fmt;

use super::bitboard::Bitboard;
use super::error::BoardError;
use super::position::Position;

/// Token counts per square for a single side. A square is present iff it holds
/// at least one token.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackMap {
    occupied: Bitboard,
    counts: [u8; 64],
}

impl Default for StackMap {
    fn default() -> Self {
        Self {
            occupied: Bitboard::EMPTY,
            counts: [0; 64],
        }
    }
}

impl StackMap {
    pub fn new() -> Self {
        Default::default()
    }

    /// One token on every square of `squares`.
    pub fn singles(squares: Bitboard) -> Self {
        let mut stacks = Self::new();
        for position in squares.positions() {
            stacks.occupied.insert(position);
            stacks.counts[position.index()] = 1;
        }
        stacks
    }

    pub fn from_stacks<I>(stacks: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (Position, u8)>,
    {
        let mut result = Self::new();
        for (position, count) in stacks {
            result.add(position, count)?;
        }
        Ok(result)
    }

    pub fn get(&self, position: Position) -> Option<u8> {
        match self.counts[position.index()] {
            0 => None,
            count => Some(count),
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        self.occupied.contains(position)
    }

    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Number of occupied squares.
    pub fn square_count(&self) -> u32 {
        self.occupied.count_ones()
    }

    /// Number of tokens across all squares.
    pub fn token_count(&self) -> u32 {
        self.iter().map(|(_, count)| count as u32).sum()
    }

    /// Stacks in ascending square index order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, u8)> + '_ {
        self.occupied
            .positions()
            .map(move |position| (position, self.counts[position.index()]))
    }

    pub fn add(&mut self, position: Position, count: u8) -> Result<(), BoardError> {
        let current = self.counts[position.index()];
        let total = current
            .checked_add(count)
            .filter(|&total| total > 0)
            .ok_or(BoardError::InvalidStackSize {
                position,
                count: current as u32 + count as u32,
            })?;
        self.counts[position.index()] = total;
        self.occupied.insert(position);
        Ok(())
    }

    /// Takes `count` tokens off the stack at `position`, dropping the square
    /// once it is empty.
    pub fn take(&mut self, position: Position, count: u8) -> Result<(), BoardError> {
        let current = self.counts[position.index()];
        if count == 0 || count > current {
            return Err(BoardError::InvalidStackSize {
                position,
                count: count as u32,
            });
        }
        self.counts[position.index()] = current - count;
        if current == count {
            self.occupied.remove(position);
        }
        Ok(())
    }

    /// Removes every stack in `squares`, returning how many tokens were removed.
    pub fn remove_all(&mut self, squares: Bitboard) -> u32 {
        let mut removed = 0;
        for position in (self.occupied & squares).positions() {
            removed += self.counts[position.index()] as u32;
            self.counts[position.index()] = 0;
        }
        self.occupied &= !squares;
        removed
    }
}

impl fmt::Debug for StackMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(position, count)| (position.to_string(), count)))
            .finish()
    }
}
