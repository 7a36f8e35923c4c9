pub mod bitboard;
pub mod error;
pub mod geometry;
pub mod position;
pub mod side;
pub mod stack_map;

mod display;
mod legal_actions;
mod transition;


use bitboard::Bitboard;
use error::BoardError;
use side::Side;
use stack_map::StackMap;

use crate::evaluate::{self, EvaluationWeights, GameOutcome};

/// Columns 0, 1, 3, 4, 6 and 7 of a single row.
const HOME_COLUMNS: u64 = 0b1101_1011;
const WHITE_HOME: Bitboard = Bitboard(HOME_COLUMNS | HOME_COLUMNS << 8);
const BLACK_HOME: Bitboard = Bitboard(HOME_COLUMNS << 48 | HOME_COLUMNS << 56);

/// Tokens each side starts the game with.
pub const TOKENS_PER_SIDE: u32 = 12;

/// An immutable snapshot of the game, seen from the side about to act.
///
/// `own` always belongs to `active`, and `opponent` to the other side. Every
/// transition produces a new state with the two swapped, so a search never has
/// to carry a separate colour flag around.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GameState {
    active: Side,
    own: StackMap,
    opponent: StackMap,
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

impl GameState {
    /// The starting position: twelve single tokens per side, White to act.
    pub fn initial() -> Self {
        Self {
            active: Side::White,
            own: StackMap::singles(WHITE_HOME),
            opponent: StackMap::singles(BLACK_HOME),
        }
    }

    pub fn new(active: Side, own: StackMap, opponent: StackMap) -> Result<Self, BoardError> {
        if let Some(position) = (own.occupied() & opponent.occupied()).positions().next() {
            return Err(BoardError::OverlappingStacks { position });
        }
        Ok(Self {
            active,
            own,
            opponent,
        })
    }

    /// Builds a state from each colour's stacks rather than from the acting
    /// side's point of view.
    pub fn from_layout(active: Side, white: StackMap, black: StackMap) -> Result<Self, BoardError> {
        match active {
            Side::White => Self::new(active, white, black),
            Side::Black => Self::new(active, black, white),
        }
    }

    /// The same layout with the other side to act.
    pub fn swap_perspective(&self) -> Self {
        Self {
            active: self.active.opposite(),
            own: self.opponent,
            opponent: self.own,
        }
    }

    pub fn active_side(&self) -> Side {
        self.active
    }

    pub fn own_stacks(&self) -> &StackMap {
        &self.own
    }

    pub fn opponent_stacks(&self) -> &StackMap {
        &self.opponent
    }

    pub fn stacks(&self, side: Side) -> &StackMap {
        if side == self.active {
            &self.own
        } else {
            &self.opponent
        }
    }

    pub fn white_stacks(&self) -> &StackMap {
        self.stacks(Side::White)
    }

    pub fn black_stacks(&self) -> &StackMap {
        self.stacks(Side::Black)
    }

    pub fn occupied(&self) -> Bitboard {
        self.own.occupied() | self.opponent.occupied()
    }

    pub fn total_tokens(&self) -> u32 {
        self.own.token_count() + self.opponent.token_count()
    }

    /// Returns the game outcome if either side has been wiped out.
    pub fn outcome(&self) -> Option<GameOutcome> {
        evaluate::game_outcome(self)
    }

    pub fn is_terminal(&self) -> bool {
        self.own.is_empty() || self.opponent.is_empty()
    }

    /// Static score from the acting side's perspective, using the default weights.
    pub fn evaluation(&self) -> f64 {
        evaluate::score(self, &EvaluationWeights::default())
    }
}
