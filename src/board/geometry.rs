//! Static facts about the 8x8 coordinate space.

use once_cell::sync::Lazy;

use super::bitboard::Bitboard;
use super::position::Position;

pub const BOARD_SIZE: u8 = 8;

/// A unit offset `(dq, dr)`.
pub type Direction = (i8, i8);

/// Orthogonal directions a stack may travel in, in move-generation order.
pub const STEP_DIRECTIONS: [Direction; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// King-move offsets reached by a blast.
pub const BLAST_DIRECTIONS: [Direction; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, 1),
    (1, 1),
    (1, -1),
    (-1, -1),
];

static BLAST_MASKS: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    let mut masks = [Bitboard::EMPTY; 64];
    for (index, mask) in masks.iter_mut().enumerate() {
        for neighbor in neighbors(Position::from_index(index), &BLAST_DIRECTIONS) {
            mask.insert(neighbor);
        }
    }
    masks
});

pub fn in_bounds(q: i32, r: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&q) && (0..BOARD_SIZE as i32).contains(&r)
}

pub fn step_directions() -> &'static [Direction] {
    &STEP_DIRECTIONS
}

pub fn blast_directions() -> &'static [Direction] {
    &BLAST_DIRECTIONS
}

/// The in-bounds squares one step from `position` along each of `directions`.
pub fn neighbors(
    position: Position,
    directions: &[Direction],
) -> impl Iterator<Item = Position> + '_ {
    directions
        .iter()
        .filter_map(move |&direction| position.offset(direction, 1))
}

/// All squares a blast at `position` reaches directly.
#[inline]
pub fn blast_mask(position: Position) -> Bitboard {
    BLAST_MASKS[position.index()]
}
